//! 测试用的无窗口 App

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::character::{components::{Player, Stats}, CharacterPlugin};
use crate::core::{events::LogEvent, states::AppState, CorePlugin};
use crate::data::catalog::ItemCatalog;
use crate::data::schema::{EffectType, ItemTemplate};
use crate::inventory::InventoryPlugin;
use crate::pickup::PickupPlugin;
use crate::view::InventoryViewPlugin;

pub fn test_catalog() -> ItemCatalog {
    let item = |name: &str, display_name: &str, effect, magnitude| ItemTemplate {
        name: name.into(),
        display_name: display_name.into(),
        effect,
        magnitude,
        icon: format!("icons/{name}.png"),
    };
    ItemCatalog::from_templates(vec![
        item("Potion", "Potion", EffectType::HealthBonus, 5),
        item("RingOfHealth", "Ring of Health", EffectType::HealthBonus, 10),
        item("BookOfXP", "Book of XP", EffectType::ExperienceBonus, 25),
    ])
    .unwrap()
}

/// 不加载资源，直接插入物品表
pub fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .add_plugins((
            CorePlugin,
            InventoryPlugin,
            InventoryViewPlugin,
            CharacterPlugin,
            PickupPlugin,
        ))
        .insert_resource(test_catalog());
    app
}

/// 进入 InGame 并跑完第一帧
pub fn enter_game(app: &mut App) {
    app.world_mut()
        .resource_mut::<NextState<AppState>>()
        .set(AppState::InGame);
    app.update();
}

pub fn player_stats(app: &mut App) -> Stats {
    let mut query = app.world_mut().query_filtered::<&Stats, With<Player>>();
    query.single(app.world()).unwrap().clone()
}

/// 最近一帧写出的 LogEvent
pub fn log_lines(app: &App) -> Vec<String> {
    app.world()
        .resource::<Events<LogEvent>>()
        .iter_current_update_events()
        .map(|e| e.0.clone())
        .collect()
}
