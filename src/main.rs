use anyhow::{anyhow, Context};
use bevy::prelude::*;
use std::path::Path;

mod character;
mod core;
mod data;
mod interface;
mod inventory;
mod pickup;
mod view;

#[cfg(test)]
mod testing;

use crate::core::config::GameConfig;
use crate::core::events::LogEvent;
use crate::core::{states, CorePlugin};
use crate::interface::debug_cli::DebugCliPlugin;

const CONFIG_PATH: &str = "assets/config.toml";

fn main() -> anyhow::Result<()> {
    let config = load_config(Path::new(CONFIG_PATH))?;

    let exit = App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Inventory".into(),
                visible: !config.headless, // headless 时只用 CLI
                ..default()
            }),
            ..default()
        }))
        .insert_resource(config)
        .add_plugins(CorePlugin)
        .add_plugins(crate::data::DataPlugin)
        .add_plugins(crate::inventory::InventoryPlugin)
        .add_plugins(crate::view::InventoryViewPlugin)
        .add_plugins(crate::character::CharacterPlugin)
        .add_plugins(crate::pickup::PickupPlugin)
        .add_plugins(DebugCliPlugin)
        .add_systems(Startup, spawn_camera)
        .add_systems(Update, forward_log_event) // 简单打印
        .add_systems(Startup, |mut next: ResMut<NextState<states::AppState>>| {
            next.set(states::AppState::Loading);
        })
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(anyhow!("exited with code {code}")),
    }
}

/// 配置文件缺失时使用默认值
fn load_config(path: &Path) -> anyhow::Result<GameConfig> {
    if !path.exists() {
        eprintln!("{} not found, using default config", path.display());
        return Ok(GameConfig::default());
    }
    GameConfig::load(path).with_context(|| format!("failed to load {}", path.display()))
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn forward_log_event(mut reader: EventReader<LogEvent>) {
    for e in reader.read() {
        println!("> {}", e.0);
    }
}
