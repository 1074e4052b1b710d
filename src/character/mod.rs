pub mod components;
pub mod events;
pub mod systems;

use crate::core::states::AppState;
use bevy::prelude::*;
use events::*;
use systems::*;

pub struct CharacterPlugin;

impl Plugin for CharacterPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ShowStats>()
            .add_systems(Startup, spawn_hud)
            // 每次进入游戏都重新生成玩家
            .add_systems(OnEnter(AppState::InGame), spawn_player)
            .add_systems(
                Update,
                (sync_stat_display, show_stats).run_if(in_state(AppState::InGame)),
            );
    }
}
