pub mod components;
pub mod events;
mod systems;

use bevy::prelude::*;
use crate::inventory::InventorySet;
use components::*;
use events::*;
use systems::*;

/// 背包界面：面板、行、以及分两帧完成的刷新
pub struct InventoryViewPlugin;
impl Plugin for InventoryViewPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InventoryView>()
            .add_event::<ToggleInventoryView>()
            .add_systems(Startup, spawn_inventory_panel)
            .add_systems(
                Update,
                (toggle_inventory_view, row_button_interactions).in_set(InventorySet::Input),
            )
            // 先完成上一帧的重建，再处理本帧的请求
            .add_systems(
                Update,
                (rebuild_rows, apply_refresh_requests)
                    .chain()
                    .in_set(InventorySet::View),
            );
    }
}
