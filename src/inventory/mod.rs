pub mod components;
pub mod events;
mod systems;

use bevy::prelude::*;
use crate::core::states::AppState;
use components::*;
use events::*;
use systems::*;

/// 每帧的执行顺序：输入 → 修改背包 → 刷新界面
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventorySet {
    Input,
    Mutate,
    View,
}

pub struct InventoryPlugin;
impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InventoryStore>()
            .add_event::<AddItemEvent>()
            .add_event::<RemoveItemEvent>()
            .add_event::<UseItemEvent>()
            .add_event::<ItemRemoved>()
            .add_event::<RefreshInventoryView>()
            .add_event::<ListInventoryEvent>()
            .configure_sets(
                Update,
                (InventorySet::Input, InventorySet::Mutate, InventorySet::View)
                    .chain()
                    .run_if(in_state(AppState::InGame)),
            )
            .add_systems(OnEnter(AppState::InGame), reset_inventory)
            .add_systems(
                Update,
                (
                    (add_item, remove_item, use_item).chain(),
                    print_inventory,
                )
                    .chain()
                    .in_set(InventorySet::Mutate),
            );
    }
}
