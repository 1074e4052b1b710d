pub mod components;
pub mod events;
mod systems;

use bevy::prelude::*;
use crate::core::states::AppState;
use crate::inventory::InventorySet;
use events::*;
use systems::*;

/// 场景拾取：交互 → 放进背包 → 删除场景物体
pub struct PickupPlugin;
impl Plugin for PickupPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PickupInteracted>()
            .add_systems(OnEnter(AppState::InGame), spawn_pickups)
            .add_systems(Update, collect_pickups.in_set(InventorySet::Input));
    }
}
