use bevy::prelude::*;

/// 场景中可以点击拾取的物品
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Pickup {
    pub item: String,
}
