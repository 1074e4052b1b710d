use bevy::prelude::*;

/// 玩家与场景中的拾取物交互（点击 / CLI）
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickupInteracted(pub Entity);
