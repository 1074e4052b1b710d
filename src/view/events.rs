use bevy::prelude::*;

/// 打开 / 关闭背包界面
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ToggleInventoryView;
