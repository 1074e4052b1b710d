use bevy::prelude::*;

use super::components::RemoveOutcome;

/// 往背包里放物品（按物品表名称）
#[derive(Event, Debug, Clone)]
pub struct AddItemEvent {
    pub name: String,
    pub count: u32,
}

impl AddItemEvent {
    pub fn one(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count: 1,
        }
    }
}

/// 从背包里取出一件物品
#[derive(Event, Debug, Clone)]
pub struct RemoveItemEvent {
    pub name: String,
}

/// 使用一件物品：先生效，再取出
#[derive(Event, Debug, Clone)]
pub struct UseItemEvent {
    pub name: String,
}

/// 每次取出的结果
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ItemRemoved {
    pub name: String,
    pub outcome: RemoveOutcome,
}

/// 请求刷新背包界面
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct RefreshInventoryView;

#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ListInventoryEvent {
    /// 以 JSON 打印
    pub json: bool,
}
