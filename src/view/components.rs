use bevy::prelude::*;

/// 背包界面的状态（Resource）
#[derive(Resource, Debug, Default)]
pub struct InventoryView {
    pub visibility: PanelVisibility,
    pub phase: RefreshPhase,
    /// 当前显示的行及其绑定的物品名
    pub(super) rows: Vec<(Entity, String)>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PanelVisibility {
    #[default]
    Hidden,
    Visible,
}

/// 刷新分两步：先清空旧行，下一帧再按背包重建
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPhase {
    #[default]
    Idle,
    PendingRebuild,
}

/// 背包面板根节点
#[derive(Component)]
pub struct InventoryPanel;

/// 行的父节点
#[derive(Component)]
pub struct InventoryContent;

/// 一行：绑定到背包中的一个键
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct InventoryRow {
    pub item: String,
    pub display_name: String,
    pub quantity_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Use,
    Remove,
}

/// 行上的按钮
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct RowButton {
    pub item: String,
    pub action: RowAction,
}

/// 数量为 1 时不显示，否则显示 "×N"
pub fn quantity_label(quantity: u32) -> String {
    if quantity > 1 {
        format!("×{quantity}")
    } else {
        String::new()
    }
}
