use bevy::prelude::*;
use serde_derive::Serialize;

use crate::data::schema::ItemTemplate;

/// 玩家背包（挂在 Resource）
///
/// 按插入顺序保存 名称 → (模板, 数量)。存在的键数量总是 ≥ 1，
/// 数量减到 0 时整条删除。
#[derive(Resource, Default, Debug)]
pub struct InventoryStore {
    entries: Vec<StoreEntry>,
}

/// 运行时条目：模板 + 数量
#[derive(Clone, Debug, PartialEq)]
pub struct StoreEntry {
    pub template: ItemTemplate, // 首次放入时拷贝，之后不再替换
    pub quantity: u32,
}

/// `InventoryStore::remove` 的结果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// 背包里没有这件物品
    NotFound,
    /// 最后一件被移除，键已删除
    Removed,
    /// 数量减一后的剩余数量
    Decremented(u32),
}

impl RemoveOutcome {
    /// 剩余数量；NotFound 和 Removed 都是 0
    pub fn remaining(self) -> u32 {
        match self {
            RemoveOutcome::Decremented(n) => n,
            RemoveOutcome::NotFound | RemoveOutcome::Removed => 0,
        }
    }

    /// 背包内容是否发生了变化
    pub fn changed(self) -> bool {
        !matches!(self, RemoveOutcome::NotFound)
    }
}

/// 打印 / 导出用的条目
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SnapshotEntry {
    pub name: String,
    pub display_name: String,
    pub quantity: u32,
}

impl InventoryStore {
    /// 放入一件物品，返回新的数量
    pub fn add(&mut self, item: &ItemTemplate) -> u32 {
        self.add_copies(item, 1)
    }

    /// 一次放入 count 件，数量到 u32::MAX 为止；count 为 0 时不改动
    pub fn add_copies(&mut self, item: &ItemTemplate, count: u32) -> u32 {
        if let Some(entry) = self.entry_mut(&item.name) {
            entry.quantity = entry.quantity.saturating_add(count);
            return entry.quantity;
        }
        if count == 0 {
            return 0;
        }

        self.entries.push(StoreEntry {
            template: item.clone(),
            quantity: count,
        });
        count
    }

    /// 取出一件物品（只用名称做键）
    pub fn remove(&mut self, name: &str) -> RemoveOutcome {
        let Some(idx) = self.entries.iter().position(|e| e.template.name == name) else {
            return RemoveOutcome::NotFound;
        };

        let entry = &mut self.entries[idx];
        if entry.quantity > 1 {
            entry.quantity -= 1;
            RemoveOutcome::Decremented(entry.quantity)
        } else {
            // 保持插入顺序
            self.entries.remove(idx);
            RemoveOutcome::Removed
        }
    }

    pub fn get(&self, name: &str) -> Option<&StoreEntry> {
        self.entries.iter().find(|e| e.template.name == name)
    }

    fn entry_mut(&mut self, name: &str) -> Option<&mut StoreEntry> {
        self.entries.iter_mut().find(|e| e.template.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn quantity(&self, name: &str) -> u32 {
        self.get(name).map_or(0, |e| e.quantity)
    }

    /// 按插入顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = &StoreEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn snapshot(&self) -> Vec<SnapshotEntry> {
        self.entries
            .iter()
            .map(|e| SnapshotEntry {
                name: e.template.name.clone(),
                display_name: e.template.display_name.clone(),
                quantity: e.quantity,
            })
            .collect()
    }
}
