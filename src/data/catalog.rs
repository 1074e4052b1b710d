use bevy::prelude::*;
use thiserror::Error;
use uuid::Uuid;

use super::schema::{ItemList, ItemTemplate};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("item #{0} has an empty name")]
    EmptyName(usize),
    #[error("duplicate item name `{0}`")]
    DuplicateName(String),
}

/// 加载完成后的物品表（只读）
#[derive(Resource, Debug, Clone, Default)]
pub struct ItemCatalog {
    items: Vec<ItemTemplate>,
}

impl ItemCatalog {
    /// 校验名称非空且唯一
    pub fn from_templates(items: Vec<ItemTemplate>) -> Result<Self, CatalogError> {
        for (idx, item) in items.iter().enumerate() {
            if item.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(idx));
            }
            if items[..idx].iter().any(|other| other.name == item.name) {
                return Err(CatalogError::DuplicateName(item.name.clone()));
            }
        }
        Ok(Self { items })
    }

    pub fn from_list(list: &ItemList) -> Result<Self, CatalogError> {
        Self::from_templates(list.items.clone())
    }

    pub fn get(&self, name: &str) -> Option<&ItemTemplate> {
        self.items.iter().find(|item| item.name == name)
    }

    /// 按 名称 / 显示名 / uuid 查找，忽略大小写
    pub fn find(&self, token: &str) -> Option<&ItemTemplate> {
        let token = token.to_lowercase();
        self.items.iter().find(|item| {
            item.name.eq_ignore_ascii_case(&token)
                || item.display_name.to_lowercase() == token
                || uuid_from_name(&item.name).to_string() == token
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemTemplate> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// 用固定 namespace + 名称生成版本 5 UUID，保证可重复得到同一值
pub fn uuid_from_name(name: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes())
}
