use bevy::asset::Asset;
use bevy::reflect::TypePath;
use serde_derive::Deserialize;

/// 使用物品时提升哪一项属性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum EffectType {
    HealthBonus,
    ExperienceBonus,
}

/// 静态物品模板（物品表中的一条）
///
/// 模板本身不带数量：数量只存在于背包条目里。
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemTemplate {
    /// 唯一键
    pub name: String,
    pub display_name: String,
    pub effect: EffectType,
    pub magnitude: u32,
    /// 图标路径，相对 assets/
    #[serde(default)]
    pub icon: String,
}

#[derive(Asset, TypePath, Deserialize, Debug)]
pub struct ItemList {
    pub items: Vec<ItemTemplate>,
}
