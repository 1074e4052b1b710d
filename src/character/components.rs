use bevy::prelude::*;

use crate::data::schema::EffectType;

/// 玩家属性组件：两个互相独立的计数器，只增不减
///
/// 计数器比物品数值宽一档，溢出时停在 u64::MAX。
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub health: u64,
    pub experience: u64,
}

impl Stats {
    pub fn new(health: u64, experience: u64) -> Self {
        Self { health, experience }
    }

    /// 恢复生命值（不设上限）
    pub fn increase_health(&mut self, delta: u32) {
        self.health = self.health.saturating_add(u64::from(delta));
    }

    /// 获得经验
    pub fn increase_experience(&mut self, delta: u32) {
        self.experience = self.experience.saturating_add(u64::from(delta));
    }

    /// 根据物品效果提升对应属性
    pub fn apply_effect(&mut self, effect: EffectType, magnitude: u32) {
        match effect {
            EffectType::HealthBonus => self.increase_health(magnitude),
            EffectType::ExperienceBonus => self.increase_experience(magnitude),
        }
    }

    pub fn health_label(&self) -> String {
        format!("HP: {}", self.health)
    }

    pub fn experience_label(&self) -> String {
        format!("EXP: {}", self.experience)
    }
}

/// 玩家标记组件
#[derive(Component)]
pub struct Player;

/// HUD 上显示生命值的文字
#[derive(Component)]
pub struct HealthText;

/// HUD 上显示经验的文字
#[derive(Component)]
pub struct ExperienceText;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effects_raise_the_matching_stat() {
        let mut stats = Stats::new(50, 0);
        stats.apply_effect(EffectType::HealthBonus, 10);
        assert_eq!(stats, Stats::new(60, 0));

        stats.apply_effect(EffectType::ExperienceBonus, 25);
        stats.apply_effect(EffectType::ExperienceBonus, 25);
        assert_eq!(stats, Stats::new(60, 50));
    }

    #[test]
    fn huge_magnitudes_do_not_overflow() {
        let mut stats = Stats::new(u64::from(u32::MAX) - 5, 1);
        stats.apply_effect(EffectType::HealthBonus, u32::MAX);
        stats.apply_effect(EffectType::HealthBonus, u32::MAX);
        stats.apply_effect(EffectType::ExperienceBonus, u32::MAX);
        assert_eq!(stats.health, 3 * u64::from(u32::MAX) - 5);
        assert_eq!(stats.experience, u64::from(u32::MAX) + 1);

        let mut stats = Stats::new(u64::MAX - 1, 0);
        stats.increase_health(10);
        assert_eq!(stats.health, u64::MAX);
    }

    #[test]
    fn labels() {
        let stats = Stats::new(60, 7);
        assert_eq!(stats.health_label(), "HP: 60");
        assert_eq!(stats.experience_label(), "EXP: 7");
    }
}
