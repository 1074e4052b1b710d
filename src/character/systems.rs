use super::{components::*, events::*};
use crate::core::{config::GameConfig, events::LogEvent};
use bevy::prelude::*;

/// 会话开始：重新生成玩家，属性取自配置
pub fn spawn_player(
    mut commands: Commands,
    config: Res<GameConfig>,
    existing: Query<Entity, With<Player>>,
) {
    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let stats = Stats::new(config.player.health, config.player.experience);
    info!("生成玩家 {} {}", stats.health_label(), stats.experience_label());
    commands.spawn((Player, stats));
}

/// 左上角的属性文字
pub fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            Name::new("Hud"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(8.0),
                left: Val::Px(8.0),
                flex_direction: FlexDirection::Column,
                ..default()
            },
        ))
        .with_children(|hud| {
            hud.spawn((HealthText, Text::new("HP: 0")));
            hud.spawn((ExperienceText, Text::new("EXP: 0")));
        });
}

/// 属性变化时同步 HUD 文字
pub fn sync_stat_display(
    player_query: Query<&Stats, (With<Player>, Changed<Stats>)>,
    mut health_text: Query<&mut Text, (With<HealthText>, Without<ExperienceText>)>,
    mut exp_text: Query<&mut Text, (With<ExperienceText>, Without<HealthText>)>,
) {
    let Ok(stats) = player_query.single() else {
        return;
    };

    for mut text in &mut health_text {
        text.0 = stats.health_label();
    }
    for mut text in &mut exp_text {
        text.0 = stats.experience_label();
    }
}

/// 显示属性信息
pub fn show_stats(
    mut ev_show_stats: EventReader<ShowStats>,
    mut ev_log: EventWriter<LogEvent>,
    player_query: Query<&Stats, With<Player>>,
) {
    for _ in ev_show_stats.read() {
        match player_query.single() {
            Ok(stats) => {
                ev_log.write(LogEvent(format!(
                    "{}  {}",
                    stats.health_label(),
                    stats.experience_label()
                )));
            }
            Err(_) => {
                ev_log.write(LogEvent::new("未找到玩家属性"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{enter_game, test_app};

    fn text_of<M: Component>(app: &mut App) -> String {
        let mut query = app
            .world_mut()
            .query_filtered::<&Text, With<M>>();
        query.single(app.world()).unwrap().0.clone()
    }

    #[test]
    fn hud_follows_player_stats() {
        let mut app = test_app();
        enter_game(&mut app);
        app.update();

        assert_eq!(text_of::<HealthText>(&mut app), "HP: 50");
        assert_eq!(text_of::<ExperienceText>(&mut app), "EXP: 0");

        let mut query = app.world_mut().query_filtered::<&mut Stats, With<Player>>();
        query
            .single_mut(app.world_mut())
            .unwrap()
            .increase_experience(12);
        app.update();

        assert_eq!(text_of::<ExperienceText>(&mut app), "EXP: 12");
    }

    #[test]
    fn new_session_respawns_a_single_player() {
        let mut app = test_app();
        enter_game(&mut app);
        app.world_mut()
            .resource_mut::<GameConfig>()
            .player
            .health = 5;

        // 重新进入 InGame
        app.world_mut()
            .resource_mut::<NextState<crate::core::states::AppState>>()
            .set(crate::core::states::AppState::Loading);
        app.update();
        enter_game(&mut app);

        let mut query = app.world_mut().query_filtered::<&Stats, With<Player>>();
        let stats: Vec<_> = query.iter(app.world()).cloned().collect();
        assert_eq!(stats, vec![Stats::new(5, 0)]);
    }
}
