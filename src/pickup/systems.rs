use super::{components::*, events::*};
use crate::core::config::GameConfig;
use crate::inventory::events::AddItemEvent;
use bevy::picking::events::{Click, Pointer};
use bevy::prelude::*;

/// 会话开始时按配置摆放拾取物
pub fn spawn_pickups(
    mut commands: Commands,
    config: Res<GameConfig>,
    existing: Query<Entity, With<Pickup>>,
) {
    for entity in &existing {
        commands.entity(entity).despawn();
    }

    for pickup in &config.pickups {
        commands
            .spawn((
                Name::new(format!("Pickup {}", pickup.item)),
                Pickup {
                    item: pickup.item.clone(),
                },
                Sprite::from_color(Color::srgb(0.9, 0.75, 0.2), Vec2::splat(24.0)),
                Transform::from_xyz(pickup.x, pickup.y, 0.0),
            ))
            .observe(on_pickup_clicked);
    }
}

fn on_pickup_clicked(trigger: Trigger<Pointer<Click>>, mut ev: EventWriter<PickupInteracted>) {
    ev.write(PickupInteracted(trigger.target()));
}

/// 拾取：放进背包，然后从场景删除
pub fn collect_pickups(
    mut commands: Commands,
    mut ev_interact: EventReader<PickupInteracted>,
    mut ev_add: EventWriter<AddItemEvent>,
    pickups: Query<&Pickup>,
) {
    let mut collected = Vec::new();
    for PickupInteracted(entity) in ev_interact.read() {
        if collected.contains(entity) {
            continue;
        }
        let Ok(pickup) = pickups.get(*entity) else {
            debug!("拾取物 {entity} 已不存在");
            continue;
        };

        ev_add.write(AddItemEvent::one(pickup.item.clone()));
        commands.entity(*entity).despawn();
        collected.push(*entity);
    }
}
