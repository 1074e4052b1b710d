use super::{components::*, events::*};
use crate::inventory::components::{InventoryStore, RemoveOutcome};
use crate::inventory::events::{ItemRemoved, RefreshInventoryView, RemoveItemEvent, UseItemEvent};
use bevy::prelude::*;

/// 背包面板（默认隐藏）
pub fn spawn_inventory_panel(mut commands: Commands) {
    commands
        .spawn((
            Name::new("Inventory"),
            InventoryPanel,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(16.0),
                top: Val::Px(16.0),
                padding: UiRect::all(Val::Px(8.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.85)),
            Visibility::Hidden,
        ))
        .with_children(|panel| {
            panel.spawn(Text::new("Inventory"));
            panel.spawn((
                InventoryContent,
                Node {
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(4.0),
                    ..default()
                },
            ));
        });
}

/// 隐藏 → 显示 时先请求刷新；显示 → 隐藏 只改可见性
pub fn toggle_inventory_view(
    mut ev_toggle: EventReader<ToggleInventoryView>,
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut view: ResMut<InventoryView>,
    mut ev_refresh: EventWriter<RefreshInventoryView>,
    mut panel_query: Query<&mut Visibility, With<InventoryPanel>>,
) {
    let key_presses = keys.map_or(0, |k| usize::from(k.just_pressed(KeyCode::KeyI)));
    let toggles = ev_toggle.read().count() + key_presses;
    if toggles == 0 {
        return;
    }

    for _ in 0..toggles {
        view.visibility = match view.visibility {
            PanelVisibility::Hidden => {
                ev_refresh.write(RefreshInventoryView);
                PanelVisibility::Visible
            }
            PanelVisibility::Visible => PanelVisibility::Hidden,
        };
    }

    for mut visibility in &mut panel_query {
        *visibility = match view.visibility {
            PanelVisibility::Visible => Visibility::Visible,
            PanelVisibility::Hidden => Visibility::Hidden,
        };
    }
}

/// 行按钮 → 使用 / 丢弃
pub fn row_button_interactions(
    buttons: Query<(&Interaction, &RowButton), Changed<Interaction>>,
    mut ev_use: EventWriter<UseItemEvent>,
    mut ev_remove: EventWriter<RemoveItemEvent>,
) {
    for (interaction, button) in &buttons {
        if *interaction != Interaction::Pressed {
            continue;
        }
        let name = button.item.clone();
        match button.action {
            RowAction::Use => {
                ev_use.write(UseItemEvent { name });
            }
            RowAction::Remove => {
                ev_remove.write(RemoveItemEvent { name });
            }
        }
    }
}

/// 第二步：上一帧清空过的界面按当前背包重建
pub fn rebuild_rows(
    mut commands: Commands,
    mut view: ResMut<InventoryView>,
    store: Res<InventoryStore>,
    content_query: Query<Entity, With<InventoryContent>>,
    asset_server: Option<Res<AssetServer>>,
) {
    if view.phase != RefreshPhase::PendingRebuild {
        return;
    }
    view.phase = RefreshPhase::Idle;

    let Ok(content) = content_query.single() else {
        warn!("背包面板不存在，跳过刷新");
        return;
    };

    for entry in store.iter() {
        let item = &entry.template;
        let row = InventoryRow {
            item: item.name.clone(),
            display_name: item.display_name.clone(),
            quantity_label: quantity_label(entry.quantity),
        };
        let icon = asset_server
            .as_ref()
            .filter(|_| !item.icon.is_empty())
            .map(|server| ImageNode::new(server.load(item.icon.clone())));

        let entity = commands
            .spawn((
                Node {
                    flex_direction: FlexDirection::Row,
                    align_items: AlignItems::Center,
                    column_gap: Val::Px(8.0),
                    ..default()
                },
                ChildOf(content),
            ))
            .with_children(|parent| {
                if let Some(icon) = icon {
                    parent.spawn((
                        icon,
                        Node {
                            width: Val::Px(32.0),
                            height: Val::Px(32.0),
                            ..default()
                        },
                    ));
                }
                parent.spawn(Text::new(row.display_name.clone()));
                parent.spawn(Text::new(row.quantity_label.clone()));
                parent
                    .spawn((
                        Button,
                        RowButton {
                            item: row.item.clone(),
                            action: RowAction::Use,
                        },
                    ))
                    .with_child(Text::new("Use"));
                parent
                    .spawn((
                        Button,
                        RowButton {
                            item: row.item.clone(),
                            action: RowAction::Remove,
                        },
                    ))
                    .with_child(Text::new("Remove"));
            })
            .insert(row)
            .id();

        view.rows.push((entity, item.name.clone()));
    }
}

/// 第一步：处理删除结果和刷新请求
///
/// 最后一件被取出的物品，其行立即删除；每个刷新请求都会清空全部行，
/// 并在下一帧重建。
pub fn apply_refresh_requests(
    mut commands: Commands,
    mut view: ResMut<InventoryView>,
    mut ev_removed: EventReader<ItemRemoved>,
    mut ev_refresh: EventReader<RefreshInventoryView>,
) {
    for ev in ev_removed.read() {
        if ev.outcome != RemoveOutcome::Removed {
            continue;
        }
        view.rows.retain(|(entity, item)| {
            if *item == ev.name {
                commands.entity(*entity).despawn();
                false
            } else {
                true
            }
        });
    }

    for _ in ev_refresh.read() {
        for (entity, _) in view.rows.drain(..) {
            commands.entity(entity).despawn();
        }
        view.phase = RefreshPhase::PendingRebuild;
    }
}
