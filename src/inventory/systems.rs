use super::{components::*, events::*};
use crate::character::components::{Player, Stats};
use crate::core::events::LogEvent;
use crate::data::catalog::ItemCatalog;
use bevy::prelude::*;

/// 会话开始时清空背包
pub fn reset_inventory(
    mut store: ResMut<InventoryStore>,
    mut ev_refresh: EventWriter<RefreshInventoryView>,
) {
    store.clear();
    ev_refresh.write(RefreshInventoryView);
}

/// 处理"add"——按名称从物品表取模板放进背包，一个事件只请求一次刷新
pub fn add_item(
    mut ev_add: EventReader<AddItemEvent>,
    mut store: ResMut<InventoryStore>,
    mut ev_refresh: EventWriter<RefreshInventoryView>,
    catalog: Res<ItemCatalog>,
) {
    for ev in ev_add.read() {
        let Some(template) = catalog.get(&ev.name) else {
            warn!("不存在物品 {}", ev.name);
            continue;
        };

        if ev.count == 0 {
            warn!("放入 {} 的数量为 0，忽略", ev.name);
            continue;
        }

        let quantity = store.add_copies(template, ev.count);
        info!("获得 {} ×{}，共 {}", template.display_name, ev.count, quantity);
        ev_refresh.write(RefreshInventoryView);
    }
}

/// 处理"remove"
pub fn remove_item(
    mut ev_remove: EventReader<RemoveItemEvent>,
    mut store: ResMut<InventoryStore>,
    mut ev_removed: EventWriter<ItemRemoved>,
    mut ev_refresh: EventWriter<RefreshInventoryView>,
) {
    for ev in ev_remove.read() {
        take_one(&mut store, &ev.name, &mut ev_removed, &mut ev_refresh);
    }
}

/// 使用物品：先把效果加到玩家身上，再从背包取出一件
pub fn use_item(
    mut ev_use: EventReader<UseItemEvent>,
    mut store: ResMut<InventoryStore>,
    mut player_query: Query<&mut Stats, With<Player>>,
    mut ev_removed: EventWriter<ItemRemoved>,
    mut ev_refresh: EventWriter<RefreshInventoryView>,
    mut log_event: EventWriter<LogEvent>,
) {
    for ev in ev_use.read() {
        let Some(entry) = store.get(&ev.name) else {
            warn!("背包里没有 {}", ev.name);
            continue;
        };
        let Ok(mut stats) = player_query.single_mut() else {
            warn!("没有玩家，无法使用 {}", ev.name);
            continue;
        };

        let item = &entry.template;
        stats.apply_effect(item.effect, item.magnitude);
        log_event.write(LogEvent(format!(
            "使用 {}，{}  {}",
            item.display_name,
            stats.health_label(),
            stats.experience_label()
        )));

        // 消耗物品
        let outcome = take_one(&mut store, &ev.name, &mut ev_removed, &mut ev_refresh);
        log_event.write(LogEvent(format!("{} 剩余 {}", ev.name, outcome.remaining())));
    }
}

fn take_one(
    store: &mut InventoryStore,
    name: &str,
    ev_removed: &mut EventWriter<ItemRemoved>,
    ev_refresh: &mut EventWriter<RefreshInventoryView>,
) -> RemoveOutcome {
    let outcome = store.remove(name);
    match outcome {
        RemoveOutcome::NotFound => debug!("{name} 不在背包中"),
        RemoveOutcome::Removed => info!("从背包删除 {name}"),
        RemoveOutcome::Decremented(n) => info!("{name} 剩余 {n}"),
    }
    if outcome.changed() {
        ev_refresh.write(RefreshInventoryView);
    }
    ev_removed.write(ItemRemoved {
        name: name.to_string(),
        outcome,
    });
    outcome
}

/// 打印背包内容
pub fn print_inventory(
    mut ev_list: EventReader<ListInventoryEvent>,
    store: Res<InventoryStore>,
    mut log_event: EventWriter<LogEvent>,
) {
    for ev in ev_list.read() {
        if ev.json {
            match serde_json::to_string_pretty(&store.snapshot()) {
                Ok(json) => {
                    log_event.write(LogEvent(json));
                }
                Err(err) => warn!("无法序列化背包: {err}"),
            }
            continue;
        }

        if store.is_empty() {
            log_event.write(LogEvent::new("  (empty)"));
            continue;
        }
        for (idx, entry) in store.iter().enumerate() {
            log_event.write(LogEvent(format!(
                "[{idx}] {} ×{} (id={})",
                entry.template.display_name, entry.quantity, entry.template.name
            )));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{enter_game, log_lines, player_stats, test_app};
    use pretty_assertions::assert_eq;

    fn send<E: Event>(app: &mut App, ev: E) {
        app.world_mut().send_event(ev);
    }

    fn removed_events(app: &App) -> Vec<ItemRemoved> {
        let events = app.world().resource::<Events<ItemRemoved>>();
        events.iter_current_update_events().cloned().collect()
    }

    #[test]
    fn add_and_remove_through_events() {
        let mut app = test_app();
        enter_game(&mut app);

        for _ in 0..3 {
            send(&mut app, AddItemEvent::one("Potion"));
        }
        app.update();
        assert_eq!(app.world().resource::<InventoryStore>().quantity("Potion"), 3);

        send(&mut app, RemoveItemEvent { name: "Potion".into() });
        send(&mut app, RemoveItemEvent { name: "BookOfXP".into() });
        app.update();

        assert_eq!(
            removed_events(&app),
            vec![
                ItemRemoved {
                    name: "Potion".into(),
                    outcome: RemoveOutcome::Decremented(2)
                },
                ItemRemoved {
                    name: "BookOfXP".into(),
                    outcome: RemoveOutcome::NotFound
                },
            ]
        );
    }

    #[test]
    fn bulk_add_is_one_store_update() {
        let mut app = test_app();
        enter_game(&mut app);

        send(
            &mut app,
            AddItemEvent {
                name: "Potion".into(),
                count: u32::MAX,
            },
        );
        send(
            &mut app,
            AddItemEvent {
                name: "BookOfXP".into(),
                count: 0,
            },
        );
        app.update();

        let store = app.world().resource::<InventoryStore>();
        assert_eq!(store.quantity("Potion"), u32::MAX);
        assert!(!store.contains("BookOfXP"));
        assert_eq!(
            app.world()
                .resource::<Events<RefreshInventoryView>>()
                .iter_current_update_events()
                .count(),
            1
        );
    }

    #[test]
    fn unknown_item_is_skipped() {
        let mut app = test_app();
        enter_game(&mut app);

        send(&mut app, AddItemEvent::one("Excalibur"));
        app.update();
        assert!(app.world().resource::<InventoryStore>().is_empty());
    }

    #[test]
    fn using_ring_of_health_heals_and_consumes() {
        let mut app = test_app();
        enter_game(&mut app);
        assert_eq!(player_stats(&mut app), Stats::new(50, 0));

        send(&mut app, AddItemEvent::one("RingOfHealth"));
        send(&mut app, AddItemEvent::one("RingOfHealth"));
        app.update();

        send(&mut app, UseItemEvent { name: "RingOfHealth".into() });
        app.update();
        assert_eq!(player_stats(&mut app), Stats::new(60, 0));
        assert_eq!(
            app.world().resource::<InventoryStore>().quantity("RingOfHealth"),
            1
        );

        send(&mut app, UseItemEvent { name: "RingOfHealth".into() });
        app.update();
        assert_eq!(player_stats(&mut app), Stats::new(70, 0));
        assert!(!app.world().resource::<InventoryStore>().contains("RingOfHealth"));
        assert_eq!(
            removed_events(&app),
            vec![ItemRemoved {
                name: "RingOfHealth".into(),
                outcome: RemoveOutcome::Removed
            }]
        );
    }

    #[test]
    fn using_an_absent_item_changes_nothing() {
        let mut app = test_app();
        enter_game(&mut app);

        send(&mut app, UseItemEvent { name: "BookOfXP".into() });
        app.update();
        assert_eq!(player_stats(&mut app), Stats::new(50, 0));
        assert!(removed_events(&app).is_empty());
    }

    #[test]
    fn book_of_xp_raises_experience() {
        let mut app = test_app();
        enter_game(&mut app);

        send(&mut app, AddItemEvent::one("BookOfXP"));
        app.update();
        send(&mut app, UseItemEvent { name: "BookOfXP".into() });
        app.update();

        assert_eq!(player_stats(&mut app), Stats::new(50, 25));
        assert!(app.world().resource::<InventoryStore>().is_empty());
    }

    #[test]
    fn new_session_starts_with_an_empty_inventory() {
        let mut app = test_app();
        enter_game(&mut app);
        send(&mut app, AddItemEvent::one("Potion"));
        app.update();
        assert_eq!(app.world().resource::<InventoryStore>().len(), 1);

        app.world_mut()
            .resource_mut::<NextState<crate::core::states::AppState>>()
            .set(crate::core::states::AppState::Loading);
        app.update();
        enter_game(&mut app);

        assert!(app.world().resource::<InventoryStore>().is_empty());
    }

    #[test]
    fn list_inventory_prints_rows_and_json() {
        let mut app = test_app();
        enter_game(&mut app);
        send(&mut app, AddItemEvent::one("Potion"));
        send(&mut app, AddItemEvent::one("Potion"));
        app.update();

        send(&mut app, ListInventoryEvent { json: false });
        app.update();
        assert_eq!(log_lines(&app), vec!["[0] Potion ×2 (id=Potion)".to_string()]);

        send(&mut app, ListInventoryEvent { json: true });
        app.update();
        let lines = log_lines(&app);
        let parsed: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([{ "name": "Potion", "display_name": "Potion", "quantity": 2 }])
        );
    }
}
