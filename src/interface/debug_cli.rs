//! 文字 CLI：读取 stdin → 解析命令 → 执行并打印

use bevy::app::AppExit;
use bevy::prelude::*;
use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::character::events::ShowStats;
use crate::core::{events::LogEvent, states::AppState};
use crate::data::catalog::{uuid_from_name, ItemCatalog};
use crate::inventory::InventorySet;
use crate::inventory::components::InventoryStore;
use crate::inventory::events::{AddItemEvent, ListInventoryEvent, RemoveItemEvent, UseItemEvent};
use crate::pickup::{components::Pickup, events::PickupInteracted};
use crate::view::events::ToggleInventoryView;

static CLI_BUFFER: Lazy<Arc<Mutex<VecDeque<String>>>> =
    Lazy::new(|| Arc::new(Mutex::new(VecDeque::new())));

/// 插件入口
pub struct DebugCliPlugin;
impl Plugin for DebugCliPlugin {
    fn build(&self, app: &mut App) {
        {
            let buffer = CLI_BUFFER.clone();
            std::thread::spawn(move || {
                use std::io::{self, BufRead};
                let stdin = io::stdin();
                for line in stdin.lock().lines().map_while(Result::ok) {
                    let line = line.trim();
                    if !line.is_empty() {
                        let mut buf = buffer.lock().expect("cli buffer poisoned");
                        buf.push_back(line.to_string());
                    }
                }
            });
        }
        app
            // 事件：原始输入行
            .add_event::<CliLine>()
            // 每帧从 buffer 取出所有命令行写入事件
            .add_systems(Update, read_stdin)
            // 仅在 InGame 处理命令
            .add_systems(
                Update,
                execute_cli_commands
                    .after(read_stdin)
                    .before(InventorySet::Input)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}

/* ---------------------------- 事件与枚举 ---------------------------- */

/// 终端敲的一整行
#[derive(Event)]
struct CliLine(String);

/// 我们支持的命令
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Status,
    Exit,
    Items(Option<String>), // None=全部；Some(token)=按 名称/uuid/显示名 查询
    Give { item: String, count: u32 },
    Remove(String),
    Use(String),
    Inventory { json: bool },
    Toggle,
    Pickups,
    Pickup(String),
    Stats,
    Unsupported(String),
}

/* ---------------------------- 读取 stdin ---------------------------- */

fn read_stdin(mut writer: EventWriter<CliLine>) {
    let mut buffer = CLI_BUFFER.lock().expect("cli buffer poisoned");
    while let Some(line) = buffer.pop_front() {
        writer.write(CliLine(line));
    }
}

/* ---------------------------- 命令执行 ---------------------------- */

#[allow(clippy::too_many_arguments)]
fn execute_cli_commands(
    mut line_reader: EventReader<CliLine>,
    mut app_exit: EventWriter<AppExit>,
    mut log: EventWriter<LogEvent>,
    state: Res<State<AppState>>,
    catalog: Res<ItemCatalog>,
    store: Res<InventoryStore>,
    mut ev_add: EventWriter<AddItemEvent>,
    mut ev_remove: EventWriter<RemoveItemEvent>,
    mut ev_use: EventWriter<UseItemEvent>,
    mut ev_list: EventWriter<ListInventoryEvent>,
    mut ev_toggle: EventWriter<ToggleInventoryView>,
    mut ev_stats: EventWriter<ShowStats>,
    mut ev_pickup: EventWriter<PickupInteracted>,
    pickups: Query<(Entity, &Pickup)>,
) {
    for CliLine(input) in line_reader.read() {
        match parse_command(input) {
            Command::Help => {
                log.write(LogEvent(
                    "命令列表:
  help                   查看帮助
  status                 查看当前状态
  exit / quit            退出程序
  items                  列出所有物品
  items <token>          用 名称 / uuid / 显示名 查询单个物品
  give <item> [count]    放进背包
  remove <item>          从背包取出一件
  use <item>             使用一件物品
  inventory [json]       查看背包
  toggle                 打开 / 关闭背包界面
  pickups                列出场景中的拾取物
  pickup <item>          拾取场景中的物品
  stats                  查看玩家属性
  "
                    .into(),
                ));
            }

            Command::Status => {
                log.write(LogEvent(format!(
                    "State: {:?}, Items Loaded: {}, Inventory Keys: {}",
                    state.get(),
                    catalog.len(),
                    store.len()
                )));
            }

            Command::Exit => {
                log.write(LogEvent::new("Bye~"));
                app_exit.write(AppExit::Success);
            }

            Command::Items(None) => {
                for item in catalog.iter() {
                    log.write(LogEvent(format!(
                        "{} | {} | {}",
                        uuid_from_name(&item.name),
                        item.name,
                        item.display_name
                    )));
                }
            }

            Command::Items(Some(token)) => match catalog.find(&token) {
                Some(item) => {
                    log.write(LogEvent(format!(
                        "==================================================
UUID      : {}
Name      : {}
Display   : {}
Effect    : {:?} +{}
Icon      : {}
In bag    : {}
==================================================",
                        uuid_from_name(&item.name),
                        item.name,
                        item.display_name,
                        item.effect,
                        item.magnitude,
                        item.icon,
                        store.quantity(&item.name)
                    )));
                }
                None => {
                    log.write(LogEvent::new("未找到匹配物品"));
                }
            },

            Command::Give { item, count } => match catalog.find(&item) {
                Some(template) => {
                    ev_add.write(AddItemEvent {
                        name: template.name.clone(),
                        count,
                    });
                }
                None => {
                    log.write(LogEvent(format!("不存在物品 {item}")));
                }
            },

            Command::Remove(item) => {
                let name = resolve_name(&catalog, &item);
                if store.contains(&name) {
                    ev_remove.write(RemoveItemEvent { name });
                } else {
                    log.write(LogEvent(format!("背包里没有 {item}")));
                }
            }

            Command::Use(item) => {
                ev_use.write(UseItemEvent {
                    name: resolve_name(&catalog, &item),
                });
            }

            Command::Inventory { json } => {
                ev_list.write(ListInventoryEvent { json });
            }

            Command::Toggle => {
                ev_toggle.write(ToggleInventoryView);
            }

            Command::Pickups => {
                if pickups.is_empty() {
                    log.write(LogEvent::new("  (no pickups)"));
                }
                for (entity, pickup) in &pickups {
                    log.write(LogEvent(format!("{entity} | {}", pickup.item)));
                }
            }

            Command::Pickup(item) => {
                let name = resolve_name(&catalog, &item);
                match pickups.iter().find(|(_, p)| p.item == name) {
                    Some((entity, _)) => {
                        ev_pickup.write(PickupInteracted(entity));
                    }
                    None => {
                        log.write(LogEvent(format!("场景中没有 {item}")));
                    }
                }
            }

            Command::Stats => {
                ev_stats.write(ShowStats);
            }

            Command::Unsupported(cmd) => {
                log.write(LogEvent(format!("不支持的命令: {cmd}")));
            }
        }
    }
}

/* ---------------------------- 工具函数 ---------------------------- */

/// 物品表里能找到就用规范名称，否则原样交给背包处理
fn resolve_name(catalog: &ItemCatalog, token: &str) -> String {
    catalog
        .find(token)
        .map_or_else(|| token.to_string(), |item| item.name.clone())
}

fn parse_command(input: &str) -> Command {
    let mut parts = input.split_whitespace();
    let cmd = parts.next().unwrap_or("").to_lowercase();
    let arg = |s: Option<&str>| s.unwrap_or("").to_string();
    match cmd.as_str() {
        "help" | "h" | "?" => Command::Help,
        "status" | "s" => Command::Status,
        "exit" | "quit" | "q" => Command::Exit,
        "items" | "item" | "i" => Command::Items(parts.next().map(|s| s.to_string())),
        "give" | "add" => {
            let item = arg(parts.next());
            let count = parts.next().unwrap_or("1").parse().unwrap_or(1);
            Command::Give { item, count }
        }
        "remove" | "rm" => Command::Remove(arg(parts.next())),
        "use" | "u" => Command::Use(arg(parts.next())),
        "inventory" | "inv" => Command::Inventory {
            json: parts.next().is_some_and(|s| s.eq_ignore_ascii_case("json")),
        },
        "toggle" | "t" => Command::Toggle,
        "pickups" => Command::Pickups,
        "pickup" | "p" => Command::Pickup(arg(parts.next())),
        "stats" => Command::Stats,
        other => Command::Unsupported(other.into()),
    }
}
