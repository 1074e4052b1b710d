pub mod catalog;
pub mod loader;
pub mod schema;

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::core::{config::GameConfig, states::AppState};
use catalog::ItemCatalog;
use schema::ItemList;

// --------------------------- 资源 ---------------------------
#[derive(Resource, Default)]
pub struct ItemAssets {
    handle: Option<Handle<ItemList>>,
}

// --------------------------- 插件 ---------------------------
pub struct DataPlugin;
impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app
            // 注册资产类型 & Loader
            .init_asset::<ItemList>()
            .register_asset_loader(loader::RonItemLoader)
            // 注册资源
            .init_resource::<ItemAssets>()
            .init_resource::<ItemCatalog>()
            // Loading 流程
            .add_systems(OnEnter(AppState::Loading), start_loading)
            .add_systems(Update, check_loaded.run_if(in_state(AppState::Loading)));
    }
}

// --------------------------- 系统 ---------------------------
fn start_loading(
    mut item_assets: ResMut<ItemAssets>,
    asset_server: Res<AssetServer>,
    config: Res<GameConfig>,
) {
    info!("加载物品表 {}", config.catalog_path);
    let handle: Handle<ItemList> = asset_server.load(config.catalog_path.clone());
    item_assets.handle = Some(handle);
}

/// 物品表就绪后拷贝成只读的 ItemCatalog，进入游戏
fn check_loaded(
    mut commands: Commands,
    mut next: ResMut<NextState<AppState>>,
    mut app_exit: EventWriter<AppExit>,
    item_assets: Res<ItemAssets>,
    asset_server: Res<AssetServer>,
    lists: Res<Assets<ItemList>>,
) {
    let Some(h) = &item_assets.handle else {
        return;
    };

    if let Some(list) = lists.get(h) {
        match ItemCatalog::from_list(list) {
            Ok(catalog) => {
                if catalog.is_empty() {
                    warn!("物品表为空");
                }
                info!("✔ Items loaded: {}", catalog.len());
                commands.insert_resource(catalog);
                next.set(AppState::InGame);
            }
            Err(err) => {
                error!("物品表无效: {err}");
                app_exit.write(AppExit::error());
            }
        }
    } else if let LoadState::Failed(err) = asset_server.load_state(h.id()) {
        error!("物品表加载失败: {err}");
        app_exit.write(AppExit::error());
    }
}
