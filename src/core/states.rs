use bevy::prelude::*;

/// 游戏运行的大状态
///
/// 每次进入 `InGame` 都是一个新的会话：背包清空、玩家重新生成。
#[derive(States, Debug, Clone, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    #[default]
    Startup,
    /// 等待物品表加载完成
    Loading,
    InGame,
}
