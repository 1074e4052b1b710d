use bevy::prelude::*;

pub mod config;
pub mod events;
pub mod states;

/// 核心插件：注册全局资源 / 事件 / 状态
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        use states::AppState;

        // 配置通常由 main 在启动前插入；测试里缺省时使用默认值
        app.init_state::<AppState>()
            .add_event::<events::LogEvent>()
            .init_resource::<config::GameConfig>();
    }
}
