use bevy::prelude::*;

/// 面向玩家的输出（CLI 打印），由 main 中的 forward_log_event 统一打印
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct LogEvent(pub String);

impl LogEvent {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}
