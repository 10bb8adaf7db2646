//! 静态页面消息
//!
//! Home / Services / About 页面上的滚动与行动按钮

/// 静态页面消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    /// 向上滚动
    ScrollUp,
    /// 向下滚动
    ScrollDown,
    /// 上一个行动按钮
    PreviousAction,
    /// 下一个行动按钮
    NextAction,
    /// 按下选中的行动按钮
    Activate,
}
