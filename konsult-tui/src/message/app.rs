//! 应用主消息枚举

use super::{ContactMessage, ContentMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（导航栏 / 内容）
    ToggleFocus,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 静态页面相关消息
    Content(ContentMessage),

    /// 联系表单相关消息
    Contact(ContactMessage),

    /// 展开 / 收起紧凑菜单
    ToggleMenu,

    /// 切换到下一个语言
    CycleLanguage,

    /// 返回（关闭弹窗、菜单或回到导航栏）
    GoBack,

    /// 显示帮助
    ShowHelp,

    /// 关闭帮助
    CloseHelp,

    /// 终端宽度变化
    Resize(u16),

    /// 主循环心跳（检查 CAPTCHA 过期）
    Tick,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
