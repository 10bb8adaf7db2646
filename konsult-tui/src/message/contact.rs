//! 联系表单消息

use konsult_core::contact::SubmissionOutcome;

/// 联系表单消息
#[derive(Debug)]
pub enum ContactMessage {
    /// 下一个控件
    NextField,
    /// 上一个控件
    PrevField,
    /// 输入字符
    Input(char),
    /// 删除字符
    Backspace,
    /// 在当前控件上按 Enter
    Activate,
    /// 勾选 CAPTCHA
    ToggleCaptcha,
    /// 提交表单
    Submit,
    /// 后台提交完成
    Finished(SubmissionOutcome),
}
