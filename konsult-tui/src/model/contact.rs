//! 联系页面状态

use konsult_core::contact::{ContactFlow, FieldIssue, FormField, TestCaptcha};

/// 联系表单中可获得焦点的控件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFocus {
    Field(FormField),
    Captcha,
    Submit,
}

/// Tab 顺序
const RING: [ContactFocus; 6] = [
    ContactFocus::Field(FormField::Name),
    ContactFocus::Field(FormField::Email),
    ContactFocus::Field(FormField::Company),
    ContactFocus::Field(FormField::Message),
    ContactFocus::Captcha,
    ContactFocus::Submit,
];

impl ContactFocus {
    fn index(self) -> usize {
        RING.iter().position(|f| *f == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        RING[(self.index() + 1) % RING.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        RING[(self.index() + RING.len() - 1) % RING.len()]
    }
}

impl Default for ContactFocus {
    fn default() -> Self {
        ContactFocus::Field(FormField::Name)
    }
}

/// 挂载中的联系页面
///
/// 进入 Contact 页面时创建，离开时整个丢弃。
#[derive(Debug)]
pub struct ContactPage {
    pub flow: ContactFlow<TestCaptcha>,
    pub focus: ContactFocus,
    /// 浏览器原生校验的提示（字段 + 问题）
    pub notice: Option<(FormField, FieldIssue)>,
}

impl ContactPage {
    pub fn new(mount_id: u64, captcha: TestCaptcha) -> Self {
        Self {
            flow: ContactFlow::new(mount_id, captcha),
            focus: ContactFocus::default(),
            notice: None,
        }
    }

    /// 当前获得焦点的输入框
    pub fn focused_field(&self) -> Option<FormField> {
        match self.focus {
            ContactFocus::Field(field) => Some(field),
            ContactFocus::Captcha | ContactFocus::Submit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_ring_wraps() {
        let last = ContactFocus::Submit;
        assert_eq!(last.next(), ContactFocus::Field(FormField::Name));
        assert_eq!(ContactFocus::default().prev(), ContactFocus::Submit);
        assert_eq!(
            ContactFocus::Field(FormField::Message).next(),
            ContactFocus::Captcha
        );
    }
}
