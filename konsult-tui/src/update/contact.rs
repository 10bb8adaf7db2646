//! 联系表单更新逻辑

use std::time::Instant;

use konsult_core::contact::{CaptchaEvents, SubmissionOutcome, SubmissionStatus, SubmitAttempt};

use crate::message::ContactMessage;
use crate::model::{App, ContactFocus};

/// 处理联系表单消息
pub fn update(app: &mut App, msg: ContactMessage) {
    match msg {
        ContactMessage::Finished(outcome) => finish(app, outcome),
        ContactMessage::Submit => submit(app),
        ContactMessage::Activate => activate(app),
        ContactMessage::ToggleCaptcha => check_captcha(app),
        ContactMessage::NextField => {
            if let Some(page) = app.contact.as_mut() {
                page.focus = page.focus.next();
            }
        }
        ContactMessage::PrevField => {
            if let Some(page) = app.contact.as_mut() {
                page.focus = page.focus.prev();
            }
        }
        ContactMessage::Input(ch) => {
            let Some(page) = app.contact.as_mut() else {
                return;
            };
            if let Some(field) = page.focused_field() {
                page.flow.push_char(field, ch);
                if page.notice.is_some_and(|(f, _)| f == field) {
                    page.notice = None;
                }
            }
        }
        ContactMessage::Backspace => {
            let Some(page) = app.contact.as_mut() else {
                return;
            };
            if let Some(field) = page.focused_field() {
                page.flow.pop_char(field);
            }
        }
    }
}

/// 在当前控件上按 Enter
fn activate(app: &mut App) {
    let Some(focus) = app.contact.as_ref().map(|page| page.focus) else {
        return;
    };
    match focus {
        ContactFocus::Field(_) => {
            if let Some(page) = app.contact.as_mut() {
                page.focus = focus.next();
            }
        }
        ContactFocus::Captcha => check_captcha(app),
        ContactFocus::Submit => submit(app),
    }
}

/// 勾选 CAPTCHA 复选框（已勾选时无效）
fn check_captcha(app: &mut App) {
    let Some(page) = app.contact.as_mut() else {
        return;
    };
    let event = page.flow.captcha_mut().solve(Instant::now());
    if let Some(event) = event {
        page.flow.handle_captcha(event);
    }
}

/// 提交表单
///
/// 先做浏览器原生校验（必填、邮箱格式），不通过时只提示、不改变提交状态；
/// 通过后交给 `ContactFlow` 的守卫序列。
fn submit(app: &mut App) {
    let Some(page) = app.contact.as_mut() else {
        return;
    };
    if page.flow.is_sending() {
        return;
    }

    if let Some(field) = page.flow.form().first_invalid_field() {
        page.notice = page
            .flow
            .form()
            .field_issue(field)
            .map(|issue| (field, issue));
        page.focus = ContactFocus::Field(field);
        return;
    }
    page.notice = None;

    match page.flow.begin_submit() {
        SubmitAttempt::Dispatched(pending) => app.submit.dispatch(pending),
        SubmitAttempt::CaptchaRequired => page.focus = ContactFocus::Captcha,
        SubmitAttempt::Suppressed | SubmitAttempt::InFlight => {}
    }
}

/// 应用后台提交结果
fn finish(app: &mut App, outcome: SubmissionOutcome) {
    let Some(page) = app.contact.as_mut() else {
        log::debug!("Submission outcome arrived after the contact form was unmounted");
        return;
    };
    if page.flow.finish(outcome) && page.flow.status() == SubmissionStatus::Success {
        page.focus = ContactFocus::default();
    }
}

/// 心跳：检查 CAPTCHA 是否过期
pub fn tick(app: &mut App) {
    let Some(page) = app.contact.as_mut() else {
        return;
    };
    let event = page.flow.captcha_mut().poll_expiry(Instant::now());
    if let Some(event) = event {
        page.flow.handle_captcha(event);
    }
}
