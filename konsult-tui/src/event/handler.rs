//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContactMessage, ContentMessage, NavigationMessage};
use crate::model::{App, ContactFocus};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Resize(width, _) => AppMessage::Resize(width),
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 帮助弹窗只响应关闭按键
    if app.show_help {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('?') => AppMessage::CloseHelp,
            _ => AppMessage::Noop,
        };
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::MENU.matches(&key) {
        return AppMessage::ToggleMenu;
    }
    if DefaultKeymap::LANGUAGE.matches(&key) {
        return AppMessage::CycleLanguage;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    // 紧凑菜单展开时，优先处理菜单
    if app.is_menu_open() {
        return handle_menu_keys(key);
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    // 在表单中输入时，字母键都是输入
    if app.is_typing() {
        return handle_contact_keys(key, app);
    }

    if key.modifiers.is_empty() && key.code == KeyCode::Char('?') {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::SWITCH_PANEL.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    if key.modifiers.is_empty() && key.code == KeyCode::Char('q') {
        return AppMessage::Quit;
    }

    if app.focus.is_navigation() {
        handle_navigation_keys(key, app)
    } else {
        handle_content_keys(key)
    }
}

/// 处理导航栏的按键
fn handle_navigation_keys(key: KeyEvent, app: &App) -> AppMessage {
    // 紧凑模式下链接藏在菜单里
    if app.compact {
        return match key.code {
            KeyCode::Enter | KeyCode::Down => AppMessage::ToggleMenu,
            _ => AppMessage::Noop,
        };
    }

    match key.code {
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h' | 'k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l' | 'j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理紧凑菜单的按键
fn handle_menu_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        KeyCode::Esc => AppMessage::ToggleMenu,
        _ => AppMessage::Noop,
    }
}

/// 处理静态页面的按键
fn handle_content_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::ScrollDown),
        KeyCode::Left | KeyCode::Char('h') => {
            AppMessage::Content(ContentMessage::PreviousAction)
        }
        KeyCode::Right | KeyCode::Char('l') => AppMessage::Content(ContentMessage::NextAction),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Activate),
        _ => AppMessage::Noop,
    }
}

/// 处理联系表单的按键
fn handle_contact_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Contact(ContactMessage::Submit);
    }

    let on_field = app
        .contact
        .as_ref()
        .is_some_and(|page| matches!(page.focus, ContactFocus::Field(_)));

    match key.code {
        // Tab / ↓: 下一个控件
        KeyCode::Tab | KeyCode::Down => AppMessage::Contact(ContactMessage::NextField),

        // Shift+Tab / ↑: 上一个控件
        KeyCode::BackTab | KeyCode::Up => AppMessage::Contact(ContactMessage::PrevField),

        KeyCode::Enter => AppMessage::Contact(ContactMessage::Activate),

        KeyCode::Backspace => AppMessage::Contact(ContactMessage::Backspace),

        // 空格：在复选框和按钮上相当于点击
        KeyCode::Char(' ') if !on_field => AppMessage::Contact(ContactMessage::Activate),

        // 字符输入（允许 Shift 输入大写）
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            if on_field {
                AppMessage::Contact(ContactMessage::Input(ch))
            } else {
                AppMessage::Noop
            }
        }

        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use konsult_core::Route;

    use super::*;
    use crate::model::FocusPanel;
    use crate::test_utils::{test_app, visit};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[tokio::test]
    async fn letters_type_into_form_instead_of_quitting() {
        let (mut app, _rx) = test_app();
        visit(&mut app, Route::Contact);
        app.focus = FocusPanel::Content;

        let msg = handle_event(press(KeyCode::Char('q'), KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Contact(ContactMessage::Input('q'))));

        let msg = handle_event(press(KeyCode::Char('A'), KeyModifiers::SHIFT), &app);
        assert!(matches!(msg, AppMessage::Contact(ContactMessage::Input('A'))));
    }

    #[tokio::test]
    async fn q_quits_from_navigation() {
        let (app, _rx) = test_app();
        let msg = handle_event(press(KeyCode::Char('q'), KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Quit));
    }

    #[tokio::test]
    async fn alt_m_toggles_menu() {
        let (app, _rx) = test_app();
        let msg = handle_event(press(KeyCode::Char('m'), KeyModifiers::ALT), &app);
        assert!(matches!(msg, AppMessage::ToggleMenu));
    }

    #[tokio::test]
    async fn help_overlay_swallows_keys() {
        let (mut app, _rx) = test_app();
        app.show_help = true;

        let msg = handle_event(press(KeyCode::Char('q'), KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Noop));
        let msg = handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::CloseHelp));
    }

    #[tokio::test]
    async fn resize_reports_width() {
        let (app, _rx) = test_app();
        let msg = handle_event(Event::Resize(60, 20), &app);
        assert!(matches!(msg, AppMessage::Resize(60)));
    }
}
