//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use konsult_core::{LanguageContext, Route};

use crate::model::{App, ContactFocus, FocusPanel};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, language: &LanguageContext, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app, language);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App, language: &LanguageContext) -> Vec<(&'static str, &'static str)> {
    let h = &language.texts().hints;
    let mut hints = Vec::new();

    if app.is_menu_open() {
        hints.push(("↑↓", h.navigate));
        hints.push(("Enter", h.open));
        hints.push(("Esc", h.back));
        return hints;
    }

    match app.focus {
        FocusPanel::Navigation => {
            if app.compact {
                hints.push(("Alt+m", h.menu));
            } else {
                hints.push(("←→", h.navigate));
                hints.push(("Enter", h.open));
            }
            hints.push(("Tab", h.switch_panel));
        }
        FocusPanel::Content => match app.navigation.page() {
            Route::Contact => {
                hints.push(("Tab", h.next_field));
                if app
                    .contact
                    .as_ref()
                    .is_some_and(|page| page.focus == ContactFocus::Captcha)
                {
                    hints.push(("Space", h.captcha));
                }
                hints.push(("Alt+s", h.submit));
                hints.push(("Esc", h.back));
            }
            Route::Home | Route::Services | Route::About => {
                hints.push(("↑↓", h.scroll));
                hints.push(("Enter", h.open));
                hints.push(("Tab", h.switch_panel));
            }
        },
    }

    hints.push(("Alt+l", h.language));
    hints.push(("?", h.help));
    hints.push(("Alt+q", h.quit));
    hints
}
