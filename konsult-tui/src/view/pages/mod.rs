//! 页面视图
//!
//! 每个路由对应一个页面：
//!
//! ```text
//! /          → home
//! /services  → services
//! /about     → about
//! /contact   → contact
//! ```

pub mod about;
pub mod contact;
pub mod home;
pub mod services;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use konsult_core::i18n::TitledText;
use konsult_core::{LanguageContext, Route};

use crate::model::{actions, App};

use super::theme::{colors, Styles};

/// 页面标题 + 副标题
fn header(title: &'static str, subtitle: &'static str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(title, Styles::heading())),
        Line::from(Span::styled(subtitle, Styles::muted())),
        Line::from(""),
    ]
}

/// 小标题 + 正文
fn section(text: &TitledText) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(text.title, Styles::title())),
        Line::from(Span::styled(text.body, Style::default().fg(colors().fg))),
        Line::from(""),
    ]
}

/// 行动按钮行，内容面板聚焦时高亮选中的按钮
fn action_row(app: &App, language: &LanguageContext, route: Route) -> Line<'static> {
    let c = colors();
    let focused = app.focus.is_content();

    let mut spans = Vec::new();
    for (i, action) in actions(route).iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if focused && i == app.page.action {
            Styles::selected()
        } else {
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(
            format!("[ {} ]", language.translate(action.key)),
            style,
        ));
    }
    Line::from(spans)
}

/// 可滚动的静态页面
fn render_scrolled(app: &App, frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.page.scroll, 0));
    frame.render_widget(paragraph, area);
}
