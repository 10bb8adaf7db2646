//! 顶部导航栏组件
//!
//! 宽屏：品牌 + 四个链接 + SV/EN 按钮（靠右）
//! 紧凑：品牌 + 菜单按钮，链接和语言按钮在展开的菜单里

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use konsult_core::routes::nav_items;
use konsult_core::{Language, LanguageContext};

use crate::model::{App, NavTarget};
use crate::view::theme::{colors, Styles};

/// 渲染导航栏
pub fn render(app: &App, language: &LanguageContext, frame: &mut Frame, area: Rect) {
    let texts = language.texts();
    let focused = app.focus.is_navigation();

    let block = Block::default()
        .title(format!(" {} ", texts.site.brand))
        .title_style(Styles::heading())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = if app.compact {
        menu_button(app, language, focused)
    } else {
        link_row(app, language, focused, usize::from(inner.width))
    };

    frame.render_widget(Paragraph::new(line), inner);
}

/// 宽屏链接行
fn link_row(app: &App, language: &LanguageContext, focused: bool, width: usize) -> Line<'static> {
    let mut links = Vec::new();
    let mut used = 0;

    for item in nav_items(language) {
        let text = format!(" {} ", item.label);
        used += text.width() + 1;
        let selected = focused && cursor_on(app, NavTarget::Link(item.route));
        links.push(Span::styled(
            text,
            link_style(item.is_active(app.navigation.current_path()), selected),
        ));
        links.push(Span::raw(" "));
    }

    let buttons = language_buttons(app, language, focused);
    let buttons_width: usize = buttons.iter().map(|span| span.content.width()).sum();
    let padding = width.saturating_sub(used + buttons_width);

    links.push(Span::raw(" ".repeat(padding)));
    links.extend(buttons);
    Line::from(links)
}

/// 紧凑模式的菜单按钮
fn menu_button(app: &App, language: &LanguageContext, focused: bool) -> Line<'static> {
    let icon = if app.navigation.is_menu_open() { "✕" } else { "☰" };
    let style = if focused {
        Styles::selected()
    } else {
        Style::default().fg(colors().fg)
    };
    Line::from(Span::styled(
        format!(" {icon} {} ", language.texts().nav.menu),
        style,
    ))
}

/// 渲染展开的紧凑菜单（覆盖在页面区域上方）
pub fn render_menu(app: &App, language: &LanguageContext, frame: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = nav_items(language)
        .into_iter()
        .map(|item| {
            let selected = cursor_on(app, NavTarget::Link(item.route));
            let active = item.is_active(app.navigation.current_path());
            let prefix = if selected { "▶ " } else { "  " };
            Line::from(Span::styled(
                format!("{prefix}{}", item.label),
                link_style(active, selected),
            ))
        })
        .collect();

    let mut buttons = vec![Span::raw("  ")];
    buttons.extend(language_buttons(app, language, true));
    lines.push(Line::from(buttons));

    // 链接 + 语言行 + 上下边框
    let height = u16::try_from(lines.len() + 2)
        .unwrap_or(u16::MAX)
        .min(area.height);
    let menu_area = Rect::new(area.x, area.y, area.width, height);
    frame.render_widget(Clear, menu_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(true));
    frame.render_widget(Paragraph::new(lines).block(block), menu_area);
}

/// SV / EN 按钮
fn language_buttons(app: &App, language: &LanguageContext, focused: bool) -> Vec<Span<'static>> {
    let c = colors();
    let current = language.language();

    let mut spans = Vec::new();
    for &lang in Language::all() {
        let selected = focused && cursor_on(app, NavTarget::Language(lang));
        let mut style = if lang == current {
            Style::default().bg(c.highlight).fg(c.selected_fg)
        } else {
            Style::default().fg(c.muted)
        };
        if selected {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        spans.push(Span::styled(format!(" {} ", lang.label()), style));
        spans.push(Span::raw(" "));
    }
    spans
}

fn cursor_on(app: &App, target: NavTarget) -> bool {
    app.nav_cursor.current() == Some(target)
}

/// 光标所在的链接加背景色
fn link_style(active: bool, selected: bool) -> Style {
    let style = Styles::link(active);
    if selected {
        style.bg(colors().selected_bg)
    } else {
        style
    }
}
