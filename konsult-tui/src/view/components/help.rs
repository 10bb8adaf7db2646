//! 帮助弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use konsult_core::LanguageContext;

use crate::view::theme::Styles;

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 渲染帮助弹窗
pub fn render(language: &LanguageContext, frame: &mut Frame) {
    let h = &language.texts().hints;

    let bindings: [(&str, &str); 11] = [
        ("Tab", h.switch_panel),
        ("←→ ↑↓", h.navigate),
        ("Enter", h.open),
        ("Tab/S-Tab", h.next_field),
        ("Space", h.captcha),
        ("Alt+s", h.submit),
        ("Alt+l", h.language),
        ("Alt+m", h.menu),
        ("Esc", h.back),
        ("? / Alt+h", h.help),
        ("q / Alt+q", h.quit),
    ];

    let height = u16::try_from(bindings.len()).unwrap_or(u16::MAX) + 4;
    let area = centered_rect(46, height, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from("")];
    lines.extend(bindings.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), Styles::hint_key()),
            Span::styled(*desc, Style::default().fg(Color::White)),
        ])
    }));

    let block = Block::default()
        .title(format!(" {} ", h.help_title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
