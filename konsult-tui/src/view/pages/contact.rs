//! 联系页面
//!
//! ```text
//! ┌ 表单 ──────────────────────┐ ┌ 联系信息 ─────────┐
//! │ Name                        │ │ Email             │
//! │   Ada▎                      │ │   (需先通过验证)  │
//! │ ...                         │ │ Location          │
//! │ [x] I'm not a robot         │ │   Sweden          │
//! │ [ Send message ]            │ └───────────────────┘
//! └─────────────────────────────┘
//! ```
//!
//! 紧凑模式下两个面板上下排列。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use konsult_core::contact::{EmailReveal, FieldIssue, FormField, SubmissionStatus};
use konsult_core::i18n::{ContactFormTexts, ContactTexts};
use konsult_core::LanguageContext;

use crate::model::{App, ContactFocus, ContactPage};
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, language: &LanguageContext, frame: &mut Frame, area: Rect) {
    let Some(page) = app.contact.as_ref() else {
        return;
    };
    let texts = &language.texts().contact;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(texts.title, Styles::heading())),
        Line::from(Span::styled(texts.subtitle, Styles::muted())),
    ]);
    frame.render_widget(header, chunks[0]);

    let body = if app.compact {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(6)])
            .split(chunks[1])
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1])
    };

    render_form(app, page, texts, frame, body[0]);
    render_info(app, page, texts, frame, body[1]);
}

fn render_form(
    app: &App,
    page: &ContactPage,
    texts: &ContactTexts,
    frame: &mut Frame,
    area: Rect,
) {
    let c = colors();
    let focused = app.focus.is_content();
    let form = &texts.form;
    let flow = &page.flow;

    let mut lines: Vec<Line> = Vec::new();

    for &field in FormField::visible() {
        let is_focused = focused && page.focus == ContactFocus::Field(field);
        let (label, placeholder) = field_texts(form, field);
        let value = flow.form().get(field);

        let label_style = if is_focused {
            Style::default().fg(c.highlight)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if field.is_required() { " *" } else { "" };
        lines.push(Line::from(Span::styled(
            format!("{label}{marker}"),
            label_style,
        )));

        if value.is_empty() && !is_focused {
            lines.push(Line::from(Span::styled(
                format!("  {placeholder}"),
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            let cursor = if is_focused { "▎" } else { "" };
            lines.push(Line::from(Span::styled(
                format!("  {value}{cursor}"),
                Style::default().fg(c.fg),
            )));
        }

        if let Some((notice_field, issue)) = page.notice {
            if notice_field == field {
                let text = match issue {
                    FieldIssue::Required => form.required,
                    FieldIssue::InvalidEmail => form.invalid_email,
                };
                lines.push(Line::from(Span::styled(
                    format!("  ⚠ {text}"),
                    Styles::notice(),
                )));
            }
        }
    }

    lines.push(Line::from(""));

    // CAPTCHA
    let checked = flow.is_captcha_verified();
    let mut captcha = vec![Span::styled(
        format!("{} {}", if checked { "[x]" } else { "[ ]" }, texts.captcha.label),
        focus_style(focused && page.focus == ContactFocus::Captcha),
    )];
    if checked {
        captcha.push(Span::styled(
            format!("  ✓ {}", texts.captcha.verified),
            Style::default().fg(c.success),
        ));
    }
    lines.push(Line::from(captcha));
    lines.push(Line::from(""));

    // 提交按钮
    let status = flow.status();
    let submit_style = if focused && page.focus == ContactFocus::Submit {
        Styles::selected()
    } else if flow.can_submit() {
        Style::default()
            .fg(c.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Styles::muted()
    };
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", status.submit_label(form)),
        submit_style,
    )));

    if let Some(banner) = status.banner(form) {
        let success = status == SubmissionStatus::Success;
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(banner, Styles::banner(success))));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_info(
    app: &App,
    page: &ContactPage,
    texts: &ContactTexts,
    frame: &mut Frame,
    area: Rect,
) {
    let info = &texts.info;
    let c = colors();

    // 通过验证前不显示邮箱地址
    let email = match page.flow.email_reveal(&app.config.contact_email) {
        EmailReveal::Revealed(address) => {
            Span::styled(format!("  {address}"), Style::default().fg(c.highlight))
        }
        EmailReveal::Protected => {
            Span::styled(format!("  {}", info.email_protected), Styles::muted())
        }
    };

    let lines = vec![
        Line::from(Span::styled(info.email, Style::default().fg(Color::Gray))),
        Line::from(email),
        Line::from(Span::styled(info.location, Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            format!("  {}", info.location_value),
            Style::default().fg(c.fg),
        )),
    ];

    let block = Block::default()
        .title(format!(" {} ", info.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(false));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn field_texts(form: &ContactFormTexts, field: FormField) -> (&'static str, &'static str) {
    match field {
        FormField::Name => (form.name, form.name_placeholder),
        FormField::Email => (form.email, form.email_placeholder),
        FormField::Company => (form.company, form.company_placeholder),
        FormField::Message => (form.message, form.message_placeholder),
        // 不渲染
        FormField::Honeypot => ("", ""),
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Styles::selected()
    } else {
        Style::default().fg(colors().fg)
    }
}
