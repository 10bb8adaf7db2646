//! 关于页面

use ratatui::{layout::Rect, Frame};

use konsult_core::LanguageContext;

use crate::model::App;

use super::{header, render_scrolled, section};

pub fn render(app: &App, language: &LanguageContext, frame: &mut Frame, area: Rect) {
    let about = &language.texts().about;

    let mut lines = header(about.title, about.intro);
    for part in [&about.bio, &about.experience, &about.approach] {
        lines.extend(section(part));
    }

    render_scrolled(app, frame, area, lines);
}
