//! 首页

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    Frame,
};

use konsult_core::{LanguageContext, Route};

use crate::model::App;
use crate::view::theme::Styles;

use super::{action_row, header, render_scrolled, section};

pub fn render(app: &App, language: &LanguageContext, frame: &mut Frame, area: Rect) {
    let home = &language.texts().home;

    let mut lines = header(home.hero.title, home.hero.subtitle);
    lines.push(action_row(app, language, Route::Home));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(home.features.title, Styles::heading())));
    lines.push(Line::from(""));
    for feature in [
        &home.features.experience,
        &home.features.quality,
        &home.features.flexible,
    ] {
        lines.extend(section(feature));
    }

    render_scrolled(app, frame, area, lines);
}
