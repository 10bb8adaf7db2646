//! 服务页面

use ratatui::{layout::Rect, Frame};

use konsult_core::{LanguageContext, Route};

use crate::model::App;

use super::{action_row, header, render_scrolled, section};

pub fn render(app: &App, language: &LanguageContext, frame: &mut Frame, area: Rect) {
    let services = &language.texts().services;

    let mut lines = header(services.title, services.subtitle);
    for service in [&services.visare, &services.mapongo, &services.consulting] {
        lines.extend(section(service));
    }
    lines.push(action_row(app, language, Route::Services));

    render_scrolled(app, frame, area, lines);
}
