//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use konsult_core::{LanguageContext, Route};

use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    // 所有文本都经由已挂载的语言作用域读取
    let Ok(language) = app.provider.use_language() else {
        log::error!("Render skipped, language scope is not mounted");
        return;
    };
    let size = frame.area();

    // 五层布局：标题栏 + 导航栏 + 页面 + 页脚 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Length(3), // 导航栏
            Constraint::Min(1),    // 页面
            Constraint::Length(1), // 页脚
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(language, frame, main_layout[0]);
    components::navigation::render(app, language, frame, main_layout[1]);
    render_page_content(app, language, frame, main_layout[2]);
    render_footer(language, frame, main_layout[3]);
    components::statusbar::render(app, language, frame, main_layout[4]);

    // 紧凑菜单盖在页面上方
    if app.is_menu_open() {
        components::navigation::render_menu(app, language, frame, main_layout[2]);
    }

    // 帮助弹窗在最上层
    if app.show_help {
        components::help::render(language, frame);
    }
}

/// 渲染标题栏
fn render_title_bar(language: &LanguageContext, frame: &mut Frame, area: Rect) {
    let c = colors();
    let brand = language.texts().site.brand;
    let title = Paragraph::new(format!(" {brand} v{}", env!("CARGO_PKG_VERSION")))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 渲染页脚
fn render_footer(language: &LanguageContext, frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(format!(" {}", language.texts().site.footer))
        .style(Styles::muted());
    frame.render_widget(footer, area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, language: &LanguageContext, frame: &mut Frame, area: Rect) {
    let route = app.navigation.page();

    let block = Block::default()
        .title(format!(" {} ", language.translate(route.nav_key())))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // 未匹配的路径同样渲染首页
    match route {
        Route::Home => pages::home::render(app, language, frame, inner_area),
        Route::Services => pages::services::render(app, language, frame, inner_area),
        Route::About => pages::about::render(app, language, frame, inner_area),
        Route::Contact => pages::contact::render(app, language, frame, inner_area),
    }
}
