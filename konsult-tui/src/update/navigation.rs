//! 导航更新逻辑

use konsult_core::Language;

use crate::message::NavigationMessage;
use crate::model::{App, FocusPanel, NavTarget};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.nav_cursor.select_previous();
        }

        NavigationMessage::SelectNext => {
            app.nav_cursor.select_next();
        }

        NavigationMessage::SelectFirst => {
            app.nav_cursor.select_first();
        }

        NavigationMessage::SelectLast => {
            app.nav_cursor.select_last();
        }

        NavigationMessage::Confirm => match app.nav_cursor.current() {
            Some(NavTarget::Link(route)) => go_to(app, route.path()),
            Some(NavTarget::Language(lang)) => {
                set_language(app, lang);
                // 紧凑菜单里的语言按钮同样会收起菜单
                app.navigation.close_menu();
            }
            None => {}
        },
    }
}

/// 跳转到某个路径
pub fn go_to(app: &mut App, path: &str) {
    app.navigation.navigate(path);
    app.page.reset();
    app.sync_contact_mount();
    if let Some(route) = app.navigation.active_route() {
        app.nav_cursor.select_route(route);
    }
    app.clear_status(); // 切换页面时清除状态消息
}

/// 通过语言作用域切换语言
pub fn set_language(app: &mut App, lang: Language) {
    let switched = app
        .provider
        .use_language()
        .and_then(|ctx| ctx.set_language(lang));
    if let Err(e) = switched {
        log::error!("Cannot switch language: {e}");
        return;
    }
    app.set_status(lang.display_name());
}

/// 切换到下一种语言（SV → EN → SV）
pub fn cycle_language(app: &mut App) {
    match app.provider.use_language() {
        Ok(ctx) => {
            let next = ctx.language().next();
            set_language(app, next);
        }
        Err(e) => log::error!("Cannot switch language: {e}"),
    }
}

/// 展开 / 收起紧凑菜单（宽屏下菜单按钮不存在）
pub fn toggle_menu(app: &mut App) {
    if !app.compact {
        return;
    }
    app.navigation.toggle_menu();
    if app.navigation.is_menu_open() {
        app.focus = FocusPanel::Navigation;
    }
}
