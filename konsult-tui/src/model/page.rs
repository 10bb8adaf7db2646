//! 页面内容状态

use konsult_core::Route;

/// 页面上的行动按钮（call to action）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    /// 按钮文字的翻译键
    pub key: &'static str,
    /// 点击后前往的页面
    pub target: Route,
}

const HOME_ACTIONS: &[CallToAction] = &[
    CallToAction {
        key: "home.hero.cta",
        target: Route::Contact,
    },
    CallToAction {
        key: "home.hero.cta2",
        target: Route::Services,
    },
];

const SERVICES_ACTIONS: &[CallToAction] = &[CallToAction {
    key: "services.cta",
    target: Route::Contact,
}];

/// 页面上的行动按钮
pub fn actions(route: Route) -> &'static [CallToAction] {
    match route {
        Route::Home => HOME_ACTIONS,
        Route::Services => SERVICES_ACTIONS,
        Route::About | Route::Contact => &[],
    }
}

/// 静态页面（Home / Services / About）的滚动与按钮选择
#[derive(Debug, Default)]
pub struct PageState {
    /// 垂直滚动偏移
    pub scroll: u16,
    /// 选中的行动按钮
    pub action: usize,
}

impl PageState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn previous_action(&mut self) {
        self.action = self.action.saturating_sub(1);
    }

    pub fn next_action(&mut self, count: usize) {
        if self.action + 1 < count {
            self.action += 1;
        }
    }
}
