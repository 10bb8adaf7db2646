//! 导航栏光标
//!
//! 导航栏上有六个可选目标：四个页面链接和 SV / EN 两个语言按钮。
//! 当前页面的高亮由 `konsult_core::NavigationState` 决定，
//! 这里只记录键盘光标停在哪一项。

use konsult_core::{Language, Route};

/// 导航栏上的可选目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Link(Route),
    Language(Language),
}

/// 导航栏目标，按显示顺序
pub const NAV_TARGETS: [NavTarget; 6] = [
    NavTarget::Link(Route::Home),
    NavTarget::Link(Route::Services),
    NavTarget::Link(Route::About),
    NavTarget::Link(Route::Contact),
    NavTarget::Language(Language::Sv),
    NavTarget::Language(Language::En),
];

/// 导航栏光标
#[derive(Debug, Default)]
pub struct NavCursor {
    /// 当前选中的索引
    pub selected: usize,
}

impl NavCursor {
    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < NAV_TARGETS.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = NAV_TARGETS.len() - 1;
    }

    /// 把光标移到某个页面链接上
    pub fn select_route(&mut self, route: Route) {
        if let Some(index) = NAV_TARGETS
            .iter()
            .position(|target| *target == NavTarget::Link(route))
        {
            self.selected = index;
        }
    }

    /// 获取当前选中的目标
    pub fn current(&self) -> Option<NavTarget> {
        NAV_TARGETS.get(self.selected).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_stops_at_both_ends() {
        let mut cursor = NavCursor::default();
        cursor.select_previous();
        assert_eq!(cursor.current(), Some(NavTarget::Link(Route::Home)));

        cursor.select_last();
        cursor.select_next();
        assert_eq!(cursor.current(), Some(NavTarget::Language(Language::En)));
    }

    #[test]
    fn select_route_moves_to_link() {
        let mut cursor = NavCursor::default();
        cursor.select_route(Route::Contact);
        assert_eq!(cursor.selected, 3);
    }
}
