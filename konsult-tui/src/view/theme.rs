//! 主题和样式定义

use ratatui::style::{Color, Modifier, Style};

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    ThemeColors::dark()
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(0, 122, 204),
            highlight: Color::Rgb(0, 122, 204),
            selected_bg: Color::Rgb(38, 79, 120),
            selected_fg: Color::White,
            success: Color::Rgb(78, 201, 176),
            error: Color::Rgb(244, 135, 113),
            muted: Color::Rgb(128, 128, 128),
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 面板边框样式
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    /// 选中项样式
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 标题样式
    pub fn title() -> Style {
        Style::default()
            .fg(colors().fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 页面大标题
    pub fn heading() -> Style {
        Style::default()
            .fg(colors().highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// 导航链接：当前页面加粗并加下划线
    pub fn link(active: bool) -> Style {
        let c = colors();
        if active {
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(c.fg)
        }
    }

    /// 表单字段下方的校验提示
    pub fn notice() -> Style {
        Style::default().fg(colors().error)
    }

    /// 提交结果横幅
    pub fn banner(success: bool) -> Style {
        let c = colors();
        Style::default().fg(if success { c.success } else { c.error })
    }

    /// 次要文字
    pub fn muted() -> Style {
        Style::default().fg(colors().muted)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        Style::default().bg(Color::Rgb(0, 122, 204)).fg(Color::White)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }
}
