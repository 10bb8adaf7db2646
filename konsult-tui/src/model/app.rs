//! 应用主状态结构

use konsult_core::contact::TestCaptcha;
use konsult_core::{LanguageProvider, NavigationState, Route, SiteConfig};

use super::{ContactPage, FocusPanel, NavCursor, PageState};
use crate::backend::SubmitService;

/// 窄于此宽度时进入紧凑模式（对应网页的移动端菜单）
pub const COMPACT_WIDTH: u16 = 80;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 站点配置
    pub config: SiteConfig,

    /// 语言作用域（整个界面共用一个 Language Context，经 `use_language` 读取）
    pub provider: LanguageProvider,

    /// 路由与紧凑菜单状态
    pub navigation: NavigationState,
    /// 导航栏光标
    pub nav_cursor: NavCursor,

    /// 是否处于紧凑模式
    pub compact: bool,

    /// 静态页面状态
    pub page: PageState,
    /// 联系页面（仅在 Contact 页面时挂载）
    pub contact: Option<ContactPage>,
    next_mount_id: u64,

    /// 是否显示帮助
    pub show_help: bool,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 后台提交
    pub submit: SubmitService,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: SiteConfig, submit: SubmitService) -> Self {
        let provider = LanguageProvider::mounted(config.default_language);
        let navigation = NavigationState::new(config.start_path.clone());

        let mut app = Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            config,
            provider,
            navigation,
            nav_cursor: NavCursor::default(),
            compact: false,
            page: PageState::default(),
            contact: None,
            next_mount_id: 0,
            show_help: false,
            status_message: None,
            submit,
        };

        if let Some(route) = app.navigation.active_route() {
            app.nav_cursor.select_route(route);
        }
        app.sync_contact_mount();
        app
    }

    /// 根据当前页面挂载或卸载联系表单
    pub fn sync_contact_mount(&mut self) {
        let on_contact = self.navigation.page() == Route::Contact;
        match (on_contact, self.contact.is_some()) {
            (true, false) => {
                self.next_mount_id += 1;
                let captcha =
                    TestCaptcha::new(&self.config.captcha_site_key, self.config.captcha_token_ttl());
                self.contact = Some(ContactPage::new(self.next_mount_id, captcha));
                log::debug!("Contact form mounted ({})", self.next_mount_id);
            }
            (false, true) => {
                self.contact = None;
                log::debug!("Contact form unmounted");
            }
            _ => {}
        }
    }

    /// 更新终端宽度
    pub fn set_width(&mut self, width: u16) {
        self.compact = width < COMPACT_WIDTH;
    }

    /// 是否在联系表单中输入（此时字母键作为输入而不是快捷键）
    pub fn is_typing(&self) -> bool {
        self.focus.is_content() && self.contact.is_some()
    }

    /// 紧凑菜单是否展开
    pub fn is_menu_open(&self) -> bool {
        self.compact && self.navigation.is_menu_open()
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
