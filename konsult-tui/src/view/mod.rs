//! View 层
//!
//! 纯渲染：只读取 `App`，不修改任何状态。
//!
//! ```text
//! layout::render
//!   ├── 标题栏
//!   ├── components::navigation   导航栏 / 紧凑菜单
//!   ├── pages::{home, services, about, contact}
//!   ├── 页脚
//!   ├── components::statusbar
//!   └── components::help         帮助弹窗
//! ```

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
