//! IT Konsult Core Library
//!
//! Platform-independent logic behind the IT Konsult site:
//! - Bilingual (Swedish/English) text dictionary and the scoped Language Context
//! - Route table and exact-path navigation highlighting
//! - Contact form flow (honeypot, CAPTCHA gate, single in-flight submission)
//!
//! Front ends inject the CAPTCHA widget and the submission backend through traits,
//! so the flow can be driven by a terminal UI or by tests without network access.

pub mod config;
pub mod contact;
pub mod context;
pub mod error;
pub mod i18n;
pub mod routes;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::SiteConfig;
pub use context::{LanguageContext, LanguageProvider};
pub use error::{CoreError, CoreResult};
pub use i18n::Language;
pub use routes::{NavItem, NavigationState, Route};
