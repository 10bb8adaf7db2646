//! Site configuration

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::contact::TEST_SITE_KEY;
use crate::error::{CoreError, CoreResult};
use crate::i18n::Language;

/// Settings read from `config.json`; every field is optional in the file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Language the Language Context starts in
    pub default_language: Language,
    /// Path shown on start
    pub start_path: String,
    /// Address revealed after CAPTCHA verification
    pub contact_email: String,
    pub captcha_site_key: String,
    /// Lifetime of a solved CAPTCHA token
    pub captcha_token_ttl_secs: u64,
    /// Form backend; `None` simulates delivery
    pub submit_endpoint: Option<Url>,
    pub simulated_delay_ms: u64,
    /// Upper bound on one submission
    pub submit_timeout_secs: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            start_path: "/".to_string(),
            contact_email: "contact@example.com".to_string(),
            captcha_site_key: TEST_SITE_KEY.to_string(),
            captcha_token_ttl_secs: 120,
            submit_endpoint: None,
            simulated_delay_ms: 1000,
            submit_timeout_secs: 15,
        }
    }
}

impl SiteConfig {
    /// Read the configuration at `path`
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is
    /// a [`CoreError::Config`].
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| CoreError::Config(format!("{}: {e}", path.display())))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| CoreError::Config(format!("{}: {e}", path.display())))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_secs(self.submit_timeout_secs)
    }

    pub fn captcha_token_ttl(&self) -> Duration {
        Duration::from_secs(self.captcha_token_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::load(&dir.path().join("config.json")).unwrap();

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.contact_email, "contact@example.com");
        assert_eq!(config.submit_timeout(), Duration::from_secs(15));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"default_language": "en", "submit_endpoint": "https://formspree.io/f/xyz"}}"#
        )
        .unwrap();

        let config = SiteConfig::load(file.path()).unwrap();

        assert_eq!(config.default_language, Language::En);
        assert_eq!(
            config.submit_endpoint.as_ref().map(Url::as_str),
            Some("https://formspree.io/f/xyz")
        );
        assert_eq!(config.start_path, "/");
        assert_eq!(config.captcha_site_key, TEST_SITE_KEY);
    }

    #[test]
    fn malformed_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"submit_endpoint": "not a url"}}"#).unwrap();

        let err = SiteConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
        assert!(!err.is_expected());
    }
}
