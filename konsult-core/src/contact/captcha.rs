//! CAPTCHA integration
//!
//! The widget is an external collaborator. It talks to the form through two
//! inbound events (`verified(token)`, `cleared()`) and the form talks back
//! through a single outbound call, `reset()`.

use std::time::{Duration, Instant};

/// Public reCAPTCHA v2 test key; always verifies
pub const TEST_SITE_KEY: &str = "6LeIxAcTAAAAAJcZVRqyHh71UMIEGNQ_MXjiZKhI";

/// Default lifetime of a solved challenge
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(120);

/// Event raised by the widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptchaEvent {
    /// Challenge solved
    Verified(String),
    /// Token expired or the widget was reset
    Cleared,
}

impl CaptchaEvent {
    /// Map a widget callback value (token or null) to an event
    pub fn from_callback(token: Option<String>) -> Self {
        match token {
            Some(token) if !token.is_empty() => CaptchaEvent::Verified(token),
            _ => CaptchaEvent::Cleared,
        }
    }
}

/// Inbound side: receives widget events
pub trait CaptchaEvents {
    fn captcha_verified(&mut self, token: String);
    fn captcha_cleared(&mut self);

    /// Route an event to the matching handler
    fn handle_captcha(&mut self, event: CaptchaEvent) {
        match event {
            CaptchaEvent::Verified(token) => self.captcha_verified(token),
            CaptchaEvent::Cleared => self.captcha_cleared(),
        }
    }
}

/// Outbound side: what the form may ask of the widget
pub trait CaptchaWidget: Send {
    /// Key the widget was rendered with
    fn site_key(&self) -> &str;

    /// Put the widget back into its unsolved state
    fn reset(&mut self);
}

/// Checkbox widget backed by the test site key
///
/// Ticking the box always succeeds and yields a random token, which expires
/// after `ttl` like a real challenge does.
#[derive(Debug, Clone)]
pub struct TestCaptcha {
    site_key: String,
    ttl: Duration,
    solved_at: Option<Instant>,
}

impl TestCaptcha {
    pub fn new(site_key: impl Into<String>, ttl: Duration) -> Self {
        Self {
            site_key: site_key.into(),
            ttl,
            solved_at: None,
        }
    }

    /// Whether the checkbox is ticked
    pub fn is_checked(&self) -> bool {
        self.solved_at.is_some()
    }

    /// Visitor ticks the checkbox; `None` when it is already ticked
    pub fn solve(&mut self, now: Instant) -> Option<CaptchaEvent> {
        if self.solved_at.is_some() {
            return None;
        }
        self.solved_at = Some(now);
        Some(CaptchaEvent::Verified(uuid::Uuid::new_v4().to_string()))
    }

    /// Emit `Cleared` once the solved token has outlived its ttl
    pub fn poll_expiry(&mut self, now: Instant) -> Option<CaptchaEvent> {
        let solved_at = self.solved_at?;
        if now.saturating_duration_since(solved_at) >= self.ttl {
            log::debug!("CAPTCHA token expired");
            self.solved_at = None;
            Some(CaptchaEvent::Cleared)
        } else {
            None
        }
    }
}

impl Default for TestCaptcha {
    fn default() -> Self {
        Self::new(TEST_SITE_KEY, DEFAULT_TOKEN_TTL)
    }
}

impl CaptchaWidget for TestCaptcha {
    fn site_key(&self) -> &str {
        &self.site_key
    }

    fn reset(&mut self) {
        self.solved_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_callback_clears() {
        assert_eq!(CaptchaEvent::from_callback(None), CaptchaEvent::Cleared);
        assert_eq!(
            CaptchaEvent::from_callback(Some(String::new())),
            CaptchaEvent::Cleared
        );
        assert_eq!(
            CaptchaEvent::from_callback(Some("tok".into())),
            CaptchaEvent::Verified("tok".into())
        );
    }

    #[test]
    fn solving_twice_yields_one_token() {
        let mut captcha = TestCaptcha::default();
        let now = Instant::now();

        assert!(matches!(captcha.solve(now), Some(CaptchaEvent::Verified(_))));
        assert!(captcha.solve(now).is_none());
        assert!(captcha.is_checked());
    }

    #[test]
    fn token_expires_after_ttl() {
        let mut captcha = TestCaptcha::new(TEST_SITE_KEY, Duration::from_secs(2));
        let start = Instant::now();
        captcha.solve(start);

        assert_eq!(captcha.poll_expiry(start + Duration::from_secs(1)), None);
        assert_eq!(
            captcha.poll_expiry(start + Duration::from_secs(2)),
            Some(CaptchaEvent::Cleared)
        );
        assert!(!captcha.is_checked());
        assert_eq!(captcha.poll_expiry(start + Duration::from_secs(3)), None);
    }

    #[test]
    fn reset_unticks() {
        let mut captcha = TestCaptcha::default();
        captcha.solve(Instant::now());
        captcha.reset();
        assert!(!captcha.is_checked());
        assert_eq!(captcha.site_key(), TEST_SITE_KEY);
    }
}
