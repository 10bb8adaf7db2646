//! Language Context
//!
//! The active language lives in one shared cell owned by a [`LanguageProvider`].
//! Views receive a cloned [`LanguageContext`] handle instead of reaching for a
//! process-wide global, so every test can mount its own independent instance.
//!
//! Unmounting the provider detaches every handle cloned from it. A detached
//! handle still answers reads with the last language, but refuses writes with
//! [`CoreError::ContextMisuse`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use crate::error::{CoreError, CoreResult};
use crate::i18n::{lookup, translations, Language, Translations};

/// Handle to the active language of one view tree
#[derive(Debug, Clone)]
pub struct LanguageContext {
    current: Arc<watch::Sender<Language>>,
    attached: Arc<AtomicBool>,
}

impl LanguageContext {
    fn new(initial: Language) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            current: Arc::new(tx),
            attached: Arc::new(AtomicBool::new(true)),
        }
    }

    fn detach(&self) {
        self.attached.store(false, Ordering::SeqCst);
    }

    /// Whether the owning provider is still mounted
    pub fn is_attached(&self) -> bool {
        self.attached.load(Ordering::SeqCst)
    }

    /// Current language
    pub fn language(&self) -> Language {
        *self.current.borrow()
    }

    /// Replace the current language
    ///
    /// Subscribers are only woken when the value actually changes. Fails with
    /// [`CoreError::ContextMisuse`] once the owning provider was unmounted.
    pub fn set_language(&self, lang: Language) -> CoreResult<()> {
        if !self.is_attached() {
            log::error!("Language switch to {} through a detached context", lang.code());
            return Err(CoreError::ContextMisuse);
        }

        let changed = self.current.send_if_modified(|current| {
            if *current == lang {
                false
            } else {
                *current = lang;
                true
            }
        });
        if changed {
            log::debug!("Language switched to {}", lang.code());
        }
        Ok(())
    }

    /// Receiver that is marked changed whenever the language switches
    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.current.subscribe()
    }

    /// Typed texts of the current language
    pub fn texts(&self) -> &'static Translations {
        translations(self.language())
    }

    /// Resolve a dot-notation key in the current language
    ///
    /// An unknown key resolves to the key itself so a missing translation shows
    /// up on screen instead of leaving a blank.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        if let Some(text) = lookup(self.language(), key) {
            text
        } else {
            log::debug!(
                "Missing translation key '{key}' for {}, returning key as-is",
                self.language().code()
            );
            key
        }
    }
}

/// Owning scope of the Language Context
///
/// One provider per rendered tree. Reading the context while the provider is
/// not mounted is an integration bug and fails with [`CoreError::ContextMisuse`].
#[derive(Debug, Default)]
pub struct LanguageProvider {
    context: Option<LanguageContext>,
}

impl LanguageProvider {
    /// Create an unmounted provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider and mount it right away
    pub fn mounted(initial: Language) -> Self {
        let mut provider = Self::new();
        provider.mount(initial);
        provider
    }

    /// Mount the provider, creating its context
    ///
    /// Mounting twice keeps the existing context (and its language).
    pub fn mount(&mut self, initial: Language) -> LanguageContext {
        self.context
            .get_or_insert_with(|| LanguageContext::new(initial))
            .clone()
    }

    /// Destroy the context; handles cloned earlier are detached from this scope
    pub fn unmount(&mut self) {
        if let Some(context) = self.context.take() {
            context.detach();
        }
    }

    /// Whether the provider currently owns a context
    pub fn is_mounted(&self) -> bool {
        self.context.is_some()
    }

    /// Access the context of this scope
    pub fn use_language(&self) -> CoreResult<&LanguageContext> {
        self.context.as_ref().ok_or(CoreError::ContextMisuse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_primary_language() {
        let provider = LanguageProvider::mounted(Language::default());
        let ctx = provider.use_language().unwrap();
        assert_eq!(ctx.language(), Language::Sv);
        assert_eq!(ctx.translate("nav.home"), "Hem");
    }

    #[test]
    fn switching_language_changes_translation() {
        let provider = LanguageProvider::mounted(Language::Sv);
        let ctx = provider.use_language().unwrap();

        ctx.set_language(Language::En).unwrap();

        assert_eq!(ctx.language(), Language::En);
        assert_eq!(ctx.translate("nav.home"), "Home");
        assert_eq!(ctx.texts().contact.form.submit, "Send message");
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        let provider = LanguageProvider::mounted(Language::En);
        let ctx = provider.use_language().unwrap();

        assert_eq!(ctx.translate("nav.blog"), "nav.blog");
        assert_eq!(ctx.translate("contact.form.phone"), "contact.form.phone");
    }

    #[test]
    fn differing_keys_change_with_language() {
        let provider = LanguageProvider::mounted(Language::Sv);
        let ctx = provider.use_language().unwrap();
        let sv: Vec<_> = ctx.texts().entries();

        ctx.set_language(Language::En).unwrap();
        for (key, sv_text) in sv {
            let en_text = lookup(Language::En, key).unwrap();
            assert_eq!(ctx.translate(key), en_text);
            if sv_text != en_text {
                assert_ne!(ctx.translate(key), sv_text, "{key} did not switch");
            }
        }
    }

    #[test]
    fn subscribers_see_changes_only() {
        let provider = LanguageProvider::mounted(Language::Sv);
        let ctx = provider.use_language().unwrap();
        let mut rx = ctx.subscribe();

        ctx.set_language(Language::Sv).unwrap();
        assert!(!rx.has_changed().unwrap());

        ctx.set_language(Language::En).unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Language::En);
    }

    #[test]
    fn clones_share_the_same_cell() {
        let provider = LanguageProvider::mounted(Language::Sv);
        let a = provider.use_language().unwrap().clone();
        let b = a.clone();

        b.set_language(Language::En).unwrap();
        assert_eq!(a.language(), Language::En);
    }

    #[test]
    fn use_outside_mounted_scope_fails() {
        let mut provider = LanguageProvider::new();
        assert!(matches!(
            provider.use_language(),
            Err(CoreError::ContextMisuse)
        ));

        provider.mount(Language::En);
        assert!(provider.use_language().is_ok());

        provider.unmount();
        assert!(!provider.is_mounted());
        assert!(matches!(
            provider.use_language(),
            Err(CoreError::ContextMisuse)
        ));
    }

    #[test]
    fn mounting_twice_keeps_existing_context() {
        let mut provider = LanguageProvider::new();
        let first = provider.mount(Language::Sv);
        first.set_language(Language::En).unwrap();

        let second = provider.mount(Language::Sv);
        assert_eq!(second.language(), Language::En);
    }

    #[test]
    fn detached_handle_refuses_writes() {
        let mut provider = LanguageProvider::mounted(Language::Sv);
        let ctx = provider.use_language().unwrap().clone();
        let rx = ctx.subscribe();

        provider.unmount();

        assert!(!ctx.is_attached());
        assert!(matches!(
            ctx.set_language(Language::En),
            Err(CoreError::ContextMisuse)
        ));
        assert_eq!(ctx.language(), Language::Sv);
        assert_eq!(ctx.translate("nav.home"), "Hem");
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn remount_after_unmount_starts_fresh() {
        let mut provider = LanguageProvider::mounted(Language::Sv);
        let old = provider.use_language().unwrap().clone();
        provider.unmount();

        let new = provider.mount(Language::En);

        assert!(new.is_attached());
        assert!(!old.is_attached());
        assert!(old.set_language(Language::En).is_err());
        assert_eq!(new.language(), Language::En);
    }
}
