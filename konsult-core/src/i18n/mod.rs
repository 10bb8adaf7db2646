//! Internationalization (i18n)
//!
//! Two compile-time translation tables (Swedish, English) built from plain
//! Rust structs: typed field access for views, dot-notation lookup for
//! dynamic keys at the boundary.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

mod en_us;
pub mod keys;
mod sv_se;

pub use keys::*;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Swedish (primary)
    #[default]
    Sv,
    /// English
    En,
}

impl Language {
    /// All supported languages, primary first
    pub fn all() -> &'static [Language] {
        &[Language::Sv, Language::En]
    }

    /// Name of the language written in that language
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Sv => "Svenska",
            Language::En => "English",
        }
    }

    /// Caption of the language toggle button
    pub fn label(self) -> &'static str {
        match self {
            Language::Sv => "SV",
            Language::En => "EN",
        }
    }

    /// ISO 639-1 code
    pub fn code(self) -> &'static str {
        match self {
            Language::Sv => "sv",
            Language::En => "en",
        }
    }

    /// Parse a language code or BCP 47 tag
    pub fn from_code(code: &str) -> Option<Language> {
        match code.to_ascii_lowercase().as_str() {
            "sv" | "sv-se" => Some(Language::Sv),
            "en" | "en-us" | "en-gb" => Some(Language::En),
            _ => None,
        }
    }

    /// The other language (used by the toggle shortcut)
    #[must_use]
    pub fn next(self) -> Language {
        match self {
            Language::Sv => Language::En,
            Language::En => Language::Sv,
        }
    }
}

/// Translation table of a language
pub fn translations(lang: Language) -> &'static Translations {
    match lang {
        Language::Sv => &sv_se::TRANSLATIONS,
        Language::En => &en_us::TRANSLATIONS,
    }
}

type KeyIndex = HashMap<&'static str, &'static str>;

static SV_INDEX: LazyLock<KeyIndex> =
    LazyLock::new(|| sv_se::TRANSLATIONS.entries().into_iter().collect());
static EN_INDEX: LazyLock<KeyIndex> =
    LazyLock::new(|| en_us::TRANSLATIONS.entries().into_iter().collect());

/// Resolve a dot-notation key in `lang`, `None` when the key is unknown
pub fn lookup(lang: Language, key: &str) -> Option<&'static str> {
    let index = match lang {
        Language::Sv => &*SV_INDEX,
        Language::En => &*EN_INDEX,
    };
    index.get(key).copied()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn keys_of(lang: Language) -> Vec<&'static str> {
        translations(lang).entries().into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn primary_language_is_default() {
        assert_eq!(Language::default(), Language::Sv);
        assert_eq!(Language::all()[0], Language::Sv);
    }

    #[test]
    fn both_tables_define_same_unique_keys() {
        let sv = keys_of(Language::Sv);
        let en = keys_of(Language::En);
        assert_eq!(sv, en);

        let unique: HashSet<_> = sv.iter().collect();
        assert_eq!(unique.len(), sv.len(), "duplicate key in entries()");
    }

    #[test]
    fn every_entry_is_non_empty() {
        for lang in Language::all() {
            for (key, text) in translations(*lang).entries() {
                assert!(!text.trim().is_empty(), "{key} is empty in {}", lang.code());
            }
        }
    }

    #[test]
    fn lookup_resolves_dotted_keys() {
        assert_eq!(lookup(Language::Sv, "nav.home"), Some("Hem"));
        assert_eq!(lookup(Language::En, "nav.home"), Some("Home"));
        assert_eq!(
            lookup(Language::En, "contact.info.email.protected"),
            Some("Complete CAPTCHA to view email address")
        );
        assert_eq!(lookup(Language::Sv, "nav.nope"), None);
    }

    #[test]
    fn index_covers_every_entry() {
        for &lang in Language::all() {
            for (key, text) in translations(lang).entries() {
                assert_eq!(lookup(lang, key), Some(text), "{key} in {}", lang.code());
            }
        }
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(Language::from_code("SV-se"), Some(Language::Sv));
        assert_eq!(Language::from_code("en-GB"), Some(Language::En));
        assert_eq!(Language::from_code("de"), None);
    }

    #[test]
    fn next_toggles() {
        assert_eq!(Language::Sv.next(), Language::En);
        assert_eq!(Language::En.next().next(), Language::En);
    }
}
