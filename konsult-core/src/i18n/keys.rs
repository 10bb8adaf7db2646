//! Translation key definitions
//!
//! Every piece of UI text is a `&'static str` field, so both language tables
//! must define the full key set or the crate does not compile.
//!
//! ## Naming
//!
//! 1. Text belongs to the page it appears on: `home.*`, `services.*`, `about.*`, `contact.*`
//! 2. Navigation bar text lives under `nav.*`
//! 3. Frame text (brand, footer) lives under `site.*`
//! 4. Terminal key hints live under `hints.*`
//!
//! [`Translations::entries`] flattens the struct into dot-notation keys
//! (`contact.form.email.placeholder`); [`super::lookup`] indexes them once per
//! language for lookups by string.

/// Root of all translated texts
pub struct Translations {
    /// Frame texts
    pub site: SiteTexts,
    /// Navigation bar
    pub nav: NavTexts,
    /// Home page
    pub home: HomeTexts,
    /// Services page
    pub services: ServicesTexts,
    /// About page
    pub about: AboutTexts,
    /// Contact page
    pub contact: ContactTexts,
    /// Key hints
    pub hints: HintTexts,
}

// ============================================================================
// Frame
// ============================================================================

pub struct SiteTexts {
    pub brand: &'static str,
    pub footer: &'static str,
}

// ============================================================================
// Navigation
// ============================================================================

pub struct NavTexts {
    pub home: &'static str,
    pub services: &'static str,
    pub about: &'static str,
    pub contact: &'static str,
    pub menu: &'static str,
}

// ============================================================================
// Home page
// ============================================================================

pub struct HomeTexts {
    pub hero: HeroTexts,
    pub features: FeaturesTexts,
}

pub struct HeroTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Primary call to action (leads to Contact)
    pub cta: &'static str,
    /// Secondary call to action (leads to Services)
    pub cta2: &'static str,
}

pub struct FeaturesTexts {
    pub title: &'static str,
    pub experience: TitledText,
    pub quality: TitledText,
    pub flexible: TitledText,
}

/// A heading with one paragraph of body text
pub struct TitledText {
    pub title: &'static str,
    pub body: &'static str,
}

// ============================================================================
// Services page
// ============================================================================

pub struct ServicesTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub visare: TitledText,
    pub mapongo: TitledText,
    pub consulting: TitledText,
    pub cta: &'static str,
}

// ============================================================================
// About page
// ============================================================================

pub struct AboutTexts {
    pub title: &'static str,
    pub intro: &'static str,
    pub bio: TitledText,
    pub experience: TitledText,
    pub approach: TitledText,
}

// ============================================================================
// Contact page
// ============================================================================

pub struct ContactTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub form: ContactFormTexts,
    pub captcha: CaptchaTexts,
    pub info: ContactInfoTexts,
}

pub struct ContactFormTexts {
    pub name: &'static str,
    pub name_placeholder: &'static str,
    pub email: &'static str,
    pub email_placeholder: &'static str,
    pub company: &'static str,
    pub company_placeholder: &'static str,
    pub message: &'static str,
    pub message_placeholder: &'static str,
    pub submit: &'static str,
    pub sending: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    /// Shown next to an empty required field
    pub required: &'static str,
    /// Shown next to a malformed email address
    pub invalid_email: &'static str,
}

pub struct CaptchaTexts {
    pub label: &'static str,
    pub verified: &'static str,
}

pub struct ContactInfoTexts {
    pub title: &'static str,
    pub email: &'static str,
    pub email_protected: &'static str,
    pub location: &'static str,
    pub location_value: &'static str,
}

// ============================================================================
// Key hints
// ============================================================================

pub struct HintTexts {
    pub navigate: &'static str,
    pub open: &'static str,
    pub switch_panel: &'static str,
    pub next_field: &'static str,
    pub submit: &'static str,
    pub captcha: &'static str,
    pub scroll: &'static str,
    pub language: &'static str,
    pub menu: &'static str,
    pub help: &'static str,
    pub back: &'static str,
    pub quit: &'static str,
    pub help_title: &'static str,
}

impl Translations {
    /// Flatten into `(dot.key, text)` pairs
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        let Self {
            site,
            nav,
            home,
            services,
            about,
            contact,
            hints,
        } = self;

        vec![
            ("site.brand", site.brand),
            ("site.footer", site.footer),
            ("nav.home", nav.home),
            ("nav.services", nav.services),
            ("nav.about", nav.about),
            ("nav.contact", nav.contact),
            ("nav.menu", nav.menu),
            ("home.hero.title", home.hero.title),
            ("home.hero.subtitle", home.hero.subtitle),
            ("home.hero.cta", home.hero.cta),
            ("home.hero.cta2", home.hero.cta2),
            ("home.features.title", home.features.title),
            ("home.features.experience.title", home.features.experience.title),
            ("home.features.experience.desc", home.features.experience.body),
            ("home.features.quality.title", home.features.quality.title),
            ("home.features.quality.desc", home.features.quality.body),
            ("home.features.flexible.title", home.features.flexible.title),
            ("home.features.flexible.desc", home.features.flexible.body),
            ("services.title", services.title),
            ("services.subtitle", services.subtitle),
            ("services.visare.title", services.visare.title),
            ("services.visare.desc", services.visare.body),
            ("services.mapongo.title", services.mapongo.title),
            ("services.mapongo.desc", services.mapongo.body),
            ("services.consulting.title", services.consulting.title),
            ("services.consulting.desc", services.consulting.body),
            ("services.cta", services.cta),
            ("about.title", about.title),
            ("about.intro", about.intro),
            ("about.bio.title", about.bio.title),
            ("about.bio.content", about.bio.body),
            ("about.experience.title", about.experience.title),
            ("about.experience.content", about.experience.body),
            ("about.approach.title", about.approach.title),
            ("about.approach.content", about.approach.body),
            ("contact.title", contact.title),
            ("contact.subtitle", contact.subtitle),
            ("contact.form.name", contact.form.name),
            ("contact.form.name.placeholder", contact.form.name_placeholder),
            ("contact.form.email", contact.form.email),
            ("contact.form.email.placeholder", contact.form.email_placeholder),
            ("contact.form.company", contact.form.company),
            ("contact.form.company.placeholder", contact.form.company_placeholder),
            ("contact.form.message", contact.form.message),
            ("contact.form.message.placeholder", contact.form.message_placeholder),
            ("contact.form.submit", contact.form.submit),
            ("contact.form.sending", contact.form.sending),
            ("contact.form.success", contact.form.success),
            ("contact.form.error", contact.form.error),
            ("contact.form.required", contact.form.required),
            ("contact.form.invalid_email", contact.form.invalid_email),
            ("contact.captcha.label", contact.captcha.label),
            ("contact.captcha.verified", contact.captcha.verified),
            ("contact.info.title", contact.info.title),
            ("contact.info.email", contact.info.email),
            ("contact.info.email.protected", contact.info.email_protected),
            ("contact.info.location", contact.info.location),
            ("contact.info.location.value", contact.info.location_value),
            ("hints.navigate", hints.navigate),
            ("hints.open", hints.open),
            ("hints.switch_panel", hints.switch_panel),
            ("hints.next_field", hints.next_field),
            ("hints.submit", hints.submit),
            ("hints.captcha", hints.captcha),
            ("hints.scroll", hints.scroll),
            ("hints.language", hints.language),
            ("hints.menu", hints.menu),
            ("hints.help", hints.help),
            ("hints.back", hints.back),
            ("hints.quit", hints.quit),
            ("hints.help_title", hints.help_title),
        ]
    }
}
