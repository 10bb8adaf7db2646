//! Routes and navigation highlighting
//!
//! Four static paths, each mapped to exactly one page view. Highlighting is
//! exact string equality on the path: `/services/foo` does not highlight
//! `/services`.

use serde::{Deserialize, Serialize};

use crate::context::LanguageContext;

/// Page route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Route {
    #[default]
    Home,
    Services,
    About,
    Contact,
}

impl Route {
    /// All routes in navigation order
    pub fn all() -> &'static [Route] {
        &[Route::Home, Route::Services, Route::About, Route::Contact]
    }

    /// Path of the route
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Services => "/services",
            Route::About => "/about",
            Route::Contact => "/contact",
        }
    }

    /// Exact path match
    pub fn from_path(path: &str) -> Option<Route> {
        Route::all().iter().copied().find(|r| r.path() == path)
    }

    /// Translation key of the navigation label
    pub fn nav_key(self) -> &'static str {
        match self {
            Route::Home => "nav.home",
            Route::Services => "nav.services",
            Route::About => "nav.about",
            Route::Contact => "nav.contact",
        }
    }
}

/// Page view rendered for a path
///
/// Unmatched paths render the Home view; no navigation item is highlighted for them.
pub fn resolve(path: &str) -> Route {
    Route::from_path(path).unwrap_or_else(|| {
        log::debug!("No route for '{path}', rendering home");
        Route::Home
    })
}

/// Whether a navigation item with `candidate` path is active at `current_path`
pub fn is_active(current_path: &str, candidate: &str) -> bool {
    current_path == candidate
}

/// Navigation link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub path: &'static str,
    pub label: &'static str,
}

impl NavItem {
    /// Whether this item is highlighted at `current_path`
    pub fn is_active(&self, current_path: &str) -> bool {
        is_active(current_path, self.path)
    }
}

/// Navigation links labelled in the current language
pub fn nav_items(ctx: &LanguageContext) -> Vec<NavItem> {
    Route::all()
        .iter()
        .map(|&route| NavItem {
            route,
            path: route.path(),
            label: ctx.translate(route.nav_key()),
        })
        .collect()
}

/// Router state: current path and the compact (mobile) menu toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current_path: String,
    menu_open: bool,
}

impl NavigationState {
    /// Start at `path`
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            current_path: path.into(),
            menu_open: false,
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Page view for the current path
    pub fn page(&self) -> Route {
        resolve(&self.current_path)
    }

    /// Route whose path equals the current path exactly
    pub fn active_route(&self) -> Option<Route> {
        Route::from_path(&self.current_path)
    }

    /// Go to `path`; following a link also closes the compact menu
    pub fn navigate(&mut self, path: impl Into<String>) {
        self.current_path = path.into();
        self.menu_open = false;
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Open or close the compact menu; the route is untouched
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(Route::Home.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::LanguageProvider;
    use crate::i18n::Language;

    #[test]
    fn exact_path_highlights_single_item() {
        let provider = LanguageProvider::mounted(Language::En);
        let items = nav_items(provider.use_language().unwrap());

        let active: Vec<_> = items.iter().filter(|i| i.is_active("/services")).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].route, Route::Services);
        assert_eq!(active[0].label, "Services");
    }

    #[test]
    fn no_prefix_matching() {
        let provider = LanguageProvider::mounted(Language::Sv);
        let items = nav_items(provider.use_language().unwrap());

        assert!(items.iter().all(|i| !i.is_active("/services/foo")));
        assert!(items.iter().all(|i| !i.is_active("/services/")));
        assert!(items.iter().all(|i| !i.is_active("")));
    }

    #[test]
    fn root_only_matches_root() {
        assert!(is_active("/", Route::Home.path()));
        assert!(!is_active("/about", Route::Home.path()));
    }

    #[test]
    fn unmatched_path_renders_home_without_highlight() {
        let nav = NavigationState::new("/blog");
        assert_eq!(nav.page(), Route::Home);
        assert_eq!(nav.active_route(), None);
    }

    #[test]
    fn labels_follow_language() {
        let provider = LanguageProvider::mounted(Language::Sv);
        let ctx = provider.use_language().unwrap();
        let labels: Vec<_> = nav_items(ctx).into_iter().map(|i| i.label).collect();
        assert_eq!(labels, ["Hem", "Tjänster", "Om mig", "Kontakt"]);

        ctx.set_language(Language::En).unwrap();
        let labels: Vec<_> = nav_items(ctx).into_iter().map(|i| i.label).collect();
        assert_eq!(labels, ["Home", "Services", "About", "Contact"]);
    }

    #[test]
    fn menu_toggle_leaves_route_alone() {
        let mut nav = NavigationState::new("/about");

        nav.toggle_menu();
        assert!(nav.is_menu_open());
        assert_eq!(nav.current_path(), "/about");

        nav.toggle_menu();
        assert!(!nav.is_menu_open());
        assert_eq!(nav.active_route(), Some(Route::About));
    }

    #[test]
    fn navigating_closes_menu() {
        let mut nav = NavigationState::default();
        nav.toggle_menu();

        nav.navigate(Route::Contact.path());

        assert!(!nav.is_menu_open());
        assert_eq!(nav.page(), Route::Contact);
    }
}
