//! Core state of the route shell.
//!
//! `App` owns every store and page; the UI borrows it each frame and the
//! input handlers mutate it between frames.

use std::sync::Arc;

use ratatui::layout::Rect;

use super::login::LoginState;
use crate::components::rect_contains;
use crate::i18n::LocaleStore;
use crate::pages::{AdminPages, AdminSection};
use crate::public::{Newsletter, PublicPage};
use crate::session::{Authenticator, SessionStore};

/// Where the user currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Public(PublicPage),
    Login,
    Admin(AdminSection),
}

impl Route {
    pub fn is_admin(&self) -> bool {
        matches!(self, Route::Admin(_))
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::Public(PublicPage::Home)
    }
}

pub struct App {
    // --- Core State ---
    /// Set by the quit shortcut; the main loop exits when true.
    pub should_quit: bool,
    pub route: Route,
    pub locale: LocaleStore,
    pub session: SessionStore,
    /// Owning pages for every backoffice collection.
    pub admin: AdminPages,

    // --- Screens ---
    pub login: LoginState,
    pub newsletter: Newsletter,

    // --- UI & Layout ---
    /// The message currently displayed in the status bar.
    pub status_message: String,
    /// Clickable areas registered by the last render.
    pub hits: HitRegistry,

    // --- Internal State ---
    pub(crate) authenticator: Arc<dyn Authenticator>,
}

/// Screen regions recorded during render so mouse events can be resolved
/// against what was actually drawn.
#[derive(Debug, Default)]
pub struct HitRegistry {
    targets: Vec<(Route, Rect)>,
    /// Whole terminal area of the last frame.
    pub frame: Rect,
}

impl HitRegistry {
    pub fn clear(&mut self, frame: Rect) {
        self.targets.clear();
        self.frame = frame;
    }

    pub fn register(&mut self, route: Route, rect: Rect) {
        self.targets.push((route, rect));
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<Route> {
        self.targets
            .iter()
            .find(|(_, rect)| rect_contains(rect, column, row))
            .map(|(route, _)| *route)
    }
}

/// Commands reachable from shortcuts and clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    Navigate(Route),
    CycleLanguage,
    OpenBackoffice,
    Logout,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_registry_resolves_registered_routes() {
        let mut hits = HitRegistry::default();
        hits.clear(Rect::new(0, 0, 80, 24));
        hits.register(Route::Login, Rect::new(10, 0, 6, 1));
        hits.register(Route::Public(PublicPage::Faq), Rect::new(0, 0, 5, 1));
        assert_eq!(hits.hit_test(12, 0), Some(Route::Login));
        assert_eq!(hits.hit_test(2, 0), Some(Route::Public(PublicPage::Faq)));
        assert_eq!(hits.hit_test(2, 1), None);
        hits.clear(Rect::new(0, 0, 80, 24));
        assert_eq!(hits.hit_test(12, 0), None);
    }
}
