use log::debug;

use super::{App, Route};
use crate::pages::AdminSection;

impl App {
    /// Moves to `target` after applying the session guard.
    ///
    /// Backoffice routes without a session land on the login screen, and the
    /// login screen with a session lands on the dashboard.
    pub(crate) fn navigate(&mut self, target: Route) {
        let authenticated = self.session.is_authenticated();
        let resolved = match target {
            Route::Admin(_) if !authenticated => Route::Login,
            Route::Login if authenticated => Route::Admin(AdminSection::Dashboard),
            other => other,
        };

        if self.route.is_admin() && !resolved.is_admin() && !authenticated {
            self.session.logout();
        }
        if self.route == Route::Login && resolved != Route::Login {
            self.login.reset();
        }
        if self.route != resolved {
            debug!("Route {:?} -> {:?}", self.route, resolved);
        }
        self.route = resolved;
    }

    pub(crate) fn logout(&mut self) {
        if !self.session.is_authenticated() {
            return;
        }
        self.session.logout();
        self.navigate(Route::Login);
        self.status_message = self.locale.text("admin.logout").into_owned();
    }
}
