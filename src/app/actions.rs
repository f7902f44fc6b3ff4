use log::{debug, info};

use super::{App, CommandAction, Route};
use crate::pages::AdminSection;

impl App {
    /// The single place where shortcuts and clicks turn into state changes.
    pub(crate) fn execute_action(&mut self, action: CommandAction) {
        debug!("Executing action {:?}", action);
        match action {
            CommandAction::Navigate(route) => self.navigate(route),
            CommandAction::CycleLanguage => {
                self.locale.cycle();
                let language = self.locale.language();
                info!("Language switched to {}", language.code());
                self.status_message = format!(
                    "{}: {}",
                    self.locale.text("status.language"),
                    language.label()
                );
            }
            CommandAction::OpenBackoffice => {
                if !self.route.is_admin() {
                    self.navigate(Route::Admin(AdminSection::Dashboard));
                }
            }
            CommandAction::Logout => self.logout(),
            CommandAction::Quit => self.should_quit = true,
        }
    }
}
