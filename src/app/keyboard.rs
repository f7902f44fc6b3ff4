use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{App, CommandAction, Route};
use crate::components::PageEvent;
use crate::pages::AdminSection;
use crate::public::{NewsletterOutcome, PublicPage};

impl App {
    /// The main entry point for handling keyboard events.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.handle_global_shortcuts(key) {
            return;
        }

        // Overlays capture all input.
        if self.newsletter.is_open() {
            self.handle_newsletter_key(key);
            return;
        }

        match self.route {
            Route::Public(page) => self.handle_public_key(page, key),
            Route::Login => self.handle_login_key(key),
            Route::Admin(section) => self.handle_admin_key(section, key),
        }
    }

    /// Returns `true` if the key was a global shortcut.
    fn handle_global_shortcuts(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let action = match key.code {
            KeyCode::Char('q') if ctrl => CommandAction::Quit,
            KeyCode::Char('l') if ctrl => CommandAction::CycleLanguage,
            KeyCode::Char('o') if ctrl => CommandAction::Logout,
            KeyCode::F(2) => CommandAction::OpenBackoffice,
            _ => return false,
        };
        self.execute_action(action);
        true
    }

    fn handle_newsletter_key(&mut self, key: KeyEvent) {
        match self.newsletter.handle_key(key) {
            NewsletterOutcome::Subscribed(email) => {
                self.admin.add_lead(&email, "Site");
                self.status_message = self.locale.text("newsletter.thanks").into_owned();
            }
            NewsletterOutcome::Invalid => {
                self.status_message = self.locale.text("newsletter.invalid").into_owned();
            }
            NewsletterOutcome::Closed | NewsletterOutcome::None => {}
        }
    }

    fn handle_public_key(&mut self, page: PublicPage, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Right => {
                self.execute_action(CommandAction::Navigate(Route::Public(page.next())))
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.execute_action(CommandAction::Navigate(Route::Public(page.previous())))
            }
            KeyCode::Char('n') | KeyCode::Char('N') if page == PublicPage::Contact => {
                self.newsletter.open();
            }
            _ => {}
        }
    }

    fn handle_admin_key(&mut self, section: AdminSection, key: KeyEvent) {
        let capturing = self
            .admin
            .screen_mut(section)
            .is_some_and(|screen| screen.is_capturing());
        if !capturing {
            match key.code {
                KeyCode::Tab | KeyCode::Right => {
                    self.execute_action(CommandAction::Navigate(Route::Admin(section.next())));
                    return;
                }
                KeyCode::BackTab | KeyCode::Left => {
                    self.execute_action(CommandAction::Navigate(Route::Admin(section.previous())));
                    return;
                }
                _ => {}
            }
        }
        let Some(screen) = self.admin.screen_mut(section) else {
            return;
        };
        let event = screen.handle_key(key);
        self.report_page_event(event);
    }

    pub(crate) fn report_page_event(&mut self, event: PageEvent) {
        let key = match event {
            PageEvent::Created(_) => "admin.created",
            PageEvent::Updated(_) => "admin.updated",
            PageEvent::Deleted(_) => "admin.deleted",
            PageEvent::Invalid(label) => {
                self.status_message = format!("{} {label}", self.locale.text("admin.required"));
                return;
            }
            PageEvent::None | PageEvent::Closed => return,
        };
        self.status_message = self.locale.text(key).into_owned();
    }
}
