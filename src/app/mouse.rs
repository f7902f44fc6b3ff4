use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::{App, CommandAction, Route};

impl App {
    /// The main entry point for handling mouse events.
    ///
    /// Open overlays see every event first; otherwise clicks on the navigation
    /// registered by the last render switch routes, and the rest goes to the
    /// active admin screen.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        let frame = self.hits.frame;

        if self.newsletter.is_open() {
            self.newsletter.handle_mouse(event, frame);
            return;
        }

        if let Route::Admin(section) = self.route {
            let capturing = self
                .admin
                .screen_mut(section)
                .is_some_and(|screen| screen.is_capturing());
            if !capturing && self.handle_navigation_click(event) {
                return;
            }
            if let Some(screen) = self.admin.screen_mut(section) {
                let outcome = screen.handle_mouse(event, frame);
                self.report_page_event(outcome);
            }
            return;
        }

        self.handle_navigation_click(event);
    }

    /// Returns `true` when a left click landed on a registered nav target.
    fn handle_navigation_click(&mut self, event: MouseEvent) -> bool {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        match self.hits.hit_test(event.column, event.row) {
            Some(route) => {
                self.execute_action(CommandAction::Navigate(route));
                true
            }
            None => false,
        }
    }
}
