use super::App;

impl App {
    /// Called on every tick of the main loop.
    ///
    /// The only background work is the credential check, so this just picks up
    /// its result when it lands.
    pub(crate) fn on_tick(&mut self) {
        self.poll_login();
    }
}
