use crossterm::event::{Event as CrosstermEvent, KeyEvent, MouseEvent};

/// Events the main loop feeds into the app.
#[derive(Debug)]
pub enum Event {
    /// Sent at the configured tick rate.
    Tick,
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// The terminal was resized; the next draw picks up the new size.
    Resize,
}

impl Event {
    /// Maps a terminal event, dropping the kinds the app does not use.
    pub fn from_crossterm(event: CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Key(key) => Some(Event::Key(key)),
            CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
            CrosstermEvent::Resize(_, _) => Some(Event::Resize),
            _ => None,
        }
    }
}
