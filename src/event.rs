use crossterm::event::{KeyEvent, MouseEvent};

/// Application events.
#[derive(Debug)]
pub enum Event {
    /// Sent at a regular interval; advances scroll animations and drains
    /// pending form outcomes.
    Tick,
    /// A key press event.
    Key(KeyEvent),
    /// A mouse event.
    Mouse(MouseEvent),
    /// Terminal size changed; the page re-wraps and the header may
    /// switch between wide and narrow layouts.
    Resize(u16, u16),
}
