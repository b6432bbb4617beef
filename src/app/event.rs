use crate::audio::Clip;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// One pulse of the terminal bell, requested by the bell sound backend
    Bell,

    /// A sound clip failed to play; game state is unaffected
    AudioFailed { clip: Clip, error: String },

    /// Tick for UI refresh and the delayed result screen
    Tick,
}
