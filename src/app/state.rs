use crate::config::AppConfig;
use crate::game::board::SIDE;
use crate::game::{GameError, GameSession, CELL_COUNT};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

/// How long transient status-bar notes stay up.
const STATUS_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    NameEntry,
    Game,
    Result,
}

#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn set_text(&mut self, text: String) {
        self.cursor = text.len();
        self.text = text;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    /// Terminal columns between the start of the text and the cursor.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].width()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    First,
    Second,
}

#[derive(Debug)]
pub struct NameEntryState {
    pub first: InputState,
    pub second: InputState,
    pub focus: NameField,
    pub error: Option<String>,
}

impl NameEntryState {
    pub fn new(first: &str, second: &str) -> Self {
        Self {
            first: InputState::with_text(first),
            second: InputState::with_text(second),
            focus: NameField::First,
            error: None,
        }
    }

    pub fn focused_mut(&mut self) -> &mut InputState {
        match self.focus {
            NameField::First => &mut self.first,
            NameField::Second => &mut self.second,
        }
    }

    pub fn unfocused(&self) -> &InputState {
        match self.focus {
            NameField::First => &self.second,
            NameField::Second => &self.first,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            NameField::First => NameField::Second,
            NameField::Second => NameField::First,
        };
    }
}

/// What the result screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultState {
    pub message: String,
    pub is_win: bool,
}

#[derive(Debug, Clone)]
pub struct PendingResult {
    pub result: ResultState,
    pub show_at: Instant,
}

pub struct AppState {
    pub config: AppConfig,
    pub screen: Screen,
    pub names: NameEntryState,
    pub session: Option<GameSession>,
    /// Board cell under the keyboard cursor.
    pub cursor: usize,
    pub result: Option<ResultState>,
    pub pending_result: Option<PendingResult>,
    /// Last known terminal area, for mouse hit-testing.
    pub viewport: Rect,
    pub should_quit: bool,
    pub dirty: bool,
    pub pending_bell: bool,
    pub status_message: Option<(String, Instant)>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let names = NameEntryState::new(&config.players.first, &config.players.second);
        Self {
            config,
            screen: Screen::NameEntry,
            names,
            session: None,
            cursor: CELL_COUNT / 2,
            result: None,
            pending_result: None,
            viewport: Rect::default(),
            should_quit: false,
            dirty: true,
            pending_bell: false,
            status_message: None,
        }
    }

    /// Validate the entered names and open the board. On failure no
    /// session is created and the prompt is shown on the name screen.
    pub fn start_session(&mut self) -> Result<(), GameError> {
        match GameSession::start(&self.names.first.text, &self.names.second.text) {
            Ok(session) => {
                self.session = Some(session);
                self.names.error = None;
                self.cursor = CELL_COUNT / 2;
                self.result = None;
                self.pending_result = None;
                self.screen = Screen::Game;
                self.dirty = true;
                Ok(())
            }
            Err(e) => {
                self.names.error = Some(e.to_string());
                self.dirty = true;
                Err(e)
            }
        }
    }

    /// Drop the session and go back to name entry. Entered names are kept.
    pub fn leave_session(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(rounds = session.rounds_played(), "session closed");
        }
        self.result = None;
        self.pending_result = None;
        self.screen = Screen::NameEntry;
        self.dirty = true;
    }

    /// Start a fresh round in the current session and show the board.
    pub fn reset_round(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.reset();
        }
        self.result = None;
        self.pending_result = None;
        self.cursor = CELL_COUNT / 2;
        if self.session.is_some() {
            self.screen = Screen::Game;
        }
        self.dirty = true;
    }

    /// Show the result after `delay`, or right away when it is zero.
    pub fn schedule_result(&mut self, result: ResultState, delay: Duration, now: Instant) {
        if delay.is_zero() {
            self.show_result(result);
        } else {
            self.pending_result = Some(PendingResult {
                result,
                show_at: now + delay,
            });
        }
    }

    pub fn show_result(&mut self, result: ResultState) {
        self.pending_result = None;
        self.result = Some(result);
        self.screen = Screen::Result;
        self.dirty = true;
    }

    /// Switch to the result screen once its delay has passed.
    pub fn poll_pending_result(&mut self, now: Instant) -> bool {
        match &self.pending_result {
            Some(pending) if now >= pending.show_at => {
                let result = pending.result.clone();
                self.show_result(result);
                true
            }
            _ => false,
        }
    }

    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let side = SIDE as isize;
        let row = (self.cursor / SIDE) as isize;
        let col = (self.cursor % SIDE) as isize;
        let row = (row + d_row).rem_euclid(side);
        let col = (col + d_col).rem_euclid(side);
        self.cursor = (row * side + col) as usize;
        self.dirty = true;
    }

    pub fn set_status(&mut self, text: String, now: Instant) {
        self.status_message = Some((text, now + STATUS_TTL));
        self.dirty = true;
    }

    pub fn expire_status(&mut self, now: Instant) {
        if matches!(&self.status_message, Some((_, until)) if now >= *until) {
            self.status_message = None;
            self.dirty = true;
        }
    }

    pub fn status_line(&self) -> String {
        if let Some((ref msg, _)) = self.status_message {
            return msg.clone();
        }
        match (self.screen, self.session.as_ref()) {
            (Screen::NameEntry, _) => "Enter both names to start".to_string(),
            (_, Some(session)) => {
                let [(first, a), (second, b)] = session.scoreboard();
                format!(
                    "{} {} - {} {} | Rounds: {}",
                    first,
                    a,
                    b,
                    second,
                    session.rounds_played()
                )
            }
            (_, None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_names(first: &str, second: &str) -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.names.first.set_text(first.to_string());
        state.names.second.set_text(second.to_string());
        state
    }

    #[test]
    fn test_input_editing() {
        let mut input = InputState::default();
        for c in "Alice Bob".chars() {
            input.insert_char(c);
        }
        input.delete_word_back();
        assert_eq!(input.text, "Alice ");
        input.delete_back();
        input.move_home();
        input.delete_forward();
        assert_eq!(input.text, "lice");
        input.move_end();
        input.move_left();
        input.insert_char('x');
        assert_eq!(input.text, "licxe");
    }

    #[test]
    fn test_input_multibyte_cursor() {
        let mut input = InputState::with_text("Zoë");
        input.move_left();
        assert_eq!(input.cursor, 2);
        input.delete_forward();
        assert_eq!(input.text, "Zo");
        input.set_text("日本".to_string());
        assert_eq!(input.cursor_column(), 4);
    }

    #[test]
    fn test_start_session_requires_both_names() {
        let mut state = state_with_names("Alice", "");
        assert_eq!(state.start_session(), Err(GameError::InvalidInput));
        assert!(state.session.is_none());
        assert_eq!(state.screen, Screen::NameEntry);
        assert_eq!(
            state.names.error.as_deref(),
            Some("Please enter names for both players")
        );

        state.names.second.set_text("Bob".to_string());
        assert!(state.start_session().is_ok());
        assert_eq!(state.screen, Screen::Game);
        assert!(state.names.error.is_none());
    }

    #[test]
    fn test_pending_result_waits_for_deadline() {
        let mut state = state_with_names("Alice", "Bob");
        state.start_session().unwrap();
        let now = Instant::now();
        let result = ResultState {
            message: "Alice Wins!".into(),
            is_win: true,
        };
        state.schedule_result(result.clone(), Duration::from_millis(100), now);
        assert!(!state.poll_pending_result(now + Duration::from_millis(50)));
        assert_eq!(state.screen, Screen::Game);
        assert!(state.poll_pending_result(now + Duration::from_millis(100)));
        assert_eq!(state.screen, Screen::Result);
        assert_eq!(state.result, Some(result));
    }

    #[test]
    fn test_zero_delay_shows_result_immediately() {
        let mut state = state_with_names("Alice", "Bob");
        state.start_session().unwrap();
        state.schedule_result(
            ResultState {
                message: "It's a Draw!".into(),
                is_win: false,
            },
            Duration::ZERO,
            Instant::now(),
        );
        assert_eq!(state.screen, Screen::Result);
        assert!(state.pending_result.is_none());
    }

    #[test]
    fn test_reset_cancels_pending_result() {
        let mut state = state_with_names("Alice", "Bob");
        state.start_session().unwrap();
        let now = Instant::now();
        state.schedule_result(
            ResultState {
                message: "Alice Wins!".into(),
                is_win: true,
            },
            Duration::from_millis(100),
            now,
        );
        state.reset_round();
        assert!(!state.poll_pending_result(now + Duration::from_secs(1)));
        assert_eq!(state.screen, Screen::Game);
    }

    #[test]
    fn test_leave_session_drops_it_and_keeps_names() {
        let mut state = state_with_names("Alice", "Bob");
        state.start_session().unwrap();
        state.session.as_mut().unwrap().apply_move(4);
        state.leave_session();
        assert!(state.session.is_none());
        assert!(state.result.is_none());
        assert_eq!(state.screen, Screen::NameEntry);
        assert_eq!(state.names.first.text, "Alice");

        state.start_session().unwrap();
        let session = state.session.as_ref().unwrap();
        assert_eq!(session.board().marked_count(), 0);
        assert_eq!(session.rounds_played(), 0);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(state.cursor, 4);
        state.move_cursor(-1, 0);
        assert_eq!(state.cursor, 1);
        state.move_cursor(-1, 0);
        assert_eq!(state.cursor, 7);
        state.move_cursor(0, 1);
        assert_eq!(state.cursor, 8);
        state.move_cursor(0, 1);
        assert_eq!(state.cursor, 6);
    }

    #[test]
    fn test_status_message_expires() {
        let mut state = AppState::new(AppConfig::default());
        let now = Instant::now();
        state.set_status("Sound win failed".into(), now);
        assert_eq!(state.status_line(), "Sound win failed");
        state.expire_status(now + STATUS_TTL);
        assert_eq!(state.status_line(), "Enter both names to start");
    }
}
