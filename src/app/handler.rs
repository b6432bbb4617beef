use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::audio::Clip;
use crate::config::names::suggest_player_name;
use crate::game::MoveOutcome;
use crate::logging::RoundRecord;
use crate::ui::layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};
use tracing::debug;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent, Instant::now())
        }
        AppEvent::Bell => {
            state.pending_bell = true;
            vec![]
        }
        AppEvent::AudioFailed { clip, error } => {
            state.set_status(format!("Sound '{}' failed: {}", clip, error), Instant::now());
            vec![]
        }
        AppEvent::Tick => {
            handle_tick(state, Instant::now());
            vec![]
        }
    }
}

fn handle_tick(state: &mut AppState, now: Instant) {
    state.poll_pending_result(now);
    state.expire_status(now);
}

fn handle_terminal(state: &mut AppState, event: CEvent, now: Instant) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key, now),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse, now),
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent, now: Instant) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match state.screen {
        Screen::NameEntry => handle_name_entry_key(state, key),
        Screen::Game => handle_game_key(state, key, now),
        Screen::Result => handle_result_key(state, key),
    }
}

fn handle_name_entry_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let names = &mut state.names;
    match key.code {
        KeyCode::Esc => return vec![Action::Quit],
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => names.toggle_focus(),
        KeyCode::Enter => {
            if names.focus == NameField::First {
                names.focus = NameField::Second;
            } else {
                return submit_names(state);
            }
        }
        KeyCode::Char('w') if ctrl => names.focused_mut().delete_word_back(),
        KeyCode::Char('u') if ctrl => names.focused_mut().clear(),
        KeyCode::Char('r') if ctrl => {
            let name = suggest_player_name(&names.unfocused().text);
            names.focused_mut().set_text(name);
        }
        KeyCode::Char(c) if !ctrl => names.focused_mut().insert_char(c),
        KeyCode::Backspace => names.focused_mut().delete_back(),
        KeyCode::Delete => names.focused_mut().delete_forward(),
        KeyCode::Left => names.focused_mut().move_left(),
        KeyCode::Right => names.focused_mut().move_right(),
        KeyCode::Home => names.focused_mut().move_home(),
        KeyCode::End => names.focused_mut().move_end(),
        _ => {}
    }
    vec![]
}

fn submit_names(state: &mut AppState) -> Vec<Action> {
    match state.start_session() {
        Ok(()) => vec![Action::PlayClip(Clip::Start)],
        Err(e) => {
            debug!(error = %e, "name entry rejected");
            vec![]
        }
    }
}

fn handle_game_key(state: &mut AppState, key: KeyEvent, now: Instant) -> Vec<Action> {
    match key.code {
        KeyCode::Esc => {
            state.leave_session();
            vec![Action::StopAudio]
        }
        KeyCode::Char('r') => {
            state.reset_round();
            vec![]
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.move_cursor(-1, 0);
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.move_cursor(1, 0);
            vec![]
        }
        KeyCode::Left | KeyCode::Char('h') => {
            state.move_cursor(0, -1);
            vec![]
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.move_cursor(0, 1);
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let cursor = state.cursor;
            play_cell(state, cursor, now)
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            play_cell(state, index, now)
        }
        _ => vec![],
    }
}

fn handle_result_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('p') => {
            state.leave_session();
            vec![Action::StopAudio]
        }
        KeyCode::Char('c') | KeyCode::Char('n') => {
            state.reset_round();
            vec![]
        }
        KeyCode::Esc | KeyCode::Char('q') => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent, now: Instant) -> Vec<Action> {
    if state.screen != Screen::Game {
        return vec![];
    }
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    match layout::cell_at(state.viewport, mouse.column, mouse.row) {
        Some(index) => play_cell(state, index, now),
        None => vec![],
    }
}

/// Apply a move and turn its outcome into sounds, the match log entry and
/// the (possibly delayed) result screen.
fn play_cell(state: &mut AppState, index: usize, now: Instant) -> Vec<Action> {
    if state.pending_result.is_some() {
        return vec![];
    }
    let Some(session) = state.session.as_mut() else {
        return vec![];
    };

    let outcome = session.apply_move(index);
    if !outcome.is_accepted() {
        return vec![];
    }
    state.cursor = index;
    state.dirty = true;

    let clip = match outcome {
        MoveOutcome::Won { .. } => Clip::Win,
        MoveOutcome::Drawn { .. } => Clip::Draw,
        _ => return vec![Action::PlayClip(Clip::Move)],
    };

    let message = session.result_message().unwrap_or_default();
    let [(first, first_wins), (second, second_wins)] = session.scoreboard();
    let record = RoundRecord {
        players: [first.to_string(), second.to_string()],
        scores: [first_wins, second_wins],
        round: session.rounds_played(),
        message: message.clone(),
    };

    let is_win = clip == Clip::Win;
    let delay = if is_win {
        Duration::from_millis(state.config.game.result_delay_ms)
    } else {
        Duration::ZERO
    };
    state.schedule_result(ResultState { message, is_win }, delay, now);

    vec![Action::PlayClip(clip), Action::RecordRound(record)]
}
