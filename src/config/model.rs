//! Configuration data model.
//!
//! Read-only: the game never writes its config back.
//! Every field has a sensible default so the game works out of the box.

use crate::audio::Clip;
use serde::Deserialize;
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub players: PlayersConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub sound: SoundConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Names pre-filled on the name-entry screen.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayersConfig {
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub second: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Pause between a winning move and the result screen, so the win sound
    /// starts before the board disappears. Zero switches immediately.
    #[serde(default = "default_result_delay")]
    pub result_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            result_delay_ms: default_result_delay(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundBackend {
    #[default]
    Bell,
    Command,
    Silent,
}

/// Sound effect settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SoundConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub backend: SoundBackend,
    /// Player program for the `command` backend.
    #[serde(default = "default_player_command")]
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub clips: ClipFiles,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            backend: SoundBackend::default(),
            command: default_player_command(),
            args: Vec::new(),
            clips: ClipFiles::default(),
        }
    }
}

/// Sound files played by the `command` backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipFiles {
    #[serde(default)]
    pub start: Option<PathBuf>,
    #[serde(default, rename = "move")]
    pub move_: Option<PathBuf>,
    #[serde(default)]
    pub win: Option<PathBuf>,
    #[serde(default)]
    pub draw: Option<PathBuf>,
}

impl ClipFiles {
    pub fn get(&self, clip: Clip) -> Option<&PathBuf> {
        match clip {
            Clip::Start => self.start.as_ref(),
            Clip::Move => self.move_.as_ref(),
            Clip::Win => self.win.as_ref(),
            Clip::Draw => self.draw.as_ref(),
        }
    }
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_true")]
    pub show_help: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_help: true,
        }
    }
}

/// Diagnostics and match log settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Write `tracing` diagnostics to `trace_file`.
    #[serde(default = "default_true")]
    pub trace: bool,
    #[serde(default = "default_trace_file")]
    pub trace_file: String,
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_trace_level")]
    pub trace_level: String,
    /// Append one line per finished round to a daily file in `log_dir`.
    #[serde(default)]
    pub match_log: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            trace: true,
            trace_file: default_trace_file(),
            trace_level: default_trace_level(),
            match_log: false,
            log_dir: default_log_dir(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_result_delay() -> u64 {
    100
}
fn default_player_command() -> String {
    "paplay".to_string()
}
fn default_tick_rate() -> u64 {
    50
}
fn default_trace_file() -> String {
    "~/.local/share/tictactui/tictactui.log".to_string()
}
fn default_trace_level() -> String {
    "info".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/tictactui/matches".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    #[test]
    fn test_empty_file_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.game.result_delay_ms, 100);
        assert!(cfg.sound.enabled);
        assert_eq!(cfg.sound.backend, SoundBackend::Bell);
        assert_eq!(cfg.ui.tick_rate_ms, 50);
        assert!(cfg.logging.trace);
        assert!(!cfg.logging.match_log);
        assert!(cfg.players.first.is_empty());
    }

    #[test]
    fn test_partial_sections() {
        let cfg = parse_config(
            r#"
            [players]
            first = "Alice"

            [game]
            result_delay_ms = 0

            [sound]
            backend = "command"
            command = "afplay"

            [sound.clips]
            win = "~/sounds/winner.mp3"
            move = "~/sounds/clicked.mp3"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.players.first, "Alice");
        assert_eq!(cfg.players.second, "");
        assert_eq!(cfg.game.result_delay_ms, 0);
        assert_eq!(cfg.sound.backend, SoundBackend::Command);
        assert_eq!(cfg.sound.command, "afplay");
        assert_eq!(
            cfg.sound.clips.get(Clip::Win),
            Some(&PathBuf::from("~/sounds/winner.mp3"))
        );
        assert_eq!(
            cfg.sound.clips.get(Clip::Move),
            Some(&PathBuf::from("~/sounds/clicked.mp3"))
        );
        assert_eq!(cfg.sound.clips.get(Clip::Draw), None);
        assert!(cfg.sound.enabled);
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        assert!(parse_config("[sound]\nbackend = \"midi\"\n").is_err());
    }
}
