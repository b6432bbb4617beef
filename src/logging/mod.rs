//! Diagnostics and match logging.
//!
//! `tracing` output goes to a file because the terminal belongs to the UI.
//! The optional match log appends one line per finished round to daily
//! files named `matches_<date>.log` in the configured log directory
//! (default: `~/.local/share/tictactui/matches/`).

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Expand a leading `~` to the home directory.
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| path.to_path_buf()),
        Err(_) => path.to_path_buf(),
    }
}

/// Install the global `tracing` subscriber. `RUST_LOG` wins over the
/// configured level. Does nothing when tracing is disabled.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    if !config.trace {
        return Ok(());
    }
    let path = expand_tilde(&config.trace_file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.trace_level)),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// One finished round, as written to the match log.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundRecord {
    pub players: [String; 2],
    pub scores: [u32; 2],
    pub round: u32,
    pub message: String,
}

impl RoundRecord {
    pub fn format_line(&self, timestamp: &str) -> String {
        format!(
            "[{}] round {}: {} (X) vs {} (O): {} | score {}-{}",
            timestamp,
            self.round,
            self.players[0],
            self.players[1],
            self.message,
            self.scores[0],
            self.scores[1]
        )
    }
}

/// Appends finished rounds to daily match log files.
///
/// The file handle is cached for the lifetime of the logger. Write errors
/// are logged and otherwise ignored; the game never waits on the log.
pub struct MatchLogger {
    enabled: bool,
    log_dir: PathBuf,
    file: Option<(String, fs::File)>,
}

impl MatchLogger {
    pub fn new(config: &LoggingConfig) -> Self {
        Self {
            enabled: config.match_log,
            log_dir: expand_tilde(&config.log_dir),
            file: None,
        }
    }

    /// Write a round to today's log file. No-op if the match log is off.
    pub fn log_round(&mut self, record: &RoundRecord) {
        if !self.enabled {
            return;
        }
        let now = chrono::Local::now();
        let line = record.format_line(&now.format("%H:%M:%S").to_string());
        let filename = format!("matches_{}.log", now.format("%Y-%m-%d"));
        if let Err(e) = self.write_line(&filename, &line) {
            tracing::warn!(error = %e, "failed to write match log");
        }
    }

    fn write_line(&mut self, filename: &str, line: &str) -> Result<()> {
        let stale = !matches!(&self.file, Some((name, _)) if name == filename);
        if stale {
            fs::create_dir_all(&self.log_dir).with_context(|| {
                format!("Failed to create match log directory {}", self.log_dir.display())
            })?;
            let path = self.log_dir.join(filename);
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            self.file = Some((filename.to_string(), file));
        }
        if let Some((_, file)) = self.file.as_mut() {
            writeln!(file, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> RoundRecord {
        RoundRecord {
            players: ["Alice".into(), "Bob".into()],
            scores: [2, 1],
            round: 3,
            message: "Alice Wins!".into(),
        }
    }

    #[test]
    fn test_format_line() {
        assert_eq!(
            record().format_line("12:00:00"),
            "[12:00:00] round 3: Alice (X) vs Bob (O): Alice Wins! | score 2-1"
        );
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("/tmp/x.log"), PathBuf::from("/tmp/x.log"));
        assert_eq!(expand_tilde("relative/x"), PathBuf::from("relative/x"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/logs"), home.join("logs"));
        }
    }

    #[test]
    fn test_match_log_appends_lines() {
        let dir = std::env::temp_dir().join(format!("tictactui-test-{}", std::process::id()));
        let config = LoggingConfig {
            match_log: true,
            log_dir: dir.display().to_string(),
            ..LoggingConfig::default()
        };
        let mut logger = MatchLogger::new(&config);
        logger.log_round(&record());
        logger.log_round(&record());

        let filename = format!("matches_{}.log", chrono::Local::now().format("%Y-%m-%d"));
        let contents = fs::read_to_string(dir.join(filename)).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.lines().all(|l| l.ends_with("Alice Wins! | score 2-1")));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_disabled_logger_writes_nothing() {
        let dir = std::env::temp_dir().join(format!("tictactui-off-{}", std::process::id()));
        let config = LoggingConfig {
            match_log: false,
            log_dir: dir.display().to_string(),
            ..LoggingConfig::default()
        };
        MatchLogger::new(&config).log_round(&record());
        assert!(!dir.exists());
    }
}
