//! Fire-and-forget sound effects.
//!
//! The game loop hands clips to an [`AudioPlayer`] and moves on. Playback
//! runs on its own tokio task; at most one clip plays at a time and a new
//! request (or [`AudioPlayer::stop`]) aborts whatever is still playing.

mod bell;
mod command;

pub use bell::BellSink;
pub use command::CommandSink;

use crate::app::event::AppEvent;
use crate::config::{SoundBackend, SoundConfig};
use futures::future::{self, BoxFuture};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clip {
    Start,
    Move,
    Win,
    Draw,
}

impl fmt::Display for Clip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Clip::Start => "start",
            Clip::Move => "move",
            Clip::Win => "win",
            Clip::Draw => "draw",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio output is closed")]
    OutputClosed,
    #[error("no sound file configured for the {0} clip")]
    NoClip(Clip),
    #[error("failed to start player `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("player exited with {0}")]
    ExitStatus(std::process::ExitStatus),
}

/// Something that can render a clip. The returned future completes when
/// playback finishes; dropping it must stop playback.
pub trait AudioSink: Send + Sync + 'static {
    fn play(&self, clip: Clip) -> BoxFuture<'static, Result<(), AudioError>>;
}

/// Sink used when sound is disabled.
pub struct SilentSink;

impl AudioSink for SilentSink {
    fn play(&self, _clip: Clip) -> BoxFuture<'static, Result<(), AudioError>> {
        Box::pin(future::ready(Ok(())))
    }
}

/// Pick the sink described by the config.
pub fn sink_from_config(
    config: &SoundConfig,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) -> Arc<dyn AudioSink> {
    if !config.enabled {
        return Arc::new(SilentSink);
    }
    match config.backend {
        SoundBackend::Bell => Arc::new(BellSink::new(event_tx)),
        SoundBackend::Command => Arc::new(CommandSink::new(
            config.command.clone(),
            config.args.clone(),
            config.clips.clone(),
        )),
        SoundBackend::Silent => Arc::new(SilentSink),
    }
}

#[derive(Debug)]
enum PlayerCommand {
    Play(Clip),
    Stop,
}

/// Handle to the playback task.
pub struct AudioPlayer {
    tx: mpsc::UnboundedSender<PlayerCommand>,
    task: JoinHandle<()>,
}

impl AudioPlayer {
    /// Spawn the playback task. Failures are logged and forwarded to the
    /// event loop as [`AppEvent::AudioFailed`].
    pub fn spawn(sink: Arc<dyn AudioSink>, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run_player(sink, rx, event_tx));
        Self { tx, task }
    }

    /// Request a clip. Never blocks and never fails from the caller's view.
    pub fn play(&self, clip: Clip) {
        if self.tx.send(PlayerCommand::Play(clip)).is_err() {
            warn!(%clip, "audio player is gone, dropping clip");
        }
    }

    /// Abort the clip that is currently playing, if any.
    pub fn stop(&self) {
        let _ = self.tx.send(PlayerCommand::Stop);
    }
}

impl Drop for AudioPlayer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Aborts the playback task when dropped, so a cancelled player never
/// leaves a clip running behind it.
struct Playback(JoinHandle<()>);

impl Drop for Playback {
    fn drop(&mut self) {
        self.0.abort();
    }
}

async fn run_player(
    sink: Arc<dyn AudioSink>,
    mut rx: mpsc::UnboundedReceiver<PlayerCommand>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) {
    let mut current: Option<Playback> = None;

    while let Some(cmd) = rx.recv().await {
        // Dropping the previous handle aborts it.
        drop(current.take());
        match cmd {
            PlayerCommand::Play(clip) => {
                debug!(%clip, "playing clip");
                let playback = sink.play(clip);
                let event_tx = event_tx.clone();
                current = Some(Playback(tokio::spawn(async move {
                    if let Err(e) = playback.await {
                        warn!(%clip, error = %e, "sound playback failed");
                        let _ = event_tx.send(AppEvent::AudioFailed {
                            clip,
                            error: e.to_string(),
                        });
                    }
                })));
            }
            PlayerCommand::Stop => debug!("playback stopped"),
        }
    }
}
