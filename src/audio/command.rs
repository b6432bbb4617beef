//! External player backend, e.g. `paplay`, `afplay` or `mpv --no-video`.

use super::{AudioError, AudioSink, Clip};
use crate::config::ClipFiles;
use crate::logging::expand_tilde;
use futures::future::BoxFuture;
use std::process::Stdio;
use tokio::process::Command;

/// Runs `<program> <args..> <clip file>` for every clip.
///
/// The child is spawned with `kill_on_drop`, so aborting playback also
/// kills the player process.
pub struct CommandSink {
    program: String,
    args: Vec<String>,
    clips: ClipFiles,
}

impl CommandSink {
    pub fn new(program: String, args: Vec<String>, clips: ClipFiles) -> Self {
        Self {
            program,
            args,
            clips,
        }
    }
}

impl AudioSink for CommandSink {
    fn play(&self, clip: Clip) -> BoxFuture<'static, Result<(), AudioError>> {
        let program = self.program.clone();
        let args = self.args.clone();
        let file = self.clips.get(clip).map(expand_tilde);
        Box::pin(async move {
            let file = file.ok_or(AudioError::NoClip(clip))?;
            let mut child = Command::new(&program)
                .args(&args)
                .arg(&file)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .kill_on_drop(true)
                .spawn()
                .map_err(|source| AudioError::Spawn {
                    program: program.clone(),
                    source,
                })?;
            let status = child.wait().await.map_err(|source| AudioError::Spawn {
                program: program.clone(),
                source,
            })?;
            if status.success() {
                Ok(())
            } else {
                Err(AudioError::ExitStatus(status))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_clip_file() {
        let sink = CommandSink::new("true".into(), vec![], ClipFiles::default());
        assert!(matches!(
            sink.play(Clip::Draw).await,
            Err(AudioError::NoClip(Clip::Draw))
        ));
    }

    #[tokio::test]
    async fn test_missing_program() {
        let clips = ClipFiles {
            win: Some("winner.wav".into()),
            ..ClipFiles::default()
        };
        let sink = CommandSink::new("tictactui-no-such-player".into(), vec![], clips);
        assert!(matches!(
            sink.play(Clip::Win).await,
            Err(AudioError::Spawn { .. })
        ));
    }
}
