//! Terminal bell backend.

use super::{AudioError, AudioSink, Clip};
use crate::app::event::AppEvent;
use futures::future::BoxFuture;
use std::time::Duration;
use tokio::sync::mpsc;

/// Rings the terminal bell in a short pattern per clip.
///
/// The bell byte is written by the event loop (see [`AppEvent::Bell`]) so it
/// never lands in the middle of a frame being drawn.
pub struct BellSink {
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl BellSink {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { event_tx }
    }
}

/// Number of rings and the gap between them.
pub(crate) fn pattern(clip: Clip) -> (usize, Duration) {
    match clip {
        Clip::Move => (1, Duration::ZERO),
        Clip::Start => (2, Duration::from_millis(80)),
        Clip::Win => (3, Duration::from_millis(150)),
        Clip::Draw => (2, Duration::from_millis(300)),
    }
}

impl AudioSink for BellSink {
    fn play(&self, clip: Clip) -> BoxFuture<'static, Result<(), AudioError>> {
        let event_tx = self.event_tx.clone();
        Box::pin(async move {
            let (rings, gap) = pattern(clip);
            for i in 0..rings {
                if i > 0 {
                    tokio::time::sleep(gap).await;
                }
                event_tx
                    .send(AppEvent::Bell)
                    .map_err(|_| AudioError::OutputClosed)?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_win_rings_three_times() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let sink = BellSink::new(tx);
        sink.play(Clip::Win).await.unwrap();
        let mut rings = 0;
        while let Ok(event) = rx.try_recv() {
            assert!(matches!(event, AppEvent::Bell));
            rings += 1;
        }
        assert_eq!(rings, 3);
    }

    #[tokio::test]
    async fn test_closed_output_is_an_error() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let sink = BellSink::new(tx);
        assert!(matches!(
            sink.play(Clip::Move).await,
            Err(AudioError::OutputClosed)
        ));
    }
}
