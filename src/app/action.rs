use crate::audio::Clip;
use crate::logging::RoundRecord;

/// Side effects requested by the event handler, carried out by the main loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    PlayClip(Clip),
    StopAudio,
    RecordRound(RoundRecord),
    Quit,
}
