//! Audio commands and replies exchanged with the audio thread.
//!
//! Cues are addressed by string id. The ids used by the game are listed in
//! [`cues`] together with the files they are loaded from.

use bevy_ecs::message::Message;
use fastrand::Rng;

/// Commands sent *to* the audio thread
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    LoadFx { id: String, path: String },
    PlayFx { id: String },
    StopFx { id: String },
    MasterVolume { vol: f32 },
    Shutdown,
}

impl AudioCmd {
    pub fn play(id: &str) -> Self {
        AudioCmd::PlayFx { id: id.into() }
    }

    pub fn stop(id: &str) -> Self {
        AudioCmd::StopFx { id: id.into() }
    }

    /// One of the six gunshots, chosen uniformly.
    pub fn gunshot(rng: &mut Rng) -> Self {
        let index = rng.usize(..cues::GUNSHOTS.len());
        Self::play(cues::GUNSHOTS[index])
    }
}

/// Load replies sent *back* from the audio thread
#[derive(Debug, Clone, PartialEq)]
pub enum AudioMessage {
    FxLoaded { id: String },
    FxLoadFailed { id: String, error: String },
}

pub mod cues {
    /// Announcement played once at the start of every Ready phase.
    pub const VOICE: &str = "voice";
    pub const HEARTBEAT_SLOW: &str = "heartbeat_slow";
    pub const HEARTBEAT_FAST: &str = "heartbeat_fast";
    pub const CLEAR: &str = "clear";
    pub const GUNSHOTS: [&str; 6] = ["bang1", "bang2", "bang3", "bang4", "bang5", "bang6"];

    /// Every cue id with its file, relative to the assets directory.
    pub const FILES: [(&str, &str); 10] = [
        (VOICE, "sounds/voice.wav"),
        (HEARTBEAT_SLOW, "sounds/heart_beat_slow.wav"),
        (HEARTBEAT_FAST, "sounds/heart_beat_fast.wav"),
        (CLEAR, "sounds/clear.wav"),
        ("bang1", "sounds/bang1.ogg"),
        ("bang2", "sounds/bang2.ogg"),
        ("bang3", "sounds/bang3.ogg"),
        ("bang4", "sounds/bang4.ogg"),
        ("bang5", "sounds/bang5.ogg"),
        ("bang6", "sounds/bang6.ogg"),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gunshots_cover_all_six_cues() {
        let mut rng = Rng::with_seed(17);
        let mut seen = [false; 6];
        for _ in 0..200 {
            match AudioCmd::gunshot(&mut rng) {
                AudioCmd::PlayFx { id } => {
                    let i = cues::GUNSHOTS.iter().position(|g| *g == id).expect("gunshot id");
                    seen[i] = true;
                }
                other => panic!("unexpected command {other:?}"),
            }
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn every_gunshot_has_a_file() {
        for id in cues::GUNSHOTS {
            assert!(cues::FILES.iter().any(|(cue, _)| *cue == id));
        }
    }
}
