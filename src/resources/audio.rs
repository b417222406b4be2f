//! ECS resources that bridge the main thread with the background audio thread.
//!
//! Use [`setup_audio`] once during initialization to spawn the audio thread
//! and insert the [`AudioBridge`] and the command queue. Call
//! [`shutdown_audio`] during teardown to stop the thread and free audio
//! resources.

use std::time::{Duration, Instant};

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::systems::audio::audio_thread;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, unbounded};
use log::{debug, warn};
use rustc_hash::FxHashSet;

/// Shared bridge between the ECS world and the audio thread.
#[derive(Resource)]
pub struct AudioBridge {
    /// Sender for [`AudioCmd`] messages (ECS -> audio thread).
    pub tx_cmd: Sender<AudioCmd>,
    /// Receiver for [`AudioMessage`] messages (audio thread -> ECS).
    pub rx_msg: Receiver<AudioMessage>,
    /// Join handle for the background audio thread.
    pub handle: std::thread::JoinHandle<()>,
}

impl AudioBridge {
    /// Block until every id in `ids` has replied `FxLoaded`.
    ///
    /// Fails on the first `FxLoadFailed`, or when `timeout` elapses first.
    pub fn wait_for_fx(&self, ids: &[&str], timeout: Duration) -> Result<(), String> {
        let mut pending: FxHashSet<&str> = ids.iter().copied().collect();
        let deadline = Instant::now() + timeout;
        while !pending.is_empty() {
            let left = deadline.saturating_duration_since(Instant::now());
            match self.rx_msg.recv_timeout(left) {
                Ok(AudioMessage::FxLoaded { id }) => {
                    debug!("sound '{}' ready", id);
                    pending.remove(id.as_str());
                }
                Ok(AudioMessage::FxLoadFailed { id, error }) => {
                    return Err(format!("Failed to load sound '{}': {}", id, error));
                }
                Err(RecvTimeoutError::Timeout) => {
                    let mut missing: Vec<&str> = pending.into_iter().collect();
                    missing.sort_unstable();
                    return Err(format!("Timed out loading sounds: {}", missing.join(", ")));
                }
                Err(RecvTimeoutError::Disconnected) => {
                    return Err("Audio thread exited during sound loading".to_string());
                }
            }
        }
        Ok(())
    }
}

/// Spawn the audio thread and register bridge resources.
///
/// This function:
/// - Creates command/reply channels.
/// - Spawns the background thread running [`audio_thread`].
/// - Inserts [`AudioBridge`] and initializes the `Messages<AudioCmd>` queue.
pub fn setup_audio(world: &mut World) {
    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    let (tx_msg, rx_msg) = unbounded::<AudioMessage>();

    let handle = std::thread::spawn(move || audio_thread(rx_cmd, tx_msg));

    world.insert_resource(AudioBridge {
        tx_cmd,
        rx_msg,
        handle,
    });
    world.insert_resource(Messages::<AudioCmd>::default());
}

/// Request shutdown of the audio thread and join it.
///
/// If the bridge resource exists, sends [`AudioCmd::Shutdown`], waits for the
/// thread to exit, and removes the resource from the world.
pub fn shutdown_audio(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<AudioBridge>() {
        let _ = bridge.tx_cmd.send(AudioCmd::Shutdown);
        if bridge.handle.join().is_err() {
            warn!("audio thread panicked");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bridge() -> (AudioBridge, Sender<AudioMessage>, Receiver<AudioCmd>) {
        let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
        let (tx_msg, rx_msg) = unbounded::<AudioMessage>();
        let bridge = AudioBridge {
            tx_cmd,
            rx_msg,
            handle: std::thread::spawn(|| {}),
        };
        (bridge, tx_msg, rx_cmd)
    }

    fn loaded(id: &str) -> AudioMessage {
        AudioMessage::FxLoaded { id: id.to_string() }
    }

    #[test]
    fn wait_for_fx_returns_once_every_id_is_loaded() {
        let (bridge, tx, _rx) = bridge();
        tx.send(loaded("clear")).unwrap();
        tx.send(loaded("voice")).unwrap();
        assert!(bridge
            .wait_for_fx(&["voice", "clear"], Duration::from_millis(200))
            .is_ok());
    }

    #[test]
    fn wait_for_fx_fails_on_the_first_failed_load() {
        let (bridge, tx, _rx) = bridge();
        tx.send(loaded("voice")).unwrap();
        tx.send(AudioMessage::FxLoadFailed {
            id: "bang3".to_string(),
            error: "missing file".to_string(),
        })
        .unwrap();
        let err = bridge
            .wait_for_fx(&["voice", "bang3"], Duration::from_millis(200))
            .unwrap_err();
        assert!(err.contains("bang3") && err.contains("missing file"));
    }

    #[test]
    fn wait_for_fx_names_the_sounds_still_missing_on_timeout() {
        let (bridge, tx, _rx) = bridge();
        tx.send(loaded("voice")).unwrap();
        let err = bridge
            .wait_for_fx(&["voice", "clear", "bang1"], Duration::from_millis(50))
            .unwrap_err();
        assert_eq!(err, "Timed out loading sounds: bang1, clear");
    }
}
