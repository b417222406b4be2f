//! Audio system implementation backed by a dedicated thread and Raylib.
//!
//! This module hosts the background audio thread and the systems that bridge
//! it with the ECS world:
//! - [`audio_thread`] runs on its own OS thread, owns the Raylib audio device,
//!   and processes [`AudioCmd`] messages, emitting [`AudioMessage`] replies.
//! - [`forward_audio_cmds`] sends the cues written by the simulation this
//!   tick to the thread.
//!
//! Raylib audio calls stay on a single thread; the game thread talks to it
//! through lock-free channels. Replies are only read during setup, by
//! [`AudioBridge::wait_for_fx`].

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::{MessageReader, Messages, Res, ResMut};
use crossbeam_channel::{Receiver, Sender};
use log::{debug, error, info, warn};
use raylib::core::audio::{RaylibAudio, Sound};
use rustc_hash::FxHashMap;

/// Forward ECS AudioCmd messages to the audio thread via the AudioBridge sender.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // Send errors only happen after shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for AudioCmd so same-tick readers can observe writes.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Entry point of the dedicated audio thread.
///
/// Owns every `Sound` handle, reacts to [`AudioCmd`] inputs and reports
/// each load back as an [`AudioMessage`]. Blocks on the command channel until
/// it receives [`AudioCmd::Shutdown`] or the bridge is dropped.
///
/// If the audio device cannot be opened, every load is answered with
/// `FxLoadFailed` so that setup can report the problem.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_evt: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            error!("[audio] failed to initialize audio device: {}", e);
            for cmd in rx_cmd.iter() {
                match cmd {
                    AudioCmd::LoadFx { id, .. } => {
                        let _ = tx_evt.send(AudioMessage::FxLoadFailed {
                            id,
                            error: format!("no audio device: {}", e),
                        });
                    }
                    AudioCmd::Shutdown => break,
                    _ => {}
                }
            }
            return;
        }
    };

    debug!(
        "[audio] thread starting (id={:?})",
        std::thread::current().id()
    );

    let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();

    for cmd in rx_cmd.iter() {
        match cmd {
            AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                Ok(sound) => {
                    debug!("[audio] fx loaded id='{}' path='{}'", id, path);
                    sounds.insert(id.clone(), sound);
                    let _ = tx_evt.send(AudioMessage::FxLoaded { id });
                }
                Err(e) => {
                    warn!(
                        "[audio] fx load failed id='{}' path='{}' error='{}'",
                        id, path, e
                    );
                    let _ = tx_evt.send(AudioMessage::FxLoadFailed {
                        id,
                        error: e.to_string(),
                    });
                }
            },
            AudioCmd::PlayFx { id } => match sounds.get(&id) {
                Some(sound) => {
                    debug!("[audio] fx play id='{}'", id);
                    sound.play();
                }
                None => warn!("[audio] fx play failed id='{}' reason='not loaded'", id),
            },
            AudioCmd::StopFx { id } => {
                if let Some(sound) = sounds.get(&id) {
                    if sound.is_playing() {
                        debug!("[audio] fx stop id='{}'", id);
                    }
                    sound.stop();
                }
            }
            AudioCmd::MasterVolume { vol } => {
                info!("[audio] master volume {}", vol);
                audio.set_master_volume(vol);
            }
            AudioCmd::Shutdown => {
                debug!("[audio] shutdown requested");
                break;
            }
        }
    }
    sounds.clear();

    debug!(
        "[audio] thread exiting (id={:?})",
        std::thread::current().id()
    );
}

