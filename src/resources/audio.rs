//! Bridge between the simulation and the external audio player.
//!
//! The core only emits [`AudioCmd`] values on a crossbeam channel. A front end
//! with real audio output takes [`AudioBridge::rx_cmd`] to its audio thread;
//! headless runs and tests drain it directly with [`AudioBridge::drain`].

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::events::audio::AudioCmd;

/// Sender/receiver pair for [`AudioCmd`] messages.
pub struct AudioBridge {
    /// Sender for [`AudioCmd`] messages (simulation -> audio player).
    pub tx_cmd: Sender<AudioCmd>,
    /// Receiving end, handed to the audio player or drained locally.
    pub rx_cmd: Receiver<AudioCmd>,
}

impl Default for AudioBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioBridge {
    pub fn new() -> Self {
        let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
        Self { tx_cmd, rx_cmd }
    }

    /// Queue a command; a disconnected player is not an error for the game.
    pub fn send(&self, cmd: AudioCmd) {
        if self.tx_cmd.send(cmd).is_err() {
            log::warn!("Audio player disconnected, command dropped");
        }
    }

    /// Take every queued command.
    pub fn drain(&self) -> Vec<AudioCmd> {
        self.rx_cmd.try_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_returns_commands_in_order() {
        let bridge = AudioBridge::new();
        bridge.send(AudioCmd::PlayFx {
            id: "coin".into(),
            volume: 0.5,
            pitch: 1.0,
        });
        bridge.send(AudioCmd::Shutdown);

        let cmds = bridge.drain();
        assert_eq!(cmds.len(), 2);
        assert!(matches!(&cmds[0], AudioCmd::PlayFx { id, .. } if id == "coin"));
        assert_eq!(cmds[1], AudioCmd::Shutdown);
        assert!(bridge.drain().is_empty());
    }
}
