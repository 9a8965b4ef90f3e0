/// Commands sent *to* the audio collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioCmd {
    /// Play a one-shot effect. `pitch` is a playback rate, 1.0 being unchanged.
    PlayFx { id: String, volume: f32, pitch: f32 },
    Shutdown,
}
