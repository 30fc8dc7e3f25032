use strum_macros::AsRefStr;

/// Cues for an audio collaborator, collected during a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr)]
pub enum AudioEvent {
    PelletEaten,
    PowerPelletEaten,
    GhostEaten,
    PlayerDied,
}

/// What the round asks of the session after a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr)]
pub enum RoundSignal {
    Continue,
    /// Every collectible was eaten and the flashing finished.
    RoundComplete,
    /// The last life was lost.
    GameOver,
}
