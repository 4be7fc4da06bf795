//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Session difficulty. Only affects how fast the camera flies the track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Camera speed multiplier for this difficulty.
    pub fn speed_multiplier(self) -> f64 {
        match self {
            Difficulty::Easy => EASY_SPEED_MULTIPLIER,
            Difficulty::Medium => MEDIUM_SPEED_MULTIPLIER,
            Difficulty::Hard => HARD_SPEED_MULTIPLIER,
        }
    }
}

/// Session phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting on the start screen.
    #[default]
    Idle,
    /// Camera flying, countdown running, fire accepted.
    Running,
    /// Countdown reached zero. Waiting for a retry.
    Ended,
}

/// Projectile lifecycle. Transitions only ever move forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProjectileState {
    /// Moving towards its impact point.
    #[default]
    Traveling,
    /// Snapped to the impact point this tick.
    Impacted,
    /// Growing and fading out at the impact point.
    Exploding,
    /// Finished. Awaiting sweep.
    Expired,
}

/// What a fired shot resolved against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactKind {
    /// A living destructible target (scored).
    Target,
    /// A target that is not destructible. Nothing is scored or removed.
    Obstacle,
    /// The tunnel wall.
    Wall,
    /// Nothing; the bolt fizzles at the default miss range.
    #[default]
    OpenSpace,
}
