//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::Difficulty;

/// All possible player and shell actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session shell ---
    /// Start a session from the start screen.
    StartSession { difficulty: Difficulty },
    /// Reset everything and go back to the start screen.
    RetrySession,

    // --- Input ---
    /// Pointer moved. Coordinates are normalised device coordinates
    /// (`[-1, 1]`, y up); out-of-range values simply aim off-screen.
    PointerMoved { x: f32, y: f32 },
    /// Viewport resized, in pixels.
    ViewportResized { width: f32, height: f32 },
    /// Fire one laser bolt along the current aim ray.
    Fire,
}
