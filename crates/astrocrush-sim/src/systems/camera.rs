//! Camera progression along the track.
//!
//! Eased time is `pow(t * speed, 1.2)` for session time `t` in milliseconds,
//! so the camera accelerates gently from a standstill. One lap takes
//! `LOOP_DURATION_MS` of eased time.

use astrocrush_core::constants::{CAMERA_EASE_EXPONENT, LOOP_DURATION_MS};
use astrocrush_core::types::CameraState;

use crate::track::PathTrack;

/// Move the camera to where it should be at `session_ms`.
pub fn run(camera: &mut CameraState, track: &PathTrack, session_ms: f64, speed_multiplier: f64) {
    let eased = eased_time(session_ms, speed_multiplier).max(camera.elapsed_time);
    let sample = track.sample_normalized(track_param(eased));

    camera.position = sample.position;
    camera.look_at = sample.look_at;
    camera.elapsed_time = eased;
}

/// Camera placed at the start of the track with no elapsed time.
pub fn initial(track: &PathTrack) -> CameraState {
    let sample = track.sample_normalized(0.0);
    CameraState {
        position: sample.position,
        look_at: sample.look_at,
        elapsed_time: 0.0,
    }
}

pub fn eased_time(session_ms: f64, speed_multiplier: f64) -> f64 {
    let scaled = (session_ms * speed_multiplier).max(0.0);
    scaled.powf(CAMERA_EASE_EXPONENT)
}

/// Track parameter visited at a given eased time.
pub fn track_param(elapsed_time: f64) -> f32 {
    ((elapsed_time % LOOP_DURATION_MS) / LOOP_DURATION_MS) as f32
}
