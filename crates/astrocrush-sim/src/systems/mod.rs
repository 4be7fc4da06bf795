//! Per-tick systems run by the combat loop.
//!
//! Systems are free functions over the state they are handed.
//! They do not own state; the engine does.

pub mod camera;
pub mod fire;
pub mod snapshot;
