//! ASTROCRUSH application shell.
//!
//! Drives the combat loop on its own thread, feeds snapshots to a renderer
//! and audio events to an audio sink, and loads configuration.

pub mod config;
pub mod game_loop;
pub mod headless;
pub mod state;

pub use astrocrush_core as core;
