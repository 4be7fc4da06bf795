//! Core types and definitions for the ASTROCRUSH simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, frame snapshots, events, constants, and the
//! collaborator traits the simulation hands its output to.
//! It has no dependency on any rendering or audio backend.

pub mod collaborators;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
