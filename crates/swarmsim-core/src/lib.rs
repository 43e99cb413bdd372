//! Core types and definitions for the SWARMSIM drone simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometric types, flight paths, objects of interest, steering ports,
//! commands, events, snapshots, and constants. It has no dependency on
//! the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod interest;
pub mod path;
pub mod registry;
pub mod state;
pub mod steering;
pub mod types;

#[cfg(test)]
mod tests;
