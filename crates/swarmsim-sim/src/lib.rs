//! SWARMSIM simulation layer.
//!
//! Owns the ECS world and the deterministic tick loop: a seeded RNG,
//! queued scenario commands, the combinatorial spawner, waypoint
//! navigation with behavior handoff, locomotion, and cleanup.

pub mod agent;
pub mod engine;
pub mod flight;
pub mod spawner;
pub mod systems;

pub use engine::{EngineConfig, ScenarioEngine};
