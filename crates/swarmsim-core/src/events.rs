//! Events emitted by the simulation for external collaborators.
//!
//! Ordnance and explosion effects are one-shot events; the core does not
//! model damage or blast radius. Events are buffered during a tick and
//! drained through the snapshot.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{DroneType, SpawnSkipReason};

/// One-shot simulation events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Ordnance released at the agent's position.
    BombDropped { position: Vec3 },
    /// Kamikaze detonation at the agent's position.
    Detonation { position: Vec3 },
    /// An agent was spawned at a slot.
    DroneSpawned { slot: usize, kind: DroneType },
    /// A spawn slot was consumed without producing an agent.
    SpawnSkipped { slot: usize, reason: SpawnSkipReason },
}
