//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Drone airframe category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DroneType {
    /// Rotary-wing multicopter: slow, agile.
    #[default]
    Copter,
    /// Fixed-wing airframe: faster cruise.
    Wing,
}

/// Flight path classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathKind {
    /// Reconnaissance ingress toward an orbit.
    #[default]
    Recon,
    /// Attack run ending in an ordnance drop.
    AttackDrop,
    /// Attack run ending in a kamikaze dive.
    AttackKamikaze,
}

/// Scenario-level behavior mix policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BehaviorMode {
    /// Every agent gets a recon behavior.
    #[default]
    AllRecon,
    /// Every agent gets an attack behavior.
    AllAttack,
    /// Strict Recon/Attack alternation across the spawn loop.
    Alternating,
}

/// Trigger event carried by a waypoint, fired once on arrival detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaypointTrigger {
    /// Instruct the behavior's bomb-drop hook.
    Attack,
    /// Instruct the behavior's kamikaze-activation hook.
    Kamikaze,
}

/// Flight controller state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FollowState {
    /// No path assigned.
    #[default]
    Idle,
    /// Advancing through waypoints.
    Following,
    /// Path exhausted; reached exactly once.
    Complete,
}

/// Why a spawn slot was consumed without producing an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnSkipReason {
    /// The chosen object of interest has no path pool for the
    /// requested (path kind, drone type) combination.
    NoCompatiblePath,
    /// The instantiated path copy had zero valid waypoints.
    InvalidPathCopy,
    /// No drone prototype registered for the resolved type.
    MissingPrototype,
}
