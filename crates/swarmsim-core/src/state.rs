//! Scenario snapshot — the observable state produced each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{DroneType, FollowState};
use crate::events::SimEvent;
use crate::types::SimTime;

/// Complete observable state after a tick. The realized agent count may
/// be below the requested total; the discrepancy is observable here, not
/// surfaced as an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioSnapshot {
    pub time: SimTime,
    /// Agent count requested by the last applied settings.
    pub requested: u32,
    /// Agents actually spawned by the last applied settings.
    pub spawned: u32,
    pub agents: Vec<AgentView>,
    /// Events emitted during this tick.
    pub events: Vec<SimEvent>,
}

/// One agent's visible state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentView {
    pub kind: DroneType,
    pub position: Vec3,
    pub altitude_target: f32,
    pub follow_state: FollowState,
    /// Whether the behavior currently holds steering authority.
    pub behavior_engaged: bool,
    pub behavior_completed: bool,
    pub alive: bool,
}
