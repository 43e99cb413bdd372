//! Scenario commands, queued and processed at the next tick boundary.
//!
//! Spawn and clear never interleave with per-agent ticking: `Apply`
//! fully clears the previous scenario before spawning the next one.

use serde::{Deserialize, Serialize};

use crate::enums::BehaviorMode;

/// Requested scenario composition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Requested total agent count.
    pub total: u32,
    /// Requested copter count.
    pub copters: u32,
    /// Requested wing count.
    pub wings: u32,
    /// Behavior-mix policy.
    pub mode: BehaviorMode,
}

impl ScenarioConfig {
    /// Clamp the request against the available spawn slots:
    /// total ≤ slots, copters ≤ total, wings ≤ total − copters.
    pub fn clamped(&self, slot_count: usize) -> ScenarioConfig {
        let total = self.total.min(slot_count as u32);
        let copters = self.copters.min(total);
        let wings = self.wings.min(total - copters);
        ScenarioConfig {
            total,
            copters,
            wings,
            mode: self.mode,
        }
    }
}

/// Commands accepted by the scenario engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScenarioCommand {
    /// Clear the previous scenario, then spawn a new one.
    Apply(ScenarioConfig),
    /// Tear down all spawned agents and path copies.
    Clear,
}
