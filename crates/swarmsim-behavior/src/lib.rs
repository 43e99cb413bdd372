//! Drone behavior engine for SWARMSIM.
//!
//! Polymorphic mission strategies attached to agents: reconnaissance
//! orbits and attack runs (bombing or kamikaze). Behaviors are plain
//! data with explicit transition functions — no ECS dependency; the
//! simulation loop ticks them through a context struct.

pub mod attack;
pub mod recon;

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use swarmsim_core::components::DroneBody;
use swarmsim_core::enums::WaypointTrigger;
use swarmsim_core::events::SimEvent;
use swarmsim_core::steering::Steering;

use attack::AttackBehavior;
use recon::ReconBehavior;

/// Per-tick input to a behavior: elapsed time, the agent's state, the
/// resolved live target position (if the target still exists), and the
/// collaborators the behavior commands.
pub struct BehaviorCtx<'a> {
    pub dt: f32,
    pub position: Vec3,
    /// Live target position, `None` once the target reference is lost.
    pub target: Option<Vec3>,
    pub body: &'a mut DroneBody,
    pub steering: &'a mut dyn Steering,
    pub rng: &'a mut ChaCha8Rng,
    pub events: &'a mut Vec<SimEvent>,
}

/// A mission strategy. An agent owns at most one at a time; attaching a
/// new one first aborts the old.
#[derive(Debug, Clone)]
pub enum Behavior {
    Recon(ReconBehavior),
    Attack(AttackBehavior),
}

impl Behavior {
    /// One-time setup, called before the mission is marked active.
    pub fn init(&mut self, ctx: &mut BehaviorCtx<'_>) {
        match self {
            Behavior::Recon(b) => b.init(ctx),
            Behavior::Attack(b) => b.init(ctx),
        }
    }

    /// Advance the mission by `ctx.dt`. No-op once completed.
    pub fn tick(&mut self, ctx: &mut BehaviorCtx<'_>) {
        match self {
            Behavior::Recon(b) => b.tick(ctx),
            Behavior::Attack(b) => b.tick(ctx),
        }
    }

    pub fn is_completed(&self) -> bool {
        match self {
            Behavior::Recon(b) => b.is_completed(),
            Behavior::Attack(b) => b.is_completed(),
        }
    }

    /// Force-terminate the mission and release the steering target.
    /// Idempotent: a second call leaves the same observable state.
    pub fn on_abort(&mut self, steering: &mut dyn Steering) {
        match self {
            Behavior::Recon(b) => b.on_abort(steering),
            Behavior::Attack(b) => b.on_abort(steering),
        }
    }

    /// Waypoint-trigger hook routed from the flight controller:
    /// `Attack` instructs the bomb-drop hook, `Kamikaze` the
    /// kamikaze-activation hook. Recon behaviors ignore both.
    pub fn on_path_trigger(&mut self, trigger: WaypointTrigger, ctx: &mut BehaviorCtx<'_>) {
        match self {
            Behavior::Recon(_) => {}
            Behavior::Attack(b) => b.on_path_trigger(trigger, ctx),
        }
    }
}

/// Uniform jitter in `[-range, range)`, tolerating a zero range.
pub(crate) fn jitter(rng: &mut ChaCha8Rng, range: f32) -> f32 {
    if range > 0.0 {
        rng.gen_range(-range..range)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests;
