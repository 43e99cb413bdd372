//! Per-agent simulation components built on the core vocabulary.

use glam::Vec3;

use swarmsim_behavior::Behavior;
use swarmsim_core::registry::TargetId;
use swarmsim_core::steering::{ProximityDetector, Steering};

/// The agent's mission: a behavior, the live-target handle it acts on,
/// and whether the behavior currently holds steering authority.
///
/// While `engaged` is false the flight controller steers; once a path
/// trigger fires or the path completes with the behavior still pending,
/// the behavior engages and keeps authority for the rest of its life.
pub struct Mission {
    pub behavior: Behavior,
    pub target: Option<TargetId>,
    pub engaged: bool,
}

impl Mission {
    pub fn new(behavior: Behavior, target: Option<TargetId>) -> Self {
        Self {
            behavior,
            target,
            engaged: false,
        }
    }

    /// Replace the behavior. The old one is aborted first, so its
    /// steering target is released before the new mission starts.
    pub fn attach(&mut self, behavior: Behavior, steering: &mut dyn Steering) {
        self.behavior.on_abort(steering);
        self.behavior = behavior;
        self.engaged = false;
    }
}

/// Steering state: the point currently sought, if any. Locomotion moves
/// the agent toward it and reports arrival back through `reached`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SteeringState {
    pub seek: Option<Vec3>,
    pub reached: bool,
}

impl Steering for SteeringState {
    fn seek_to(&mut self, point: Vec3) {
        self.seek = Some(point);
        self.reached = false;
    }

    fn clear_target(&mut self) {
        self.seek = None;
        self.reached = false;
    }

    fn destination_reached(&self) -> bool {
        self.reached
    }
}

/// Sphere-of-influence arrival detector.
#[derive(Debug, Clone, Copy)]
pub struct RadiusDetector {
    pub radius: f32,
}

impl RadiusDetector {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

impl ProximityDetector for RadiusDetector {
    fn in_zone(&self, agent: Vec3, waypoint: Vec3) -> bool {
        agent.distance_squared(waypoint) <= self.radius * self.radius
    }
}
