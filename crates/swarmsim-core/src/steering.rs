//! Ports consumed by the core: steering and proximity detection.
//!
//! The core commands locomotion but never assumes a concrete model.
//! Both contracts are resolved at bind time — there is no runtime
//! capability probing.

use glam::Vec3;

/// Abstract locomotion capability attached to an agent.
pub trait Steering {
    /// Command the agent to seek a world-space point.
    fn seek_to(&mut self, point: Vec3);

    /// Release any outstanding seek command.
    fn clear_target(&mut self);

    /// Whether the last commanded destination has been reached.
    fn destination_reached(&self) -> bool;
}

/// External arrival detector. The flight controller does not poll this;
/// the simulation loop invokes the controller with the detector's verdict.
pub trait ProximityDetector {
    /// Whether the agent is inside the waypoint's arrival zone.
    fn in_zone(&self, agent: Vec3, waypoint: Vec3) -> bool;
}
