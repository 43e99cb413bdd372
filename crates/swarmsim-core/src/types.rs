//! Fundamental simulation types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f32 {
        1.0 / crate::constants::TICK_RATE as f32
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Agent position plus heading. The heading is the fallback direction for
/// exit-point computation when the path centroid is degenerate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    /// Unit forward vector in the horizontal plane.
    pub forward: Vec3,
}

impl Pose {
    pub fn new(position: Vec3, forward: Vec3) -> Self {
        Self { position, forward }
    }

    /// Pose facing a yaw angle (radians, 0 = +Z).
    pub fn facing_yaw(position: Vec3, yaw: f32) -> Self {
        Self {
            position,
            forward: Vec3::new(yaw.sin(), 0.0, yaw.cos()),
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::Z,
        }
    }
}
