//! Plain-data agent components.
//!
//! Components carry state only; logic lives in the behavior engine and
//! the simulation systems.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::DroneType;

/// Physical and identity state of a drone agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroneBody {
    pub kind: DroneType,
    /// Maximum speed (m/s).
    pub max_speed: f32,
    /// Nominal cruise altitude (meters).
    pub cruise_altitude: f32,
    /// Half-range of random altitude jitter (meters).
    pub altitude_jitter_range: f32,
    /// Collision radius (meters).
    pub collision_radius: f32,
    /// Current altitude target the locomotion eases toward.
    pub altitude_target: f32,
    /// Cleared on explosion.
    pub alive: bool,
}

impl DroneBody {
    pub fn from_spec(spec: &DroneSpec) -> Self {
        Self {
            kind: spec.kind,
            max_speed: spec.max_speed,
            cruise_altitude: spec.cruise_altitude,
            altitude_jitter_range: spec.altitude_jitter_range,
            collision_radius: spec.collision_radius,
            altitude_target: spec.cruise_altitude,
            alive: true,
        }
    }

    pub fn set_altitude_target(&mut self, altitude: f32) {
        self.altitude_target = altitude;
    }
}

/// Prototype parameters a drone instance is built from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DroneSpec {
    pub kind: DroneType,
    pub max_speed: f32,
    pub cruise_altitude: f32,
    pub altitude_jitter_range: f32,
    pub collision_radius: f32,
}

impl DroneSpec {
    pub fn copter() -> Self {
        Self {
            kind: DroneType::Copter,
            max_speed: COPTER_MAX_SPEED,
            cruise_altitude: CRUISE_ALTITUDE,
            altitude_jitter_range: ALTITUDE_JITTER_RANGE,
            collision_radius: COLLISION_RADIUS,
        }
    }

    pub fn wing() -> Self {
        Self {
            kind: DroneType::Wing,
            max_speed: WING_MAX_SPEED,
            cruise_altitude: CRUISE_ALTITUDE,
            altitude_jitter_range: ALTITUDE_JITTER_RANGE,
            collision_radius: COLLISION_RADIUS,
        }
    }
}

/// A spawn location. One slot produces at most one agent per scenario.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpawnSlot {
    pub position: Vec3,
    /// Orientation (radians about +Y, 0 = +Z). Path copies inherit it.
    pub yaw: f32,
}
