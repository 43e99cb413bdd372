//! Flight path data model.
//!
//! A path is an ordered sequence of waypoint slots. Slots can be empty
//! (an unassigned waypoint); empty slots are skippable during flight,
//! never fatal. Templates live in object-of-interest pools and are
//! instantiated as fresh oriented copies per spawned agent.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{PathKind, WaypointTrigger};

/// A single waypoint: a position plus an optional trigger event fired
/// once when the agent is detected in the waypoint's zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub position: Vec3,
    pub trigger: Option<WaypointTrigger>,
}

impl Waypoint {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            trigger: None,
        }
    }

    pub fn with_trigger(position: Vec3, trigger: WaypointTrigger) -> Self {
        Self {
            position,
            trigger: Some(trigger),
        }
    }
}

/// An ordered waypoint sequence with a classification and an optional
/// designated exit point. Immutable during flight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightPath {
    pub kind: PathKind,
    /// Waypoint slots in traversal order. `None` entries are skipped.
    pub waypoints: Vec<Option<Waypoint>>,
    /// Optional designated exit point; when absent the flight controller
    /// computes one from the path geometry.
    pub exit_point: Option<Vec3>,
}

impl FlightPath {
    pub fn new(kind: PathKind, waypoints: Vec<Option<Waypoint>>) -> Self {
        Self {
            kind,
            waypoints,
            exit_point: None,
        }
    }

    /// Number of assigned (non-empty) waypoint slots.
    pub fn valid_waypoint_count(&self) -> usize {
        self.waypoints.iter().flatten().count()
    }

    /// Centroid of all assigned waypoints, or `None` if there are none.
    pub fn centroid(&self) -> Option<Vec3> {
        let mut sum = Vec3::ZERO;
        let mut count = 0u32;
        for wp in self.waypoints.iter().flatten() {
            sum += wp.position;
            count += 1;
        }
        (count > 0).then(|| sum / count as f32)
    }

    /// Instantiate a fresh world-space copy of this template: each
    /// waypoint is rotated about the vertical axis by `yaw` (radians)
    /// and translated to `origin`. The exit point, when present, is
    /// transformed identically. The template itself is never mutated.
    pub fn instantiate(&self, origin: Vec3, yaw: f32) -> FlightPath {
        let place = |p: Vec3| origin + rotate_yaw(p, yaw);
        FlightPath {
            kind: self.kind,
            waypoints: self
                .waypoints
                .iter()
                .map(|slot| {
                    slot.map(|wp| Waypoint {
                        position: place(wp.position),
                        trigger: wp.trigger,
                    })
                })
                .collect(),
            exit_point: self.exit_point.map(place),
        }
    }
}

/// Rotate a vector about the +Y axis by `yaw` radians.
fn rotate_yaw(v: Vec3, yaw: f32) -> Vec3 {
    let (sin, cos) = yaw.sin_cos();
    Vec3::new(v.x * cos + v.z * sin, v.y, -v.x * sin + v.z * cos)
}
