//! Objects of interest — spawn-relevant locations owning path pools.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{DroneType, PathKind};
use crate::path::FlightPath;

/// A named location owning flight-path template pools keyed by
/// (path kind, drone type), a list of exit points, and an optional
/// anchor position used when instantiating a path copy.
///
/// Pools may be empty; callers handle "no compatible path" as a skip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectOfInterest {
    pub name: String,
    /// Anchor the path copy is placed at. Falls back to the template's
    /// own origin when absent.
    pub anchor: Option<Vec3>,
    /// Points drones fly to after completing a mission here.
    pub exit_points: Vec<Vec3>,

    pub recon_paths_copter: Vec<FlightPath>,
    pub recon_paths_wing: Vec<FlightPath>,
    pub attack_drop_paths_copter: Vec<FlightPath>,
    pub attack_drop_paths_wing: Vec<FlightPath>,
    pub attack_kamikaze_paths_copter: Vec<FlightPath>,
    pub attack_kamikaze_paths_wing: Vec<FlightPath>,
}

impl ObjectOfInterest {
    /// The template pool for a (path kind, drone type) combination.
    pub fn paths_for(&self, kind: PathKind, drone_type: DroneType) -> &[FlightPath] {
        match (kind, drone_type) {
            (PathKind::Recon, DroneType::Copter) => &self.recon_paths_copter,
            (PathKind::Recon, DroneType::Wing) => &self.recon_paths_wing,
            (PathKind::AttackDrop, DroneType::Copter) => &self.attack_drop_paths_copter,
            (PathKind::AttackDrop, DroneType::Wing) => &self.attack_drop_paths_wing,
            (PathKind::AttackKamikaze, DroneType::Copter) => &self.attack_kamikaze_paths_copter,
            (PathKind::AttackKamikaze, DroneType::Wing) => &self.attack_kamikaze_paths_wing,
        }
    }

    /// Mutable pool accessor, used when assembling a catalogue.
    pub fn paths_for_mut(&mut self, kind: PathKind, drone_type: DroneType) -> &mut Vec<FlightPath> {
        match (kind, drone_type) {
            (PathKind::Recon, DroneType::Copter) => &mut self.recon_paths_copter,
            (PathKind::Recon, DroneType::Wing) => &mut self.recon_paths_wing,
            (PathKind::AttackDrop, DroneType::Copter) => &mut self.attack_drop_paths_copter,
            (PathKind::AttackDrop, DroneType::Wing) => &mut self.attack_drop_paths_wing,
            (PathKind::AttackKamikaze, DroneType::Copter) => &mut self.attack_kamikaze_paths_copter,
            (PathKind::AttackKamikaze, DroneType::Wing) => &mut self.attack_kamikaze_paths_wing,
        }
    }
}
