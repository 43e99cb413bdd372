//! Built-in demo catalogue: a small airfield raid layout with one
//! anchored compound, mixed path pools for both airframes, and a ring
//! of spawn slots.

use glam::Vec3;

use swarmsim_core::components::SpawnSlot;
use swarmsim_core::enums::{DroneType, PathKind, WaypointTrigger};
use swarmsim_core::interest::ObjectOfInterest;
use swarmsim_core::path::{FlightPath, Waypoint};
use swarmsim_sim::EngineConfig;

pub fn engine_config(seed: u64) -> EngineConfig {
    EngineConfig {
        seed,
        slots: spawn_slots(),
        interest: vec![Some(compound())],
        attack_targets: vec![Vec3::new(120.0, 0.0, 40.0), Vec3::new(110.0, 0.0, -30.0)],
        ..Default::default()
    }
}

fn spawn_slots() -> Vec<Option<SpawnSlot>> {
    let positions = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 40.0),
        Vec3::new(0.0, 0.0, -40.0),
        Vec3::new(-30.0, 0.0, 20.0),
        Vec3::new(-30.0, 0.0, -20.0),
        Vec3::new(-60.0, 0.0, 0.0),
    ];
    positions
        .iter()
        .map(|&position| Some(SpawnSlot { position, yaw: 0.0 }))
        .collect()
}

/// One objective with templates for every (path kind, airframe)
/// combination, in local space relative to the anchor.
fn compound() -> ObjectOfInterest {
    let ingress = FlightPath::new(
        PathKind::Recon,
        vec![
            Some(Waypoint::at(Vec3::new(-60.0, 12.0, 10.0))),
            Some(Waypoint::at(Vec3::new(-30.0, 15.0, -5.0))),
            Some(Waypoint::at(Vec3::new(-15.0, 15.0, 0.0))),
        ],
    );
    let strike = FlightPath::new(
        PathKind::AttackDrop,
        vec![
            Some(Waypoint::at(Vec3::new(-70.0, 14.0, -15.0))),
            Some(Waypoint::at(Vec3::new(-35.0, 14.0, -5.0))),
            Some(Waypoint::with_trigger(
                Vec3::new(-8.0, 12.0, 0.0),
                WaypointTrigger::Attack,
            )),
        ],
    );
    let dive = FlightPath::new(
        PathKind::AttackKamikaze,
        vec![
            Some(Waypoint::at(Vec3::new(-70.0, 14.0, 15.0))),
            Some(Waypoint::at(Vec3::new(-30.0, 12.0, 5.0))),
            Some(Waypoint::with_trigger(
                Vec3::new(-12.0, 8.0, 0.0),
                WaypointTrigger::Kamikaze,
            )),
        ],
    );

    let mut oi = ObjectOfInterest {
        name: "north-compound".into(),
        anchor: Some(Vec3::new(100.0, 0.0, 0.0)),
        exit_points: vec![
            Vec3::new(100.0, 15.0, 260.0),
            Vec3::new(100.0, 15.0, -260.0),
        ],
        ..Default::default()
    };
    for kind in [DroneType::Copter, DroneType::Wing] {
        oi.paths_for_mut(PathKind::Recon, kind).push(ingress.clone());
        oi.paths_for_mut(PathKind::AttackDrop, kind).push(strike.clone());
        oi.paths_for_mut(PathKind::AttackKamikaze, kind).push(dive.clone());
    }
    oi
}
