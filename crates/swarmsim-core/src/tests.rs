use glam::Vec3;

use crate::commands::ScenarioConfig;
use crate::enums::{BehaviorMode, DroneType, PathKind, WaypointTrigger};
use crate::events::SimEvent;
use crate::path::{FlightPath, Waypoint};
use crate::registry::TargetRegistry;
use crate::types::SimTime;

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

/// Verify the shared enums round-trip through serde_json.
#[test]
fn test_drone_type_serde() {
    for v in [DroneType::Copter, DroneType::Wing] {
        let json = serde_json::to_string(&v).unwrap();
        let back: DroneType = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_path_kind_serde() {
    for v in [
        PathKind::Recon,
        PathKind::AttackDrop,
        PathKind::AttackKamikaze,
    ] {
        let json = serde_json::to_string(&v).unwrap();
        let back: PathKind = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_sim_event_serde_tagged() {
    let event = SimEvent::BombDropped {
        position: Vec3::new(1.0, 2.0, 3.0),
    };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("\"type\":\"BombDropped\""));

    let back: SimEvent = serde_json::from_str(&json).unwrap();
    assert!(matches!(
        back,
        SimEvent::BombDropped { position } if close(position, Vec3::new(1.0, 2.0, 3.0))
    ));
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..crate::constants::TICK_RATE {
        time.advance();
    }
    assert_eq!(time.tick, crate::constants::TICK_RATE as u64);
    assert!((time.elapsed_secs - 1.0).abs() < 1e-4);
}

#[test]
fn test_path_centroid_skips_empty_slots() {
    let path = FlightPath::new(
        PathKind::Recon,
        vec![
            Some(Waypoint::at(Vec3::new(0.0, 5.0, 0.0))),
            None,
            Some(Waypoint::at(Vec3::new(10.0, 5.0, 0.0))),
        ],
    );
    assert_eq!(path.valid_waypoint_count(), 2);
    assert!(close(path.centroid().unwrap(), Vec3::new(5.0, 5.0, 0.0)));
}

#[test]
fn test_path_centroid_empty() {
    let path = FlightPath::new(PathKind::Recon, vec![None, None]);
    assert_eq!(path.valid_waypoint_count(), 0);
    assert!(path.centroid().is_none());
}

#[test]
fn test_path_instantiate_translates_and_rotates() {
    let template = FlightPath::new(
        PathKind::AttackDrop,
        vec![
            Some(Waypoint::at(Vec3::new(0.0, 5.0, 10.0))),
            None,
            Some(Waypoint::with_trigger(
                Vec3::new(0.0, 5.0, 20.0),
                WaypointTrigger::Attack,
            )),
        ],
    );

    let origin = Vec3::new(100.0, 0.0, 100.0);
    // Quarter turn: +Z maps to +X.
    let copy = template.instantiate(origin, std::f32::consts::FRAC_PI_2);

    assert_eq!(copy.waypoints.len(), template.waypoints.len());
    assert_eq!(copy.valid_waypoint_count(), 2);
    assert!(close(
        copy.waypoints[0].unwrap().position,
        Vec3::new(110.0, 5.0, 100.0)
    ));
    // Trigger tags survive instantiation.
    assert_eq!(
        copy.waypoints[2].unwrap().trigger,
        Some(WaypointTrigger::Attack)
    );
    // Template untouched.
    assert!(close(
        template.waypoints[0].unwrap().position,
        Vec3::new(0.0, 5.0, 10.0)
    ));
}

#[test]
fn test_config_clamping() {
    let config = ScenarioConfig {
        total: 10,
        copters: 8,
        wings: 8,
        mode: BehaviorMode::Alternating,
    };
    // 4 slots available: total clamps to 4, copters to 4, wings to 0.
    let clamped = config.clamped(4);
    assert_eq!(clamped.total, 4);
    assert_eq!(clamped.copters, 4);
    assert_eq!(clamped.wings, 0);

    // Plenty of slots: counts pass through.
    let loose = config.clamped(32);
    assert_eq!(loose.total, 10);
    assert_eq!(loose.copters, 8);
    assert_eq!(loose.wings, 2);
}

#[test]
fn test_registry_remove_resolves_none() {
    let mut registry = TargetRegistry::new();
    let id = registry.register(Vec3::new(1.0, 2.0, 3.0));
    assert!(close(registry.position(id).unwrap(), Vec3::new(1.0, 2.0, 3.0)));

    registry.move_to(id, Vec3::new(4.0, 5.0, 6.0));
    assert!(close(registry.position(id).unwrap(), Vec3::new(4.0, 5.0, 6.0)));

    registry.remove(id);
    assert!(registry.position(id).is_none());
    // Removing again is harmless.
    registry.remove(id);
}
