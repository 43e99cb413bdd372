use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use swarmsim_core::components::{DroneBody, DroneSpec};
use swarmsim_core::constants::*;
use swarmsim_core::enums::WaypointTrigger;
use swarmsim_core::events::SimEvent;
use swarmsim_core::steering::Steering;

use crate::attack::AttackBehavior;
use crate::recon::{orbit_point, ReconBehavior};
use crate::{Behavior, BehaviorCtx};

/// Steering mock that records every command.
#[derive(Debug, Default)]
struct MockSteering {
    seeks: Vec<Vec3>,
    clears: u32,
    reached: bool,
}

impl Steering for MockSteering {
    fn seek_to(&mut self, point: Vec3) {
        self.seeks.push(point);
    }

    fn clear_target(&mut self) {
        self.clears += 1;
    }

    fn destination_reached(&self) -> bool {
        self.reached
    }
}

/// Owns everything a behavior context borrows.
struct Rig {
    body: DroneBody,
    steering: MockSteering,
    rng: ChaCha8Rng,
    events: Vec<SimEvent>,
}

impl Rig {
    fn new() -> Self {
        Self {
            body: DroneBody::from_spec(&DroneSpec::copter()),
            steering: MockSteering::default(),
            rng: ChaCha8Rng::seed_from_u64(7),
            events: Vec::new(),
        }
    }

    fn ctx(&mut self, position: Vec3, target: Option<Vec3>) -> BehaviorCtx<'_> {
        BehaviorCtx {
            dt: DT,
            position,
            target,
            body: &mut self.body,
            steering: &mut self.steering,
            rng: &mut self.rng,
            events: &mut self.events,
        }
    }

    fn drops(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SimEvent::BombDropped { .. }))
            .count()
    }

    fn detonations(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SimEvent::Detonation { .. }))
            .count()
    }
}

// ---- Recon ----

#[test]
fn test_orbit_point_periodic() {
    let center = Vec3::new(50.0, 0.0, -20.0);
    for k in [-2i32, -1, 1, 3] {
        for angle in [0.0f32, 45.0, 133.7, 359.0] {
            let base = orbit_point(center, 12.0, 15.0, angle);
            let shifted = orbit_point(center, 12.0, 15.0, angle + 360.0 * k as f32);
            assert_eq!(base, shifted, "angle {angle} + {k} turns");
        }
    }
}

#[test]
fn test_recon_orbits_continuously_and_never_completes() {
    let mut rig = Rig::new();
    let center = Vec3::new(100.0, 0.0, 100.0);
    let mut recon = ReconBehavior::new(&mut rig.rng, 10.0, 15.0, 30.0);

    recon.init(&mut rig.ctx(Vec3::ZERO, Some(center)));
    let initial_seeks = rig.steering.seeks.len();
    assert_eq!(initial_seeks, 1, "init issues the first orbit seek");

    for _ in 0..600 {
        recon.tick(&mut rig.ctx(Vec3::ZERO, Some(center)));
    }
    assert!(!recon.is_completed());
    // One seek per tick, continuously.
    assert_eq!(rig.steering.seeks.len(), initial_seeks + 600);

    // Every commanded point lies on the orbit circle, at the orbit
    // altitude give or take the jitter half-range.
    for seek in &rig.steering.seeks {
        let horizontal = Vec3::new(seek.x - center.x, 0.0, seek.z - center.z);
        assert!((horizontal.length() - 10.0).abs() < 1e-3);
        assert!((seek.y - 15.0).abs() <= ALTITUDE_JITTER_RANGE + 1e-3);
    }
}

#[test]
fn test_recon_orbit_altitude_varies_over_time() {
    let mut rig = Rig::new();
    let center = Vec3::new(40.0, 0.0, 0.0);
    let mut recon = ReconBehavior::new(&mut rig.rng, 10.0, 15.0, 30.0);

    recon.init(&mut rig.ctx(Vec3::ZERO, Some(center)));
    for _ in 0..2000 {
        recon.tick(&mut rig.ctx(Vec3::ZERO, Some(center)));
    }

    let min_y = rig.steering.seeks.iter().map(|s| s.y).fold(f32::MAX, f32::min);
    let max_y = rig.steering.seeks.iter().map(|s| s.y).fold(f32::MIN, f32::max);
    assert!(
        max_y - min_y > 0.01,
        "orbit altitude never re-targeted: span {}",
        max_y - min_y
    );
}

#[test]
fn test_recon_angle_advances_with_dt() {
    let mut rig = Rig::new();
    let mut recon = ReconBehavior::new(&mut rig.rng, 10.0, 15.0, 30.0);
    let start = recon.angle_deg();

    recon.tick(&mut rig.ctx(Vec3::ZERO, Some(Vec3::ZERO)));
    let advanced = (recon.angle_deg() - start).rem_euclid(360.0);
    assert!((advanced - 30.0 * DT).abs() < 1e-4);
}

#[test]
fn test_recon_lost_target_stalls_without_completing() {
    let mut rig = Rig::new();
    let mut recon = ReconBehavior::new(&mut rig.rng, 10.0, 15.0, 30.0);
    let angle = recon.angle_deg();

    for _ in 0..10 {
        recon.tick(&mut rig.ctx(Vec3::ZERO, None));
    }
    assert!(!recon.is_completed());
    assert_eq!(recon.angle_deg(), angle, "orbit frozen while target is lost");
    assert!(rig.steering.seeks.is_empty());
}

#[test]
fn test_recon_radius_clamped_to_minimum() {
    let mut rig = Rig::new();
    let mut recon = ReconBehavior::new(&mut rig.rng, 0.0, 15.0, 30.0);
    recon.tick(&mut rig.ctx(Vec3::ZERO, Some(Vec3::ZERO)));

    let seek = rig.steering.seeks[0];
    let horizontal = Vec3::new(seek.x, 0.0, seek.z);
    assert!((horizontal.length() - MIN_ORBIT_RADIUS).abs() < 1e-3);
}

// ---- Kamikaze attack ----

#[test]
fn test_kamikaze_chases_live_target_until_contact() {
    let mut rig = Rig::new();
    let mut attack = AttackBehavior::new(true, None);
    let agent = Vec3::new(0.0, 10.0, 0.0);

    // Far away: seek re-issued toward the live (moving) target each tick.
    let mut target = Vec3::new(0.0, 0.0, 50.0);
    for step in 0..5 {
        target.z += step as f32;
        attack.tick(&mut rig.ctx(agent, Some(target)));
        assert!(!attack.is_completed());
        assert_eq!(*rig.steering.seeks.last().unwrap(), target);
    }
    assert_eq!(rig.detonations(), 0);
}

#[test]
fn test_kamikaze_detonates_once_at_contact() {
    let mut rig = Rig::new();
    let mut attack = AttackBehavior::new(true, None);
    let agent = Vec3::new(0.0, 1.0, 0.0);
    let threshold = rig.body.collision_radius + KAMIKAZE_CONTACT_MARGIN;
    let target = agent + Vec3::Z * (threshold - 0.1);

    attack.tick(&mut rig.ctx(agent, Some(target)));
    assert_eq!(rig.detonations(), 1);
    assert!(attack.is_completed());
    assert!(!rig.body.alive);
    assert!(rig.steering.clears >= 1, "detonation releases steering");

    // Completed: further ticks are no-ops, no second explosion.
    for _ in 0..10 {
        attack.tick(&mut rig.ctx(agent, Some(target)));
    }
    assert_eq!(rig.detonations(), 1);
}

#[test]
fn test_kamikaze_just_outside_threshold_keeps_seeking() {
    let mut rig = Rig::new();
    let mut attack = AttackBehavior::new(true, None);
    let agent = Vec3::ZERO;
    let threshold = rig.body.collision_radius + KAMIKAZE_CONTACT_MARGIN;
    let target = Vec3::Z * (threshold + 0.01);

    attack.tick(&mut rig.ctx(agent, Some(target)));
    assert!(!attack.is_completed());
    assert_eq!(rig.detonations(), 0);
    assert_eq!(rig.steering.seeks, vec![target]);
}

// ---- Drop attack ----

#[test]
fn test_drop_releases_once_then_exits() {
    let mut rig = Rig::new();
    let exit = Vec3::new(200.0, 12.0, 0.0);
    let mut attack = AttackBehavior::new(false, Some(exit));
    let target = Vec3::new(0.0, 0.0, 100.0);
    let drop_point = target + Vec3::Y * DROP_HEIGHT_OFFSET;

    // On approach: seeks the drop point.
    attack.tick(&mut rig.ctx(Vec3::ZERO, Some(target)));
    assert_eq!(*rig.steering.seeks.last().unwrap(), drop_point);
    assert_eq!(rig.drops(), 0);

    // Within tolerance: exactly one release, then egress toward exit.
    attack.tick(&mut rig.ctx(drop_point + Vec3::X * 0.5, Some(target)));
    assert_eq!(rig.drops(), 1);
    assert!(!attack.is_completed());
    assert_eq!(*rig.steering.seeks.last().unwrap(), exit);

    // Loitering near the drop point never releases again.
    for _ in 0..20 {
        attack.tick(&mut rig.ctx(drop_point, Some(target)));
    }
    assert_eq!(rig.drops(), 1);

    // Reaching the exit completes the mission.
    attack.tick(&mut rig.ctx(exit + Vec3::X * 0.5, Some(target)));
    assert!(attack.is_completed());
}

#[test]
fn test_drop_without_exit_completes_immediately() {
    let mut rig = Rig::new();
    let mut attack = AttackBehavior::new(false, None);
    let target = Vec3::new(0.0, 0.0, 10.0);
    let drop_point = target + Vec3::Y * DROP_HEIGHT_OFFSET;

    attack.tick(&mut rig.ctx(drop_point, Some(target)));
    assert_eq!(rig.drops(), 1);
    assert!(attack.is_completed());
}

#[test]
fn test_attack_target_lost_is_safe_abort() {
    let mut rig = Rig::new();
    let mut attack = AttackBehavior::new(true, None);

    attack.tick(&mut rig.ctx(Vec3::ZERO, None));
    assert!(attack.is_completed());
    assert_eq!(rig.steering.clears, 1);
    assert!(rig.events.is_empty(), "safe abort has no side effects");
    assert!(rig.body.alive);
}

// ---- Common contract ----

#[test]
fn test_on_abort_idempotent() {
    let mut rig = Rig::new();
    let mut behavior = Behavior::Attack(AttackBehavior::new(false, Some(Vec3::X)));

    behavior.on_abort(&mut rig.steering);
    assert!(behavior.is_completed());
    let clears_after_first = rig.steering.clears;

    behavior.on_abort(&mut rig.steering);
    assert!(behavior.is_completed());
    // Second abort may clear again but observable state is unchanged.
    assert!(rig.steering.clears >= clears_after_first);
    assert!(rig.steering.seeks.is_empty());

    // Aborted behaviors ignore ticks.
    behavior.tick(&mut rig.ctx(Vec3::ZERO, Some(Vec3::Z)));
    assert!(rig.steering.seeks.is_empty());
    assert!(rig.events.is_empty());
}

#[test]
fn test_bomb_drop_hook_releases_once() {
    let mut rig = Rig::new();
    let exit = Vec3::new(50.0, 10.0, 0.0);
    let mut behavior = Behavior::Attack(AttackBehavior::new(false, Some(exit)));
    let target = Vec3::new(0.0, 0.0, 30.0);

    behavior.on_path_trigger(WaypointTrigger::Attack, &mut rig.ctx(Vec3::ZERO, Some(target)));
    assert_eq!(rig.drops(), 1);
    assert_eq!(*rig.steering.seeks.last().unwrap(), exit);

    // Repeat invocations stay single-shot.
    behavior.on_path_trigger(WaypointTrigger::Attack, &mut rig.ctx(Vec3::ZERO, Some(target)));
    assert_eq!(rig.drops(), 1);
}

#[test]
fn test_kamikaze_hook_starts_terminal_chase() {
    let mut rig = Rig::new();
    let mut behavior = Behavior::Attack(AttackBehavior::new(true, None));
    let target = Vec3::new(0.0, 0.0, 80.0);

    behavior.on_path_trigger(WaypointTrigger::Kamikaze, &mut rig.ctx(Vec3::ZERO, Some(target)));
    assert_eq!(rig.steering.seeks, vec![target]);

    // The mismatched hook is ignored.
    behavior.on_path_trigger(WaypointTrigger::Attack, &mut rig.ctx(Vec3::ZERO, Some(target)));
    assert_eq!(rig.drops(), 0);
}

#[test]
fn test_recon_ignores_path_triggers() {
    let mut rig = Rig::new();
    let recon = ReconBehavior::new(&mut rig.rng, 10.0, 15.0, 30.0);
    let mut behavior = Behavior::Recon(recon);

    behavior.on_path_trigger(WaypointTrigger::Kamikaze, &mut rig.ctx(Vec3::ZERO, Some(Vec3::Z)));
    assert!(rig.steering.seeks.is_empty());
    assert!(rig.events.is_empty());
}
