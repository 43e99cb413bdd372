//! Scenario spawner: turns applied settings into a wave of agents.
//!
//! The spawn loop walks the slot list in order, consuming one entry of
//! the pre-shuffled type pool per *attempt* — a failed attempt (no
//! compatible path, a bad path copy, a missing prototype) burns the
//! entry and logs a skip, so the realized count can fall short of the
//! request. Unassigned slots and empty catalogue entries are passed
//! over without consuming anything.

use glam::Vec3;
use hecs::{Entity, World};
use log::{info, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use swarmsim_behavior::attack::AttackBehavior;
use swarmsim_behavior::recon::ReconBehavior;
use swarmsim_behavior::Behavior;
use swarmsim_core::commands::ScenarioConfig;
use swarmsim_core::components::{DroneBody, DroneSpec, SpawnSlot};
use swarmsim_core::constants::{
    DEFAULT_ORBIT_ALTITUDE, DEFAULT_ORBIT_ANGULAR_SPEED, DEFAULT_ORBIT_RADIUS,
};
use swarmsim_core::enums::{BehaviorMode, DroneType, PathKind, SpawnSkipReason};
use swarmsim_core::events::SimEvent;
use swarmsim_core::interest::ObjectOfInterest;
use swarmsim_core::registry::TargetId;
use swarmsim_core::types::Pose;

use crate::agent::{Mission, SteeringState};
use crate::flight::FlightController;

/// Static scenario assets: spawn slots, objects of interest (with their
/// registered anchor targets), attack-target handles, and the drone
/// prototypes. Survives scenario clears.
#[derive(Default)]
pub struct Catalogue {
    pub slots: Vec<Option<SpawnSlot>>,
    pub interest: Vec<Option<ObjectOfInterest>>,
    /// Anchor target handle per interest entry, for recon orbits.
    pub interest_anchors: Vec<Option<TargetId>>,
    /// Override targets attack missions may be assigned.
    pub attack_targets: Vec<TargetId>,
    pub copter: Option<DroneSpec>,
    pub wing: Option<DroneSpec>,
}

impl Catalogue {
    fn prototype(&self, kind: DroneType) -> Option<&DroneSpec> {
        match kind {
            DroneType::Copter => self.copter.as_ref(),
            DroneType::Wing => self.wing.as_ref(),
        }
    }
}

/// Which mission family a spawn attempt was resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedMission {
    Recon,
    Attack,
}

/// Spawn a scenario from already-clamped settings. Returns the realized
/// agent count; spawned entities are appended to `spawned`.
pub fn spawn_scenario(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    catalogue: &Catalogue,
    config: &ScenarioConfig,
    events: &mut Vec<SimEvent>,
    spawned: &mut Vec<Entity>,
) -> u32 {
    let total = config.total as usize;
    if total == 0 {
        return 0;
    }
    if catalogue.interest.iter().all(Option::is_none) {
        warn!("no objects of interest configured; nothing to spawn");
        return 0;
    }

    let pool = build_spawn_type_pool(rng, total, config.copters as usize, config.wings as usize);
    let mut last_was_recon = false;
    let mut consumed = 0usize;
    let mut realized = 0u32;

    for (slot_idx, slot) in catalogue.slots.iter().enumerate() {
        if consumed >= total {
            break;
        }
        // Unassigned slot: pass over without consuming a pool entry.
        let Some(slot) = slot else { continue };

        let oi_idx = rng.gen_range(0..catalogue.interest.len());
        // Empty interest entry: likewise not consumed.
        let Some(interest) = catalogue.interest[oi_idx].as_ref() else {
            continue;
        };

        let drone_type = pool[consumed];
        consumed += 1;
        let mission = resolve_mission(config.mode, &mut last_was_recon);
        let path_kind = match mission {
            ResolvedMission::Recon => PathKind::Recon,
            ResolvedMission::Attack => {
                if rng.gen_bool(0.5) {
                    PathKind::AttackDrop
                } else {
                    PathKind::AttackKamikaze
                }
            }
        };

        let templates = interest.paths_for(path_kind, drone_type);
        let Some(template) = templates.choose(rng) else {
            warn!(
                "slot {slot_idx}: '{}' has no {path_kind:?} path for {drone_type:?}; skipping",
                interest.name
            );
            events.push(SimEvent::SpawnSkipped {
                slot: slot_idx,
                reason: SpawnSkipReason::NoCompatiblePath,
            });
            continue;
        };

        let origin = interest.anchor.unwrap_or(Vec3::ZERO);
        let path = template.instantiate(origin, slot.yaw);
        if path.valid_waypoint_count() == 0 {
            warn!("slot {slot_idx}: path copy from '{}' has no waypoints; skipping", interest.name);
            events.push(SimEvent::SpawnSkipped {
                slot: slot_idx,
                reason: SpawnSkipReason::InvalidPathCopy,
            });
            continue;
        }

        let Some(spec) = catalogue.prototype(drone_type) else {
            warn!("slot {slot_idx}: no prototype registered for {drone_type:?}; skipping");
            events.push(SimEvent::SpawnSkipped {
                slot: slot_idx,
                reason: SpawnSkipReason::MissingPrototype,
            });
            continue;
        };

        let exit = interest.exit_points.choose(rng).copied();
        let (behavior, target) = match mission {
            ResolvedMission::Recon => {
                let behavior = Behavior::Recon(ReconBehavior::new(
                    rng,
                    DEFAULT_ORBIT_RADIUS,
                    DEFAULT_ORBIT_ALTITUDE,
                    DEFAULT_ORBIT_ANGULAR_SPEED,
                ));
                (behavior, catalogue.interest_anchors[oi_idx])
            }
            ResolvedMission::Attack => {
                let kamikaze = path_kind == PathKind::AttackKamikaze;
                let behavior = Behavior::Attack(AttackBehavior::new(kamikaze, exit));
                let target = catalogue
                    .attack_targets
                    .choose(rng)
                    .copied()
                    .or(catalogue.interest_anchors[oi_idx]);
                (behavior, target)
            }
        };

        let pose = Pose::facing_yaw(slot.position, slot.yaw);
        let mut steering = SteeringState::default();
        let mut controller = FlightController::default();
        let is_attack = mission == ResolvedMission::Attack;
        controller.start_with_path(path, is_attack, exit, &mut steering);

        let entity = world.spawn((
            DroneBody::from_spec(spec),
            pose,
            steering,
            controller,
            Mission::new(behavior, target),
        ));
        spawned.push(entity);
        events.push(SimEvent::DroneSpawned {
            slot: slot_idx,
            kind: drone_type,
        });
        info!("slot {slot_idx}: spawned {drone_type:?} on a {path_kind:?} path to '{}'", interest.name);
        realized += 1;
    }

    info!("scenario spawn complete: {realized}/{total} agents");
    realized
}

/// Build the shuffled drone-type pool for a spawn wave.
///
/// Single-type requests fill the whole pool with that type; mixed
/// requests shuffle the exact composition, and any shortfall against
/// `total` is padded with copters so every attempt has a type.
pub fn build_spawn_type_pool(
    rng: &mut ChaCha8Rng,
    total: usize,
    copters: usize,
    wings: usize,
) -> Vec<DroneType> {
    if total == 0 {
        return Vec::new();
    }
    if copters == 0 && wings > 0 {
        return vec![DroneType::Wing; total];
    }
    if wings == 0 && copters > 0 {
        return vec![DroneType::Copter; total];
    }

    let mut pool = Vec::with_capacity(total);
    pool.extend(std::iter::repeat(DroneType::Copter).take(copters));
    pool.extend(std::iter::repeat(DroneType::Wing).take(wings));
    pool.shuffle(rng);
    while pool.len() < total {
        pool.push(DroneType::Copter);
    }
    pool
}

/// Resolve the mission family for the next spawn attempt. Alternating
/// mode flips strictly per attempt, starting with recon.
pub fn resolve_mission(mode: BehaviorMode, last_was_recon: &mut bool) -> ResolvedMission {
    match mode {
        BehaviorMode::AllRecon => ResolvedMission::Recon,
        BehaviorMode::AllAttack => ResolvedMission::Attack,
        BehaviorMode::Alternating => {
            if *last_was_recon {
                *last_was_recon = false;
                ResolvedMission::Attack
            } else {
                *last_was_recon = true;
                ResolvedMission::Recon
            }
        }
    }
}
