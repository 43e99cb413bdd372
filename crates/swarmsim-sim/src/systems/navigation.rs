//! Waypoint progression and steering-authority handoff.
//!
//! While the mission is not engaged, the flight controller steers: each
//! tick the proximity detector's verdict on the current waypoint is fed
//! to the controller. A fired waypoint trigger engages the behavior and
//! routes the trigger to it; a completed path engages a still-pending
//! behavior, or — on non-attack missions only — sends the agent to its
//! exit when the behavior is already done. Once engaged, the behavior
//! keeps authority and the controller is left alone.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use swarmsim_behavior::BehaviorCtx;
use swarmsim_core::components::DroneBody;
use swarmsim_core::constants::{DT, WAYPOINT_ARRIVE_DISTANCE};
use swarmsim_core::enums::FollowState;
use swarmsim_core::events::SimEvent;
use swarmsim_core::registry::TargetRegistry;
use swarmsim_core::steering::ProximityDetector;
use swarmsim_core::types::Pose;

use crate::agent::{Mission, RadiusDetector, SteeringState};
use crate::flight::FlightController;

pub fn run(
    world: &mut World,
    registry: &TargetRegistry,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<SimEvent>,
    now_tick: u64,
) {
    let detector = RadiusDetector::new(WAYPOINT_ARRIVE_DISTANCE);

    for (_entity, (pose, body, steering, controller, mission)) in world.query_mut::<(
        &Pose,
        &mut DroneBody,
        &mut SteeringState,
        &mut FlightController,
        &mut Mission,
    )>() {
        if !body.alive || mission.engaged {
            continue;
        }

        if controller.state() == FollowState::Following {
            if let Some(wp) = controller.current_waypoint() {
                let in_zone = detector.in_zone(pose.position, wp.position);
                if let Some(trigger) = controller.on_detected_current_point(in_zone, steering) {
                    let target = mission.target.and_then(|id| registry.position(id));
                    mission.engaged = true;
                    let mut ctx = BehaviorCtx {
                        dt: DT,
                        position: pose.position,
                        target,
                        body,
                        steering,
                        rng: &mut *rng,
                        events: &mut *events,
                    };
                    mission.behavior.init(&mut ctx);
                    mission.behavior.on_path_trigger(trigger, &mut ctx);
                    continue;
                }
            }
        }

        if controller.poll_completion() {
            if mission.behavior.is_completed() {
                // Attack missions never get the exit fallback; their
                // egress is the behavior's own business.
                if !controller.is_attack() {
                    controller.fly_exit(pose, steering, now_tick);
                }
            } else {
                let target = mission.target.and_then(|id| registry.position(id));
                mission.engaged = true;
                let mut ctx = BehaviorCtx {
                    dt: DT,
                    position: pose.position,
                    target,
                    body,
                    steering,
                    rng: &mut *rng,
                    events: &mut *events,
                };
                mission.behavior.init(&mut ctx);
            }
        }
    }
}
