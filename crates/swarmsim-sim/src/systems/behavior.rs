//! Ticks engaged behaviors with their resolved live-target positions.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use swarmsim_behavior::BehaviorCtx;
use swarmsim_core::components::DroneBody;
use swarmsim_core::constants::DT;
use swarmsim_core::events::SimEvent;
use swarmsim_core::registry::TargetRegistry;
use swarmsim_core::types::Pose;

use crate::agent::{Mission, SteeringState};

pub fn run(
    world: &mut World,
    registry: &TargetRegistry,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<SimEvent>,
) {
    for (_entity, (pose, body, steering, mission)) in
        world.query_mut::<(&Pose, &mut DroneBody, &mut SteeringState, &mut Mission)>()
    {
        if !body.alive || !mission.engaged {
            continue;
        }
        let target = mission.target.and_then(|id| registry.position(id));
        let mut ctx = BehaviorCtx {
            dt: DT,
            position: pose.position,
            target,
            body,
            steering,
            rng: &mut *rng,
            events: &mut *events,
        };
        mission.behavior.tick(&mut ctx);
    }
}
