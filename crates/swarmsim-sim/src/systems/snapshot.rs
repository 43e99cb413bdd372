//! Assembles the observable snapshot at the end of a tick.

use hecs::World;

use swarmsim_core::components::DroneBody;
use swarmsim_core::events::SimEvent;
use swarmsim_core::state::{AgentView, ScenarioSnapshot};
use swarmsim_core::types::{Pose, SimTime};

use crate::agent::Mission;
use crate::flight::FlightController;

pub fn build(
    world: &World,
    time: SimTime,
    requested: u32,
    spawned: u32,
    events: Vec<SimEvent>,
) -> ScenarioSnapshot {
    let mut agents = Vec::new();
    for (_entity, (pose, body, controller, mission)) in world
        .query::<(&Pose, &DroneBody, &FlightController, &Mission)>()
        .iter()
    {
        agents.push(AgentView {
            kind: body.kind,
            position: pose.position,
            altitude_target: body.altitude_target,
            follow_state: controller.state(),
            behavior_engaged: mission.engaged,
            behavior_completed: mission.behavior.is_completed(),
            alive: body.alive,
        });
    }

    ScenarioSnapshot {
        time,
        requested,
        spawned,
        agents,
        events,
    }
}
