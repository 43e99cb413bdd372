//! Removes dead agents and agents whose exit deadline has passed.
//!
//! Despawn candidates are collected into a reused buffer first, then
//! removed, so the world is never mutated mid-query.

use hecs::{Entity, World};
use log::debug;

use swarmsim_core::components::DroneBody;

use crate::flight::FlightController;

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, spawned: &mut Vec<Entity>, now_tick: u64) {
    despawn_buffer.clear();

    for (entity, (body, controller)) in world.query_mut::<(&DroneBody, &FlightController)>() {
        if !body.alive || controller.exit_deadline_passed(now_tick) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        debug!("despawning agent {entity:?}");
        let _ = world.despawn(entity);
        spawned.retain(|e| *e != entity);
    }
}
