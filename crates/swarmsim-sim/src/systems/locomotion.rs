//! Point-mass locomotion.
//!
//! Agents with a steering target move straight toward it at the body's
//! max speed; arrival within the body's tolerance is reported back
//! through the steering state. Agents with no target ease their
//! altitude toward the body's altitude target, which keeps loitering
//! drones at a believable height without touching their horizontal
//! position.

use glam::Vec3;
use hecs::World;

use swarmsim_core::components::DroneBody;
use swarmsim_core::constants::{ALTITUDE_DEADBAND, ALTITUDE_EASE_RATE, ARRIVE_TOLERANCE, DT};
use swarmsim_core::types::Pose;

use crate::agent::SteeringState;

pub fn run(world: &mut World) {
    for (_entity, (pose, body, steering)) in
        world.query_mut::<(&mut Pose, &DroneBody, &mut SteeringState)>()
    {
        if !body.alive {
            continue;
        }

        match steering.seek {
            Some(seek) => {
                let to = seek - pose.position;
                let dist = to.length();
                let step = body.max_speed * DT;
                if dist <= step {
                    pose.position = seek;
                } else {
                    let dir = to / dist;
                    pose.position += dir * step;
                    let heading = Vec3::new(dir.x, 0.0, dir.z);
                    if heading.length_squared() > 1e-6 {
                        pose.forward = heading.normalize();
                    }
                }
                steering.reached = dist <= ARRIVE_TOLERANCE.max(step);
            }
            None => {
                let error = body.altitude_target - pose.position.y;
                if error.abs() > ALTITUDE_DEADBAND {
                    pose.position.y += error * (ALTITUDE_EASE_RATE * DT).min(1.0);
                }
            }
        }
    }
}
