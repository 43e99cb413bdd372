//! Reconnaissance orbit behavior.
//!
//! Maintains a continuously advancing orbit angle around the target and
//! re-issues a seek command to the corresponding orbit point every tick.
//! This is continuous steering, not waypoint following. The orbit never
//! completes on its own — only `on_abort` ends it.

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use swarmsim_core::constants::{ALTITUDE_JITTER_CHANCE, MIN_ORBIT_RADIUS};
use swarmsim_core::steering::Steering;

use crate::{jitter, BehaviorCtx};

#[derive(Debug, Clone)]
pub struct ReconBehavior {
    radius: f32,
    altitude: f32,
    angular_speed_deg: f32,
    /// Current orbit angle in degrees.
    angle_deg: f32,
    completed: bool,
}

impl ReconBehavior {
    /// The starting angle is randomized so simultaneous orbits spread out.
    pub fn new(rng: &mut ChaCha8Rng, radius: f32, altitude: f32, angular_speed_deg: f32) -> Self {
        Self {
            radius: radius.max(MIN_ORBIT_RADIUS),
            altitude,
            angular_speed_deg,
            angle_deg: rng.gen_range(0.0..360.0),
            completed: false,
        }
    }

    pub fn init(&mut self, ctx: &mut BehaviorCtx<'_>) {
        ctx.body
            .set_altitude_target(self.altitude + jitter(ctx.rng, ctx.body.altitude_jitter_range));
        if let Some(center) = ctx.target {
            ctx.steering.seek_to(orbit_point(
                center,
                self.radius,
                ctx.body.altitude_target,
                self.angle_deg,
            ));
        }
    }

    pub fn tick(&mut self, ctx: &mut BehaviorCtx<'_>) {
        if self.completed {
            return;
        }
        // A lost target stalls the orbit; it does not end the mission.
        let Some(center) = ctx.target else {
            return;
        };

        self.angle_deg = (self.angle_deg + self.angular_speed_deg * ctx.dt).rem_euclid(360.0);
        // The commanded altitude follows the body's jittered target, so
        // the racetrack is not perfectly flat.
        ctx.steering.seek_to(orbit_point(
            center,
            self.radius,
            ctx.body.altitude_target,
            self.angle_deg,
        ));

        // Occasional altitude re-target, independent of the orbit math.
        if ctx.rng.gen::<f32>() < ALTITUDE_JITTER_CHANCE {
            ctx.body.set_altitude_target(
                self.altitude + jitter(ctx.rng, ctx.body.altitude_jitter_range),
            );
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn on_abort(&mut self, steering: &mut dyn Steering) {
        self.completed = true;
        steering.clear_target();
    }

    pub fn angle_deg(&self) -> f32 {
        self.angle_deg
    }
}

/// Cartesian orbit point for an angle in degrees. The angle is
/// normalized modulo 360 first, so angles a full turn apart map to the
/// identical point.
pub fn orbit_point(center: Vec3, radius: f32, altitude: f32, angle_deg: f32) -> Vec3 {
    let rad = angle_deg.rem_euclid(360.0).to_radians();
    Vec3::new(
        center.x + rad.cos() * radius,
        altitude,
        center.z + rad.sin() * radius,
    )
}
