//! Attack behavior: kamikaze dive or bomb drop plus egress.
//!
//! The sub-mode is fixed at construction. Kamikaze tracks the live
//! target until contact and detonates once; drop flies to a point above
//! the target, releases once, then heads for the configured exit point.
//! Losing the target before the attack is a safe abort, not an error.

use glam::Vec3;
use log::debug;

use swarmsim_core::constants::{ARRIVE_TOLERANCE, DROP_HEIGHT_OFFSET, KAMIKAZE_CONTACT_MARGIN};
use swarmsim_core::enums::WaypointTrigger;
use swarmsim_core::events::SimEvent;
use swarmsim_core::steering::Steering;

use crate::{jitter, BehaviorCtx};

#[derive(Debug, Clone)]
pub struct AttackBehavior {
    kamikaze: bool,
    exit_point: Option<Vec3>,
    attacked: bool,
    completed: bool,
}

impl AttackBehavior {
    pub fn new(kamikaze: bool, exit_point: Option<Vec3>) -> Self {
        Self {
            kamikaze,
            exit_point,
            attacked: false,
            completed: false,
        }
    }

    pub fn init(&mut self, ctx: &mut BehaviorCtx<'_>) {
        let cruise = ctx.body.cruise_altitude;
        ctx.body
            .set_altitude_target(cruise + jitter(ctx.rng, ctx.body.altitude_jitter_range));
        // Initial approach: above the target at cruise altitude.
        if let Some(target) = ctx.target {
            ctx.steering.seek_to(target + Vec3::Y * cruise);
        }
    }

    pub fn tick(&mut self, ctx: &mut BehaviorCtx<'_>) {
        if self.completed {
            return;
        }

        if self.attacked {
            // Kamikaze already detonated; drop agents only watch for
            // exit arrival, with no further target tracking.
            if !self.kamikaze {
                if let Some(exit) = self.exit_point {
                    if ctx.position.distance(exit) < ARRIVE_TOLERANCE {
                        self.completed = true;
                        ctx.steering.clear_target();
                    }
                }
            }
            return;
        }

        let Some(target) = ctx.target else {
            debug!("attack target lost before attack; aborting mission");
            self.completed = true;
            ctx.steering.clear_target();
            return;
        };

        if self.kamikaze {
            let dist = ctx.position.distance(target);
            if dist <= ctx.body.collision_radius + KAMIKAZE_CONTACT_MARGIN {
                self.detonate(ctx);
            } else {
                // Re-seek every tick: tracks a moving target.
                ctx.steering.seek_to(target);
            }
        } else {
            let drop_point = target + Vec3::Y * DROP_HEIGHT_OFFSET;
            if ctx.position.distance(drop_point) < ARRIVE_TOLERANCE {
                self.release_ordnance(ctx);
            } else {
                ctx.steering.seek_to(drop_point);
            }
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn on_abort(&mut self, steering: &mut dyn Steering) {
        self.completed = true;
        steering.clear_target();
    }

    /// Path-trigger hooks. The bomb-drop hook performs the release
    /// immediately; the kamikaze-activation hook starts the terminal
    /// chase. Both are single-shot and ignore the mismatched sub-mode.
    pub fn on_path_trigger(&mut self, trigger: WaypointTrigger, ctx: &mut BehaviorCtx<'_>) {
        if self.completed || self.attacked {
            return;
        }
        match trigger {
            WaypointTrigger::Attack if !self.kamikaze => self.release_ordnance(ctx),
            WaypointTrigger::Kamikaze if self.kamikaze => {
                if let Some(target) = ctx.target {
                    ctx.steering.seek_to(target);
                }
            }
            _ => {}
        }
    }

    fn detonate(&mut self, ctx: &mut BehaviorCtx<'_>) {
        ctx.events.push(SimEvent::Detonation {
            position: ctx.position,
        });
        ctx.body.alive = false;
        self.attacked = true;
        self.completed = true;
        ctx.steering.clear_target();
    }

    fn release_ordnance(&mut self, ctx: &mut BehaviorCtx<'_>) {
        ctx.events.push(SimEvent::BombDropped {
            position: ctx.position,
        });
        self.attacked = true;
        match self.exit_point {
            Some(exit) => ctx.steering.seek_to(exit),
            None => {
                self.completed = true;
                ctx.steering.clear_target();
            }
        }
    }
}
