//! Waypoint-following flight controller.
//!
//! Drives an agent along a flight path: Idle → Following → Complete.
//! Arrival is reported by an external proximity detector — the
//! controller itself never polls. Waypoint triggers are fired exactly
//! once per waypoint and returned to the caller for routing to the
//! agent's behavior. After completion of a non-handed-off mission the
//! controller seeks an exit point and schedules agent teardown.

use glam::Vec3;
use log::{debug, warn};

use swarmsim_core::constants::{EXIT_DESPAWN_SECS, EXIT_PROJECT_DISTANCE, TICK_RATE};
use swarmsim_core::enums::{FollowState, WaypointTrigger};
use swarmsim_core::path::{FlightPath, Waypoint};
use swarmsim_core::steering::Steering;
use swarmsim_core::types::Pose;

#[derive(Debug, Clone, Default)]
pub struct FlightController {
    path: Option<FlightPath>,
    state: FollowState,
    current_idx: usize,
    attack: bool,
    exit_override: Option<Vec3>,
    trigger_fired: bool,
    completion_signaled: bool,
    exit_issued: bool,
    exit_deadline_tick: Option<u64>,
}

impl FlightController {
    /// Begin following a path. Logs and no-ops on an empty path,
    /// leaving any previous assignment untouched. A path whose slots
    /// are all empty completes immediately without any arrival signal.
    pub fn start_with_path(
        &mut self,
        path: FlightPath,
        attack: bool,
        exit_override: Option<Vec3>,
        steering: &mut dyn Steering,
    ) -> bool {
        if path.waypoints.is_empty() {
            warn!("ignoring flight path with no waypoints");
            return false;
        }

        self.exit_override = exit_override.or(path.exit_point);
        self.path = Some(path);
        self.attack = attack;
        self.current_idx = 0;
        self.trigger_fired = false;
        self.completion_signaled = false;
        self.exit_issued = false;
        self.exit_deadline_tick = None;
        self.state = FollowState::Following;
        self.seek_next_valid(steering);
        true
    }

    /// Detection callback, invoked with the external detector's verdict
    /// for the current waypoint. A negative verdict is a no-op. On zone
    /// entry the waypoint's trigger is fired exactly once and returned
    /// for behavior routing, then the waypoint index advances. A lost
    /// path makes this an idempotent no-op.
    pub fn on_detected_current_point(
        &mut self,
        in_zone: bool,
        steering: &mut dyn Steering,
    ) -> Option<WaypointTrigger> {
        if !in_zone || self.state != FollowState::Following {
            return None;
        }
        let wp = self.current_waypoint()?;

        let mut fired = None;
        if !self.trigger_fired {
            if let Some(trigger) = wp.trigger {
                self.trigger_fired = true;
                fired = Some(trigger);
            }
        }

        self.current_idx += 1;
        self.trigger_fired = false;
        self.seek_next_valid(steering);
        fired
    }

    /// The waypoint currently sought, if following.
    pub fn current_waypoint(&self) -> Option<Waypoint> {
        if self.state != FollowState::Following {
            return None;
        }
        self.path
            .as_ref()
            .and_then(|p| p.waypoints.get(self.current_idx))
            .copied()
            .flatten()
    }

    /// True exactly once, the first time it is polled after the path
    /// completed.
    pub fn poll_completion(&mut self) -> bool {
        if self.state == FollowState::Complete && !self.completion_signaled {
            self.completion_signaled = true;
            true
        } else {
            false
        }
    }

    /// Seek the exit point and schedule teardown. Called when a
    /// non-attack path completes with no behavior taking over.
    /// Single-shot.
    pub fn fly_exit(&mut self, pose: &Pose, steering: &mut dyn Steering, now_tick: u64) {
        if self.exit_issued {
            return;
        }
        let exit = self
            .exit_override
            .unwrap_or_else(|| self.compute_exit_point(pose));
        debug!("exit seek to {exit}");
        steering.seek_to(exit);
        self.exit_issued = true;
        self.exit_deadline_tick =
            Some(now_tick + (EXIT_DESPAWN_SECS * TICK_RATE as f32) as u64);
    }

    /// Whether the scheduled teardown deadline has passed.
    pub fn exit_deadline_passed(&self, now_tick: u64) -> bool {
        self.exit_deadline_tick
            .is_some_and(|deadline| now_tick >= deadline)
    }

    /// Drop the path reference. The controller stops advancing until a
    /// new `start_with_path`.
    pub fn clear_path(&mut self) {
        self.path = None;
    }

    pub fn state(&self) -> FollowState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.current_idx
    }

    pub fn is_attack(&self) -> bool {
        self.attack
    }

    /// Advance past empty waypoint slots and seek the next assigned
    /// waypoint; transition to Complete when the path is exhausted.
    /// Bounded by path length — an all-empty path terminates here.
    fn seek_next_valid(&mut self, steering: &mut dyn Steering) {
        let len = self.path.as_ref().map_or(0, |p| p.waypoints.len());
        while self.current_idx < len {
            let slot = self
                .path
                .as_ref()
                .and_then(|p| p.waypoints[self.current_idx]);
            match slot {
                Some(wp) => {
                    debug!("seeking waypoint {} at {}", self.current_idx, wp.position);
                    steering.seek_to(wp.position);
                    return;
                }
                None => self.current_idx += 1,
            }
        }
        self.state = FollowState::Complete;
    }

    /// Exit point for egress: the agent's position projected out along
    /// the direction away from the path centroid, falling back to the
    /// forward heading when the geometry is degenerate.
    fn compute_exit_point(&self, pose: &Pose) -> Vec3 {
        let centroid = self.path.as_ref().and_then(|p| p.centroid());
        let dir = match centroid {
            Some(center) => {
                let away = pose.position - center;
                if away.length_squared() < 1e-3 {
                    pose.forward
                } else {
                    away.normalize()
                }
            }
            None => pose.forward,
        };
        pose.position + dir * EXIT_PROJECT_DISTANCE
    }
}
