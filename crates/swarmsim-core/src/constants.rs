//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Waypoint following ---

/// Distance at which the proximity detector reports "in zone" for the
/// current waypoint (meters).
pub const WAYPOINT_ARRIVE_DISTANCE: f32 = 2.0;

/// Distance the exit point is projected out from the agent (meters).
pub const EXIT_PROJECT_DISTANCE: f32 = 200.0;

/// Delay from exit-seek start to agent teardown (seconds).
pub const EXIT_DESPAWN_SECS: f32 = 25.0;

// --- Behavior arrival tolerances ---

/// Euclidean arrival tolerance for behavior-level checkpoints
/// (drop point, exit point), in meters.
pub const ARRIVE_TOLERANCE: f32 = 1.5;

/// Margin added to the collision radius for the kamikaze contact check.
pub const KAMIKAZE_CONTACT_MARGIN: f32 = 1.0;

/// Height above the target at which the drop approach point sits (meters).
pub const DROP_HEIGHT_OFFSET: f32 = 2.0;

// --- Recon orbit ---

/// Default orbit radius (meters).
pub const DEFAULT_ORBIT_RADIUS: f32 = 10.0;

/// Default orbit altitude (meters).
pub const DEFAULT_ORBIT_ALTITUDE: f32 = 15.0;

/// Default orbit angular speed (degrees per second).
pub const DEFAULT_ORBIT_ANGULAR_SPEED: f32 = 30.0;

/// Orbit radius is clamped to at least this value (meters).
pub const MIN_ORBIT_RADIUS: f32 = 1.0;

/// Per-tick probability of re-targeting the cruise altitude with jitter.
pub const ALTITUDE_JITTER_CHANCE: f32 = 0.01;

// --- Drone prototype defaults ---

/// Copter maximum speed (m/s).
pub const COPTER_MAX_SPEED: f32 = 8.0;

/// Wing maximum speed (m/s).
pub const WING_MAX_SPEED: f32 = 12.0;

/// Default cruise altitude (meters).
pub const CRUISE_ALTITUDE: f32 = 10.0;

/// Altitude jitter half-range (meters).
pub const ALTITUDE_JITTER_RANGE: f32 = 2.0;

/// Drone collision radius (meters).
pub const COLLISION_RADIUS: f32 = 0.5;

/// Smoothing rate for altitude easing toward the altitude target (1/s).
pub const ALTITUDE_EASE_RATE: f32 = 1.5;

/// Altitude error below which no easing is applied (meters).
pub const ALTITUDE_DEADBAND: f32 = 0.05;
