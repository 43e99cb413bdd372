//! Per-tick simulation systems, run in a fixed order by the engine:
//! navigation (waypoint arrival, trigger routing, authority handoff),
//! behavior ticking, locomotion, cleanup, then snapshot assembly.

pub mod behavior;
pub mod cleanup;
pub mod locomotion;
pub mod navigation;
pub mod snapshot;
