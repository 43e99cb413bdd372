//! Live-target registry.
//!
//! Behaviors hold opaque target ids rather than references; the registry
//! resolves an id to its current position each tick. Removing a target
//! makes it resolve to `None`, which behaviors treat as the defined
//! "target lost" condition (safe abort, not an error).

use std::collections::HashMap;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Opaque handle to a live target position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetId(pub u32);

/// Id-keyed table of live target positions.
#[derive(Debug, Clone, Default)]
pub struct TargetRegistry {
    next_id: u32,
    positions: HashMap<TargetId, Vec3>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new target and return its handle.
    pub fn register(&mut self, position: Vec3) -> TargetId {
        let id = TargetId(self.next_id);
        self.next_id += 1;
        self.positions.insert(id, position);
        id
    }

    /// Current position of a target, or `None` if it no longer exists.
    pub fn position(&self, id: TargetId) -> Option<Vec3> {
        self.positions.get(&id).copied()
    }

    /// Move a live target. No-op for a removed id.
    pub fn move_to(&mut self, id: TargetId, position: Vec3) {
        if let Some(p) = self.positions.get_mut(&id) {
            *p = position;
        }
    }

    /// Remove a target. Behaviors referencing it abort safely.
    pub fn remove(&mut self, id: TargetId) {
        self.positions.remove(&id);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
