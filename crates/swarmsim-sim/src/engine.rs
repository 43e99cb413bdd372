//! The scenario engine: world, clock, RNG, command queue, and the
//! fixed-order system schedule.
//!
//! All mutation funnels through `tick`. Commands are queued from
//! outside and processed at the next tick boundary, so spawning and
//! clearing never interleave with per-agent updates. Determinism: one
//! seeded RNG drives spawn-time and behavior randomness, so identical
//! seed + command sequence reproduces identical snapshots.

use std::collections::VecDeque;

use glam::Vec3;
use hecs::{Entity, World};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use swarmsim_core::commands::{ScenarioCommand, ScenarioConfig};
use swarmsim_core::components::{DroneSpec, SpawnSlot};
use swarmsim_core::events::SimEvent;
use swarmsim_core::interest::ObjectOfInterest;
use swarmsim_core::registry::{TargetId, TargetRegistry};
use swarmsim_core::state::ScenarioSnapshot;
use swarmsim_core::types::SimTime;

use crate::spawner::{self, Catalogue};
use crate::systems;

/// Static assets the engine is built from.
pub struct EngineConfig {
    pub seed: u64,
    pub slots: Vec<Option<SpawnSlot>>,
    pub interest: Vec<Option<ObjectOfInterest>>,
    /// World positions registered as override targets for attack runs.
    pub attack_targets: Vec<Vec3>,
    pub copter: Option<DroneSpec>,
    pub wing: Option<DroneSpec>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            slots: Vec::new(),
            interest: Vec::new(),
            attack_targets: Vec::new(),
            copter: Some(DroneSpec::copter()),
            wing: Some(DroneSpec::wing()),
        }
    }
}

pub struct ScenarioEngine {
    world: World,
    time: SimTime,
    rng: ChaCha8Rng,
    registry: TargetRegistry,
    catalogue: Catalogue,
    command_queue: VecDeque<ScenarioCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SimEvent>,
    spawned: Vec<Entity>,
    requested: u32,
    realized: u32,
}

impl ScenarioEngine {
    pub fn new(config: EngineConfig) -> Self {
        let mut registry = TargetRegistry::new();

        let interest_anchors = config
            .interest
            .iter()
            .map(|entry| {
                entry
                    .as_ref()
                    .and_then(|oi| oi.anchor)
                    .map(|anchor| registry.register(anchor))
            })
            .collect();
        let attack_targets = config
            .attack_targets
            .iter()
            .map(|&position| registry.register(position))
            .collect();

        let catalogue = Catalogue {
            slots: config.slots,
            interest: config.interest,
            interest_anchors,
            attack_targets,
            copter: config.copter,
            wing: config.wing,
        };

        Self {
            world: World::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            registry,
            catalogue,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::with_capacity(64),
            events: Vec::new(),
            spawned: Vec::new(),
            requested: 0,
            realized: 0,
        }
    }

    /// Queue a command for the next tick boundary.
    pub fn queue_command(&mut self, command: ScenarioCommand) {
        self.command_queue.push_back(command);
    }

    /// Convenience: queue an `Apply` with the given composition.
    pub fn apply_settings(&mut self, config: ScenarioConfig) {
        self.queue_command(ScenarioCommand::Apply(config));
    }

    /// Advance the simulation by one tick and return the snapshot.
    pub fn tick(&mut self) -> ScenarioSnapshot {
        self.process_commands();

        systems::navigation::run(
            &mut self.world,
            &self.registry,
            &mut self.rng,
            &mut self.events,
            self.time.tick,
        );
        systems::behavior::run(
            &mut self.world,
            &self.registry,
            &mut self.rng,
            &mut self.events,
        );
        systems::locomotion::run(&mut self.world);
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.spawned,
            self.time.tick,
        );

        self.time.advance();
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(&self.world, self.time, self.requested, self.realized, events)
    }

    /// Register a new attack target at runtime.
    pub fn add_attack_target(&mut self, position: Vec3) -> TargetId {
        let id = self.registry.register(position);
        self.catalogue.attack_targets.push(id);
        id
    }

    /// Move a live target; behaviors tracking it follow.
    pub fn move_target(&mut self, id: TargetId, position: Vec3) {
        self.registry.move_to(id, position);
    }

    /// Remove a live target; behaviors referencing it abort safely.
    pub fn remove_target(&mut self, id: TargetId) {
        self.registry.remove(id);
    }

    pub fn target_position(&self, id: TargetId) -> Option<Vec3> {
        self.registry.position(id)
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn agent_count(&self) -> usize {
        self.spawned.len()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            match command {
                ScenarioCommand::Apply(config) => {
                    self.clear_spawned();
                    let clamped = config.clamped(self.catalogue.slots.len());
                    self.requested = clamped.total;
                    self.realized = spawner::spawn_scenario(
                        &mut self.world,
                        &mut self.rng,
                        &self.catalogue,
                        &clamped,
                        &mut self.events,
                        &mut self.spawned,
                    );
                }
                ScenarioCommand::Clear => self.clear_spawned(),
            }
        }
    }

    /// Tear down every agent from the current scenario. Catalogue
    /// assets and registered targets survive.
    fn clear_spawned(&mut self) {
        self.requested = 0;
        self.realized = 0;
        if self.spawned.is_empty() {
            return;
        }
        info!("clearing {} spawned agents", self.spawned.len());
        for entity in self.spawned.drain(..) {
            let _ = self.world.despawn(entity);
        }
    }
}

#[cfg(test)]
impl ScenarioEngine {
    /// Spawn a single agent directly, bypassing the spawner. Test-only.
    pub(crate) fn spawn_test_agent(
        &mut self,
        body: swarmsim_core::components::DroneBody,
        pose: swarmsim_core::types::Pose,
        steering: crate::agent::SteeringState,
        controller: crate::flight::FlightController,
        mission: crate::agent::Mission,
    ) -> Entity {
        let entity = self
            .world
            .spawn((body, pose, steering, controller, mission));
        self.spawned.push(entity);
        self.realized += 1;
        entity
    }
}
