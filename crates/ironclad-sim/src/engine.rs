//! Arena engine — the headless heart of the harness.
//!
//! `ArenaEngine` owns the hecs world and every agent's controller, runs
//! all systems at the fixed tick rate, and produces `ArenaSnapshot`s.
//! Deterministic: same config (and seed) always yields the same match.

use std::collections::BTreeMap;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use ironclad_core::components::{BodyId, Health, Tank, Team};
use ironclad_core::enums::{ArenaPhase, BehaviorState};
use ironclad_core::events::BehaviorEvent;
use ironclad_core::state::ArenaSnapshot;
use ironclad_core::types::{Position, SimTime};

use ironclad_ai::controller::AgentController;

use crate::snapshot;
use crate::systems;
use crate::vehicle::ShellImpact;
use crate::world_setup;

/// Configuration for starting a new arena match.
#[derive(Debug, Clone)]
pub struct ArenaConfig {
    /// RNG seed for determinism. Same seed = same match.
    pub seed: u64,
    /// Number of teams.
    pub teams: u8,
    /// Tanks spawned per team.
    pub tanks_per_team: usize,
    /// Static obstacles scattered around the center.
    pub obstacles: usize,
    /// Power-ups placed at match start.
    pub pickups: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            teams: 2,
            tanks_per_team: 2,
            obstacles: 5,
            pickups: 3,
        }
    }
}

/// The arena engine. Owns the ECS world and all per-agent controllers.
pub struct ArenaEngine {
    world: World,
    time: SimTime,
    phase: ArenaPhase,
    rng: ChaCha8Rng,
    next_body_id: u32,
    controllers: BTreeMap<BodyId, AgentController>,
    events: Vec<BehaviorEvent>,
    impacts: Vec<ShellImpact>,
    despawn_buffer: Vec<hecs::Entity>,
}

impl ArenaEngine {
    /// Create an engine and set up the match per the config.
    pub fn new(config: ArenaConfig) -> Self {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut next_body_id = 0;

        let roster = world_setup::setup_arena(&mut world, &mut rng, &mut next_body_id, &config);

        let mut controllers = BTreeMap::new();
        for (idx, (body, team)) in roster.into_iter().enumerate() {
            // Every other tank screens from the standoff ring instead of
            // driving straight at its target.
            let initial = if idx % 2 == 0 {
                BehaviorState::Wander
            } else {
                BehaviorState::RangedWander
            };
            controllers.insert(body, AgentController::tank(body, team, initial));
        }

        Self {
            world,
            time: SimTime::default(),
            phase: ArenaPhase::Active,
            rng,
            next_body_id,
            controllers,
            events: Vec::new(),
            impacts: Vec::new(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Advance the arena by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> ArenaSnapshot {
        if self.phase == ArenaPhase::Active {
            self.run_systems();
            self.time.advance();

            if self.alive_team_count() <= 1 {
                self.phase = ArenaPhase::Decided;
            }
        }

        let events = std::mem::take(&mut self.events);
        snapshot::build(&self.world, &self.controllers, self.time, self.phase, events)
    }

    pub fn phase(&self) -> ArenaPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Look up one agent's controller.
    pub fn controller(&self, body: BodyId) -> Option<&AgentController> {
        self.controllers.get(&body)
    }

    /// Flag an agent stopped (or release it). A stopped agent makes no
    /// decisions and emits no commands.
    pub fn set_stopped(&mut self, body: BodyId, stopped: bool) {
        if let Some(controller) = self.controllers.get_mut(&body) {
            controller.set_stopped(stopped);
        }
    }

    /// Number of teams with at least one living tank.
    fn alive_team_count(&self) -> usize {
        let mut teams: Vec<u8> = Vec::new();
        let mut query = self.world.query::<(&Tank, &Team, &Health)>();
        for (_entity, (_tank, team, health)) in query.iter() {
            if !health.is_dead() && !teams.contains(&team.0) {
                teams.push(team.0);
            }
        }
        teams.len()
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Decisions (reads a frame-consistent stage, buffers impacts)
        systems::decision::run(
            &mut self.world,
            &mut self.controllers,
            &mut self.rng,
            self.time,
            &mut self.events,
            &mut self.impacts,
        );
        // 2. Shell impacts
        systems::ballistics::run(&mut self.world, &mut self.impacts, &mut self.events);
        // 3. Locomotion
        systems::locomotion::run(&mut self.world);
        // 4. Power-up claims
        systems::pickups::run(&mut self.world, &mut self.despawn_buffer, &mut self.events);
        // 5. Cleanup destroyed tanks
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 6. Drop controllers whose tank is gone
        let mut alive: Vec<BodyId> = Vec::new();
        {
            let mut query = self.world.query::<(&Tank, &BodyId)>();
            for (_entity, (_tank, body)) in query.iter() {
                alive.push(*body);
            }
        }
        self.controllers.retain(|body, _| alive.contains(body));
    }

    /// Spawn an extra tank mid-match (scenario scripting and tests).
    pub fn spawn_tank_at(&mut self, team: Team, position: Position, heading: f64) -> BodyId {
        let body = world_setup::spawn_tank(
            &mut self.world,
            &mut self.next_body_id,
            team,
            position,
            heading,
        );
        self.controllers
            .insert(body, AgentController::tank(body, team, BehaviorState::Wander));
        body
    }

    /// Spawn an extra power-up mid-match.
    pub fn spawn_pickup_at(&mut self, position: Position) -> BodyId {
        world_setup::spawn_pickup(&mut self.world, &mut self.next_body_id, position)
    }

    /// Zero a tank's health (external destruction, e.g. a scripted
    /// hazard). Cleanup despawns it at the end of the next tick.
    pub fn kill_tank(&mut self, body: BodyId) {
        for (_entity, (_tank, b, health)) in
            self.world.query_mut::<(&Tank, &BodyId, &mut Health)>()
        {
            if *b == body {
                health.current = 0.0;
            }
        }
    }
}
