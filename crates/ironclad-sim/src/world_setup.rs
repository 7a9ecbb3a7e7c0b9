//! Entity spawn factories for setting up the arena world.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use ironclad_core::components::*;
use ironclad_core::constants::*;
use ironclad_core::types::Position;

use crate::engine::ArenaConfig;
use crate::vehicle::Vehicle;

/// Spawn teams, obstacles, and power-ups per the config. Returns the
/// spawned tank roster so the engine can build controllers for it.
pub fn setup_arena(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_body_id: &mut u32,
    config: &ArenaConfig,
) -> Vec<(BodyId, Team)> {
    let mut roster = Vec::new();

    for team_idx in 0..config.teams {
        // Each team deploys in its own sector of the arena rim,
        // facing the center.
        let sector = team_idx as f64 * std::f64::consts::TAU / config.teams.max(1) as f64;
        for _ in 0..config.tanks_per_team {
            let bearing = sector + rng.gen_range(-0.3..0.3);
            let range = rng.gen_range(0.55..0.75) * ARENA_RADIUS;
            let x = range * bearing.sin();
            let y = range * bearing.cos();
            let heading = (bearing + std::f64::consts::PI).rem_euclid(std::f64::consts::TAU);
            let body = spawn_tank(
                world,
                next_body_id,
                Team(team_idx),
                Position::new(x, y, 0.0),
                heading,
            );
            roster.push((body, Team(team_idx)));
        }
    }

    for _ in 0..config.obstacles {
        let bearing: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let range: f64 = rng.gen_range(0.15..0.5) * ARENA_RADIUS;
        let radius: f64 = rng.gen_range(3.0..6.0);
        spawn_obstacle(
            world,
            next_body_id,
            Position::new(range * bearing.sin(), range * bearing.cos(), 0.0),
            radius,
        );
    }

    for _ in 0..config.pickups {
        let bearing: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let range: f64 = rng.gen_range(0.1..0.45) * ARENA_RADIUS;
        spawn_pickup(
            world,
            next_body_id,
            Position::new(range * bearing.sin(), range * bearing.cos(), 0.0),
        );
    }

    roster
}

/// Spawn a single tank with full actuator state.
pub fn spawn_tank(
    world: &mut World,
    next_body_id: &mut u32,
    team: Team,
    position: Position,
    heading: f64,
) -> BodyId {
    let body = BodyId(*next_body_id);
    *next_body_id += 1;

    world.spawn((
        Tank,
        body,
        team,
        position,
        Heading(heading),
        Health::full(TANK_STARTING_HEALTH),
        Collider {
            radius: TANK_COLLIDER_RADIUS,
            layer: ironclad_core::enums::CollisionLayer::Vehicle,
        },
        Vehicle::at(position, heading),
    ));
    body
}

/// Spawn static scenery that blocks shells and line of fire.
pub fn spawn_obstacle(
    world: &mut World,
    next_body_id: &mut u32,
    position: Position,
    radius: f64,
) -> BodyId {
    let body = BodyId(*next_body_id);
    *next_body_id += 1;

    world.spawn((
        Obstacle,
        body,
        position,
        Collider {
            radius,
            layer: ironclad_core::enums::CollisionLayer::Obstacle,
        },
    ));
    body
}

/// Spawn a collectable power-up.
pub fn spawn_pickup(world: &mut World, next_body_id: &mut u32, position: Position) -> BodyId {
    let body = BodyId(*next_body_id);
    *next_body_id += 1;

    world.spawn((
        Pickup,
        body,
        position,
        Collider {
            radius: PICKUP_COLLIDER_RADIUS,
            layer: ironclad_core::enums::CollisionLayer::Pickup,
        },
    ));
    body
}
