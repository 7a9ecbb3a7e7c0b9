//! Power-up claiming.

use hecs::{Entity, World};

use ironclad_core::components::{BodyId, Health, Pickup, Tank};
use ironclad_core::constants::{POWERUP_CLAIM_RADIUS, POWERUP_HEAL};
use ironclad_core::events::BehaviorEvent;
use ironclad_core::types::Position;

/// Claim any power-up a living tank has driven onto. The claimed entity
/// despawns immediately; scanners re-target from the next tick's stage.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, events: &mut Vec<BehaviorEvent>) {
    despawn_buffer.clear();

    let claim_sq = POWERUP_CLAIM_RADIUS * POWERUP_CLAIM_RADIUS;
    let mut claims: Vec<(Entity, BodyId, Entity, BodyId)> = Vec::new();

    {
        let mut pickups = world.query::<(&Pickup, &BodyId, &Position)>();
        let pickups: Vec<_> = pickups
            .iter()
            .map(|(entity, (_p, body, pos))| (entity, *body, *pos))
            .collect();

        let mut tanks = world.query::<(&Tank, &BodyId, &Position, &Health)>();
        for (tank_entity, (_tank, tank_body, tank_pos, health)) in tanks.iter() {
            if health.is_dead() {
                continue;
            }
            for &(pickup_entity, pickup_body, pickup_pos) in &pickups {
                let already = claims.iter().any(|&(_, _, e, _)| e == pickup_entity);
                if !already && tank_pos.range_sq_to(&pickup_pos) <= claim_sq {
                    claims.push((tank_entity, *tank_body, pickup_entity, pickup_body));
                }
            }
        }
    }

    for (tank_entity, tank_body, pickup_entity, pickup_body) in claims {
        if let Ok(mut health) = world.get::<&mut Health>(tank_entity) {
            health.current = (health.current + POWERUP_HEAL).min(health.starting);
        }
        despawn_buffer.push(pickup_entity);
        events.push(BehaviorEvent::PowerUpClaimed {
            agent: tank_body,
            pickup: pickup_body,
        });
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
