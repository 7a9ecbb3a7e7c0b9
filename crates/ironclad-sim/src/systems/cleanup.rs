//! Cleanup system: removes destroyed tanks.
//!
//! Uses a pre-allocated buffer to avoid per-tick allocation. Controllers
//! for despawned bodies are dropped by the engine after this runs.

use hecs::{Entity, World};

use ironclad_core::components::{Health, Tank};

/// Despawn tanks whose health has reached zero. Returns nothing; the
/// engine reconciles its controller map against the surviving bodies.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (_tank, health)) in world.query_mut::<(&Tank, &Health)>() {
        if health.is_dead() {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
