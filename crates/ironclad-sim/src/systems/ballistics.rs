//! Shell impact application.
//!
//! Impacts are buffered by the turret rigs during the decision pass and
//! applied here, so every controller saw the same pre-damage scene.

use hecs::World;

use ironclad_core::components::{BodyId, Health, Tank};
use ironclad_core::constants::SHELL_DAMAGE;
use ironclad_core::events::BehaviorEvent;

use crate::vehicle::ShellImpact;

/// Apply buffered shell impacts to victim health.
pub fn run(world: &mut World, impacts: &mut Vec<ShellImpact>, events: &mut Vec<BehaviorEvent>) {
    for impact in impacts.drain(..) {
        for (_entity, (_tank, body, health)) in world.query_mut::<(&Tank, &BodyId, &mut Health)>() {
            if *body != impact.victim || health.is_dead() {
                continue;
            }
            health.current -= SHELL_DAMAGE;
            if health.is_dead() {
                events.push(BehaviorEvent::TankDestroyed { victim: *body });
            }
        }
    }
}
