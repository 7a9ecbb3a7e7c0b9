//! Snapshot assembly: the observable arena state for one tick.

use std::collections::BTreeMap;

use hecs::World;

use ironclad_core::components::{BodyId, Heading, Health, Pickup, Tank, Team};
use ironclad_core::enums::{ArenaPhase, BehaviorState, TargetPriority};
use ironclad_core::events::BehaviorEvent;
use ironclad_core::state::{AgentView, ArenaSnapshot, PickupView};
use ironclad_core::types::{Position, SimTime};

use ironclad_ai::controller::AgentController;

use crate::vehicle::Vehicle;

/// Assemble the snapshot for the current tick. Views are sorted by body
/// id so identical matches serialize identically.
pub fn build(
    world: &World,
    controllers: &BTreeMap<BodyId, AgentController>,
    time: SimTime,
    phase: ArenaPhase,
    events: Vec<BehaviorEvent>,
) -> ArenaSnapshot {
    let mut agents = Vec::new();
    {
        let mut query =
            world.query::<(&Tank, &BodyId, &Team, &Position, &Heading, &Health, &Vehicle)>();
        for (_entity, (_tank, body, team, pos, heading, health, vehicle)) in query.iter() {
            let (state, priority, enemy_target, power_up_target) = controllers
                .get(body)
                .map(|c| {
                    (
                        c.state(),
                        c.agent.priority,
                        c.agent.enemy_target,
                        c.agent.power_up_target,
                    )
                })
                .unwrap_or((BehaviorState::Wander, TargetPriority::None, None, None));

            agents.push(AgentView {
                body: *body,
                team: team.0,
                position: *pos,
                heading: heading.0,
                turret_bearing: vehicle.turret.bearing,
                health: health.current,
                state,
                priority,
                enemy_target,
                power_up_target,
            });
        }
    }
    agents.sort_by_key(|a| a.body);

    let mut pickups = Vec::new();
    {
        let mut query = world.query::<(&Pickup, &BodyId, &Position)>();
        for (_entity, (_pickup, body, pos)) in query.iter() {
            pickups.push(PickupView {
                body: *body,
                position: *pos,
            });
        }
    }
    pickups.sort_by_key(|p| p.body);

    ArenaSnapshot {
        time,
        phase,
        agents,
        pickups,
        events,
    }
}
