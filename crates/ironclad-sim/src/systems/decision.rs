//! Decision system: runs each tank's controller for one tick.
//!
//! The stage is captured once, then every controller reads the same
//! frame-consistent scene. Controller state lives beside the world in an
//! engine-owned map, keyed by body id.

use std::collections::BTreeMap;

use hecs::World;
use rand_chacha::ChaCha8Rng;

use ironclad_core::components::{BodyId, Heading, Health, Tank};
use ironclad_core::constants::{DT, MUZZLE_DROP};
use ironclad_core::events::BehaviorEvent;
use ironclad_core::types::{Position, SimTime};

use ironclad_ai::controller::AgentController;
use ironclad_ai::ports::{AgentPose, TickPorts};

use crate::stage::StageView;
use crate::vehicle::{ShellImpact, TurretRig, Vehicle};

/// Run one decision tick for every controlled tank.
pub fn run(
    world: &mut World,
    controllers: &mut BTreeMap<BodyId, AgentController>,
    rng: &mut ChaCha8Rng,
    time: SimTime,
    events: &mut Vec<BehaviorEvent>,
    impacts: &mut Vec<ShellImpact>,
) {
    let stage = StageView::capture(world);

    // Collect the roster first; controllers then borrow each Vehicle
    // mutably without holding a query open.
    let mut roster: Vec<(hecs::Entity, BodyId, Position, f64)> = Vec::new();
    {
        let mut query = world.query::<(&Tank, &BodyId, &Position, &Heading, &Health)>();
        for (entity, (_tank, body, pos, heading, health)) in query.iter() {
            // A tank destroyed between ticks makes no further decisions.
            if health.is_dead() {
                continue;
            }
            roster.push((entity, *body, *pos, heading.0));
        }
    }

    for (entity, body, position, heading) in roster {
        let controller = match controllers.get_mut(&body) {
            Some(c) => c,
            None => continue,
        };
        let mut vehicle_ref = match world.get::<&mut Vehicle>(entity) {
            Ok(v) => v,
            Err(_) => continue,
        };
        let vehicle = &mut *vehicle_ref;

        vehicle.nav.sync_position(position);
        let pose = AgentPose { position, heading };

        let mut rig = TurretRig {
            turret: &mut vehicle.turret,
            stage: &stage,
            shooter: body,
            pose,
            muzzle_height: MUZZLE_DROP,
            now: time.elapsed_secs,
            dt: DT,
            impacts: &mut *impacts,
        };
        let mut ports = TickPorts {
            world: &stage,
            arena: &stage,
            nav: &mut vehicle.nav,
            turret: &mut rig,
            drive: &mut vehicle.drive,
            pose,
            now: time.elapsed_secs,
            dt: DT,
        };
        controller.tick(&mut ports, rng, events);
    }
}
