//! Tank kinematics: turns drive commands into motion.
//!
//! The decision core never mutates transforms; this system is the
//! movement actuator that consumes its throttle/turn scalars.

use hecs::World;

use ironclad_core::components::{Heading, Tank};
use ironclad_core::constants::{ARENA_RADIUS, DT, HULL_MAX_SPEED, HULL_TURN_SPEED};
use ironclad_core::types::Position;

use crate::vehicle::Vehicle;

/// Integrate heading and position for every tank.
pub fn run(world: &mut World) {
    for (_entity, (_tank, pos, heading, vehicle)) in
        world.query_mut::<(&Tank, &mut Position, &mut Heading, &mut Vehicle)>()
    {
        // An arrival snap from the planner takes authority this tick.
        if let Some(warp) = vehicle.nav.take_warp() {
            *pos = warp;
            heading.0 = heading.0.rem_euclid(std::f64::consts::TAU);
            vehicle.nav.sync_position(*pos);
            continue;
        }

        heading.0 =
            (heading.0 + vehicle.drive.turn * HULL_TURN_SPEED * DT).rem_euclid(std::f64::consts::TAU);

        let dir = Position::bearing_dir(heading.0);
        let step = vehicle.drive.throttle * HULL_MAX_SPEED * DT;
        pos.x += dir.x * step;
        pos.y += dir.y * step;

        // Hard arena wall: slide back onto the boundary circle.
        let r = (pos.x * pos.x + pos.y * pos.y).sqrt();
        if r > ARENA_RADIUS {
            let scale = ARENA_RADIUS / r;
            pos.x *= scale;
            pos.y *= scale;
        }

        vehicle.nav.sync_position(*pos);
    }
}
