//! Movement and steering toward a destination point.
//!
//! Turns a target position into per-tick throttle and turn commands for
//! the host's path-following agent. Paths are recomputed on a fixed
//! refresh interval rather than every tick; replanning per tick is
//! expensive and produces jitter.

use ironclad_core::constants::MIN_TURN_BUDGET;
use ironclad_core::types::Position;

use crate::agent::Agent;
use crate::config::AiConfig;
use crate::geometry::signed_bearing_delta;
use crate::ports::TickPorts;

/// What one steering tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteerOutcome {
    /// Planner unavailable this tick (off surface or mid-replan). No-op.
    Blocked,
    /// A destination was (re)issued to the planner.
    Replanned,
    /// Close enough to the destination: planner position snapped, zero
    /// commands emitted.
    Arrived,
    /// Throttle and turn commands were emitted toward the next corner.
    Steering,
}

/// Whether the planner can accept steering this tick.
pub fn can_move(ports: &TickPorts) -> bool {
    ports.nav.is_on_nav_surface() && !ports.nav.is_path_pending()
}

/// Steer the agent toward `target` for one tick. Commands go to the
/// movement actuator only; position and rotation are never mutated here.
pub fn drive_towards(
    agent: &mut Agent,
    cfg: &AiConfig,
    target: Position,
    ports: &mut TickPorts,
) -> SteerOutcome {
    if !can_move(ports) {
        return SteerOutcome::Blocked;
    }

    // (Re)issue the destination when no path exists yet, or when the
    // refresh interval has elapsed since the last assignment.
    if !ports.nav.has_path() || ports.now - agent.last_path_refresh_secs > cfg.path_refresh_secs {
        ports.nav.set_destination(target);
        agent.last_path_refresh_secs = ports.now;
        return SteerOutcome::Replanned;
    }

    let destination = match ports.nav.destination() {
        Some(d) => d,
        None => return SteerOutcome::Blocked,
    };

    // Arrival: snap the planner position to the destination and stop.
    let planner_pos = ports.nav.planner_position();
    if planner_pos.range_sq_to(&destination) < cfg.arrival_epsilon_sq {
        ports.nav.warp_planner_position(destination);
        ports.drive.set_throttle(0.0);
        ports.drive.set_turn(0.0);
        return SteerOutcome::Arrived;
    }

    // Steer at the next path corner. The turn command is normalized by
    // one tick's angular budget: a needed turn smaller than the budget
    // scales down proportionally instead of overshooting.
    let corner = ports.nav.steering_target();
    let desired = ports.pose.position.bearing_to(&corner);
    let delta = signed_bearing_delta(ports.pose.heading, desired);
    let budget = (cfg.hull_turn_speed * ports.dt).max(MIN_TURN_BUDGET);
    let turn = (delta / budget).clamp(-1.0, 1.0);

    // Full speed when facing the corner, falling off (and reversing)
    // as the required turn grows.
    let throttle = delta.cos();

    ports.drive.set_throttle(throttle);
    ports.drive.set_turn(turn);
    SteerOutcome::Steering
}
