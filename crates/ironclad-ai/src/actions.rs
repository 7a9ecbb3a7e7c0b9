//! Per-tick behavior actions owned by FSM states.
//!
//! A closed tagged variant stands in for per-behavior script assets:
//! the state machine dispatches on the enum, no runtime reflection.
//! Wander-family actions consult the agent's resolved movement priority
//! to pick which point to feed into the steering controller.

use rand::Rng;

use ironclad_core::enums::TargetPriority;
use ironclad_core::events::BehaviorEvent;
use ironclad_core::types::Position;

use crate::agent::Agent;
use crate::attack::{self, ShootingEnvelope};
use crate::config::AiConfig;
use crate::ports::{RayHit, TickPorts};
use crate::steering;

/// One independently pluggable unit of per-tick logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Gate, aim, and fire at the current enemy target.
    Attack,
    /// Steer straight at the priority target.
    Wander,
    /// Steer to a standoff ring around the priority target.
    RangedWander,
    /// Steer to the current power-up.
    PursuePowerUp,
}

impl Action {
    /// Run this action for one tick while its owning state is active.
    #[allow(clippy::too_many_arguments)]
    pub fn run<R: Rng>(
        self,
        agent: &mut Agent,
        cfg: &AiConfig,
        envelope: &ShootingEnvelope,
        ports: &mut TickPorts,
        rng: &mut R,
        ray_scratch: &mut Vec<RayHit>,
        events: &mut Vec<BehaviorEvent>,
    ) {
        match self {
            Action::Attack => attack::act(agent, cfg, envelope, ports, ray_scratch, events),
            Action::Wander => wander(agent, cfg, ports, rng),
            Action::RangedWander => ranged_wander(agent, cfg, ports, rng),
            Action::PursuePowerUp => pursue_power_up(agent, cfg, ports),
        }
    }
}

/// Steer straight at whichever point the resolved priority names.
fn wander<R: Rng>(agent: &mut Agent, cfg: &AiConfig, ports: &mut TickPorts, rng: &mut R) {
    let target = match agent.priority {
        TargetPriority::PowerUp => agent
            .power_up_target
            .and_then(|p| ports.arena.position_of(p)),
        TargetPriority::Enemy => agent.enemy_target.and_then(|e| ports.arena.position_of(e)),
        TargetPriority::Random => Some(roam_point(agent, cfg, ports, rng)),
        TargetPriority::None => None,
    };

    steer_or_idle(agent, cfg, target, ports);
}

/// Like `wander`, but an enemy-priority target lands on a fixed-radius
/// ring around the enemy instead of on top of it.
fn ranged_wander<R: Rng>(agent: &mut Agent, cfg: &AiConfig, ports: &mut TickPorts, rng: &mut R) {
    let target = match agent.priority {
        TargetPriority::PowerUp => agent
            .power_up_target
            .and_then(|p| ports.arena.position_of(p)),
        TargetPriority::Enemy => agent
            .enemy_target
            .and_then(|e| ports.arena.position_of(e))
            .map(|enemy_pos| ring_point(agent, cfg, enemy_pos, ports, rng)),
        TargetPriority::Random => Some(roam_point(agent, cfg, ports, rng)),
        TargetPriority::None => None,
    };

    steer_or_idle(agent, cfg, target, ports);
}

/// Chase the current power-up. A vanished power-up makes this a no-op;
/// the scanner re-acquires next tick.
fn pursue_power_up(agent: &mut Agent, cfg: &AiConfig, ports: &mut TickPorts) {
    let target = agent
        .power_up_target
        .and_then(|p| ports.arena.position_of(p));
    steer_or_idle(agent, cfg, target, ports);
}

fn steer_or_idle(
    agent: &mut Agent,
    cfg: &AiConfig,
    target: Option<Position>,
    ports: &mut TickPorts,
) {
    let target = match target {
        Some(t) => t,
        None => {
            agent.move_target = None;
            return;
        }
    };
    agent.move_target = Some(target);
    let _ = steering::drive_towards(agent, cfg, target, ports);
}

/// Current roam point, or a fresh jittered point within the roam disc
/// once the old one is reached.
fn roam_point<R: Rng>(agent: &Agent, cfg: &AiConfig, ports: &TickPorts, rng: &mut R) -> Position {
    if let Some(t) = agent.move_target {
        if ports.pose.position.range_sq_to(&t) > cfg.arrival_epsilon_sq {
            return t;
        }
    }
    let bearing: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let dist: f64 = rng.gen_range(0.0..cfg.wander_radius);
    Position::new(
        ports.pose.position.x + dist * bearing.sin(),
        ports.pose.position.y + dist * bearing.cos(),
        ports.pose.position.z,
    )
}

/// Current ring point, or a fresh one jittered onto the standoff ring
/// around `center` once the old one is reached.
fn ring_point<R: Rng>(
    agent: &Agent,
    cfg: &AiConfig,
    center: Position,
    ports: &TickPorts,
    rng: &mut R,
) -> Position {
    if let Some(t) = agent.move_target {
        if ports.pose.position.range_sq_to(&t) > cfg.arrival_epsilon_sq {
            return t;
        }
    }
    let theta: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    Position::new(
        center.x + cfg.ranged_wander_ring_radius * theta.sin(),
        center.y + cfg.ranged_wander_ring_radius * theta.cos(),
        center.z,
    )
}
