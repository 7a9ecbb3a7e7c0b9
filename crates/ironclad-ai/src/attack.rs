//! Attack decision and turret aiming.

use ironclad_core::events::BehaviorEvent;
use ironclad_core::types::Position;

use crate::agent::Agent;
use crate::config::AiConfig;
use crate::geometry::{line_of_fire, remap_clamped, within_range};
use crate::ports::{RayHit, TickPorts};

/// Engagement distance bounds derived from projectile fall time.
///
/// Launch forces are treated as initial velocities under plain ballistic
/// fall: `time_to_fall = sqrt(2·drop/|g|)`, `distance = time_to_fall ×
/// velocity`. No air resistance, no horizontal drag. Derived once at
/// construction, not per tick.
#[derive(Debug, Clone, Copy)]
pub struct ShootingEnvelope {
    /// Distance a minimum-force shell travels before ground impact (m).
    pub min_distance: f64,
    /// Distance a maximum-force shell travels before ground impact (m).
    pub max_distance: f64,
}

impl ShootingEnvelope {
    pub fn derive(cfg: &AiConfig) -> Self {
        let g = cfg.gravity.abs();
        if g <= 0.0 || cfg.muzzle_drop <= 0.0 {
            // Degenerate ballistics config: flat envelope out to the
            // engagement limit rather than a NaN fall time.
            return Self {
                min_distance: 0.0,
                max_distance: cfg.max_engagement_range,
            };
        }
        let time_to_fall = (2.0 * cfg.muzzle_drop / g).sqrt();
        Self {
            min_distance: time_to_fall * cfg.min_launch_force,
            max_distance: time_to_fall * cfg.max_launch_force,
        }
    }
}

/// Run the per-tick attack decision for one agent.
///
/// Fire commands are gated three ways: the cooldown since the last shot,
/// the engagement range (squared compare), and the alternating decision
/// flag. A cycle that fires is followed by an aim-only cycle before the
/// next shot is considered; the cadence is intentional pacing, not an
/// artifact.
pub fn act(
    agent: &mut Agent,
    cfg: &AiConfig,
    envelope: &ShootingEnvelope,
    ports: &mut TickPorts,
    ray_scratch: &mut Vec<RayHit>,
    events: &mut Vec<BehaviorEvent>,
) {
    if ports.now - agent.last_shot_secs < cfg.fire_cooldown_secs {
        return;
    }

    let enemy = match agent.enemy_target {
        Some(e) => e,
        None => return,
    };
    // Target may have despawned since selection; the selector
    // re-acquires next tick.
    let enemy_pos = match ports.arena.position_of(enemy) {
        Some(p) => p,
        None => return,
    };

    if within_range(&ports.pose.position, &enemy_pos, cfg.max_engagement_range) {
        ports.turret.set_target(enemy_pos);

        if agent.fired_last_cycle {
            // Aim-only breather between fire decisions.
            agent.fired_last_cycle = false;
            return;
        }

        let aim = ports.turret.aim_towards(enemy_pos, cfg.turret_turn_speed);
        let muzzle = Position::new(
            ports.pose.position.x,
            ports.pose.position.y,
            ports.pose.position.z + cfg.muzzle_drop,
        );
        let lof = line_of_fire(ports.world, agent.body, muzzle, aim, enemy_pos, ray_scratch);
        if !lof.clear {
            return;
        }

        let distance = ports.pose.position.range_to(&enemy_pos);
        let launch_force = remap_clamped(
            distance,
            envelope.min_distance,
            envelope.max_distance,
            cfg.min_launch_force,
            cfg.max_launch_force,
        );

        let record = ports.turret.fire(launch_force);
        events.push(BehaviorEvent::ShellFired {
            agent: agent.body,
            launch_force,
            hit_target: record.hit_target,
        });
        agent.record_shot(record);
        agent.last_shot_secs = ports.now;
        agent.fired_last_cycle = true;
    } else {
        // Out of range: drop the decision flag and the target lock.
        agent.fired_last_cycle = false;
        ports.turret.reset_target();
    }
}
