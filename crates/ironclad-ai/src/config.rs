//! Consolidated tuning parameters for one agent controller.
//!
//! Replaces global configuration lookups: the host builds an `AiConfig`
//! once and hands it to the controller at construction.

use ironclad_core::constants::*;

/// Behavioral tuning for one agent.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// Minimum gap between fire commands (seconds).
    pub fire_cooldown_secs: f64,
    /// Maximum engagement range (meters).
    pub max_engagement_range: f64,
    /// Turret slew rate (rad/s).
    pub turret_turn_speed: f64,
    /// Hull turn rate (rad/s).
    pub hull_turn_speed: f64,
    /// Interval between path replans (seconds).
    pub path_refresh_secs: f64,
    /// Squared arrival threshold (m²).
    pub arrival_epsilon_sq: f64,
    /// Power-up proximity scan radius (meters).
    pub powerup_scan_radius: f64,
    /// Bounded capacity of one power-up scan.
    pub powerup_scan_max_results: usize,
    /// Roam disc radius for priority-less wandering (meters).
    pub wander_radius: f64,
    /// Standoff ring radius around the enemy (meters).
    pub ranged_wander_ring_radius: f64,
    /// Minimum launch force, treated as muzzle velocity (m/s).
    pub min_launch_force: f64,
    /// Maximum launch force (m/s).
    pub max_launch_force: f64,
    /// Vertical drop from muzzle to ground plane (meters).
    pub muzzle_drop: f64,
    /// Gravitational acceleration magnitude (m/s²).
    pub gravity: f64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            fire_cooldown_secs: FIRE_COOLDOWN_SECS,
            max_engagement_range: MAX_ENGAGEMENT_RANGE,
            turret_turn_speed: TURRET_TURN_SPEED,
            hull_turn_speed: HULL_TURN_SPEED,
            path_refresh_secs: PATH_REFRESH_INTERVAL_SECS,
            arrival_epsilon_sq: ARRIVAL_EPSILON_SQ,
            powerup_scan_radius: POWERUP_SCAN_RADIUS,
            powerup_scan_max_results: POWERUP_SCAN_MAX_RESULTS,
            wander_radius: WANDER_RADIUS,
            ranged_wander_ring_radius: RANGED_WANDER_RING_RADIUS,
            min_launch_force: MIN_LAUNCH_FORCE,
            max_launch_force: MAX_LAUNCH_FORCE,
            muzzle_drop: MUZZLE_DROP,
            gravity: GRAVITY,
        }
    }
}
