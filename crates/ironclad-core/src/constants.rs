//! Arena constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World bounds ---

/// Arena radius in meters. Bodies never leave this circle.
pub const ARENA_RADIUS: f64 = 250.0;

// --- Combat ---

/// Minimum wall-time gap between fire commands (seconds, max 2 shots/sec).
pub const FIRE_COOLDOWN_SECS: f64 = 0.5;

/// Maximum engagement range (meters). Beyond this the attack action
/// clears its target lock instead of aiming.
pub const MAX_ENGAGEMENT_RANGE: f64 = 80.0;

/// Turret slew rate (radians per second).
pub const TURRET_TURN_SPEED: f64 = 3.0;

/// Minimum configured launch force (treated as muzzle velocity, m/s).
pub const MIN_LAUNCH_FORCE: f64 = 12.0;

/// Maximum configured launch force (m/s).
pub const MAX_LAUNCH_FORCE: f64 = 40.0;

/// Vertical drop from muzzle height to the ground plane (meters).
/// Feeds the ballistic-fall shooting-envelope derivation.
pub const MUZZLE_DROP: f64 = 2.0;

/// Gravitational acceleration magnitude (m/s²).
pub const GRAVITY: f64 = 9.81;

/// Damage applied by a confirmed shell hit.
pub const SHELL_DAMAGE: f64 = 25.0;

// --- Steering ---

/// Interval between path replans while a destination is held (seconds).
/// Replanning every tick is expensive and produces jitter.
pub const PATH_REFRESH_INTERVAL_SECS: f64 = 1.0;

/// Squared distance below which the planner position snaps to the
/// destination and steering stops (m²).
pub const ARRIVAL_EPSILON_SQ: f64 = 1.0;

/// Hull turn rate (radians per second).
pub const HULL_TURN_SPEED: f64 = 1.6;

/// Top hull speed at full throttle (m/s).
pub const HULL_MAX_SPEED: f64 = 9.0;

/// Floor for the per-tick angular turn budget (radians). Guards the
/// turn-command normalization against a zero time step.
pub const MIN_TURN_BUDGET: f64 = 1e-6;

// --- Power-ups ---

/// Search radius for the power-up proximity scan (meters).
pub const POWERUP_SCAN_RADIUS: f64 = 60.0;

/// Bounded capacity of one power-up overlap query.
pub const POWERUP_SCAN_MAX_RESULTS: usize = 8;

/// Contact radius at which a vehicle claims a power-up (meters).
pub const POWERUP_CLAIM_RADIUS: f64 = 2.5;

/// Power-up collision radius (meters).
pub const PICKUP_COLLIDER_RADIUS: f64 = 1.0;

/// Hit points restored by a claimed power-up.
pub const POWERUP_HEAL: f64 = 25.0;

// --- Wander ---

/// Radius of the roam disc for priority-less wandering (meters).
pub const WANDER_RADIUS: f64 = 40.0;

/// Standoff ring radius around the enemy for ranged wander (meters).
/// Keeps agents from bunching directly on top of their target.
pub const RANGED_WANDER_RING_RADIUS: f64 = 35.0;

// --- Vehicles ---

/// Starting hit points for a tank.
pub const TANK_STARTING_HEALTH: f64 = 100.0;

/// Tank collision radius (meters). Larger than the muzzle height so
/// that a flat shell ray still intersects hull spheres cleanly.
pub const TANK_COLLIDER_RADIUS: f64 = 2.5;
