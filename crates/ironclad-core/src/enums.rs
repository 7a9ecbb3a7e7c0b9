//! Enumeration types used throughout the arena.

use serde::{Deserialize, Serialize};

/// Which goal currently drives an agent's movement target.
/// Independent of whether the agent is also allowed to fire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetPriority {
    /// No movement goal.
    #[default]
    None,
    /// Steer relative to the current enemy target.
    Enemy,
    /// Steer toward the current power-up target.
    PowerUp,
    /// Roam to jittered points with no particular goal.
    Random,
}

/// Behavior phase of the per-agent state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BehaviorState {
    /// Head straight for the priority target.
    #[default]
    Wander,
    /// Orbit the priority target on a standoff ring.
    RangedWander,
    /// Engage the enemy while repositioning.
    Attack,
    /// Chase the current power-up.
    PowerUp,
}

/// Collision layer of a collidable body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollisionLayer {
    /// A player or AI vehicle.
    Vehicle,
    /// Static scenery. Blocks line of fire.
    Obstacle,
    /// A collectable power-up.
    Pickup,
}

/// Arena lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArenaPhase {
    #[default]
    Setup,
    Active,
    /// One team remains alive.
    Decided,
}
