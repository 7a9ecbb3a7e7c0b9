//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::CollisionLayer;

/// Stable identifier for any collidable body (vehicle, obstacle, pickup).
/// Handles to external entities are held as `BodyId`s and re-validated
/// through the match-state port, never dereferenced blindly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct BodyId(pub u32);

/// Team affiliation. Agents engage every other team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team(pub u8);

/// Hit points of a destructible body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub starting: f64,
}

impl Health {
    pub fn full(starting: f64) -> Self {
        Self {
            current: starting,
            starting,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }
}

/// Spherical collision volume used by raycast and overlap queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    pub radius: f64,
    pub layer: CollisionLayer,
}

/// Hull orientation as a bearing (radians, 0 = North, clockwise).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Heading(pub f64);

/// Marks an entity as an AI-controlled tank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tank;

/// Marks an entity as static scenery.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle;

/// Marks an entity as a collectable power-up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup;
