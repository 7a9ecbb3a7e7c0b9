//! Events emitted by the decision core and arena systems.
//!
//! Drained into each tick's snapshot; the harness and tests observe
//! behavior through this buffer rather than through a logging facade.

use serde::{Deserialize, Serialize};

use crate::components::BodyId;
use crate::enums::BehaviorState;

/// Outcome of one fired shell, produced by the combat actuator.
/// Consumed by the agent as write-only bookkeeping for now.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShotRecord {
    /// Whether the shell struck the intended target.
    pub hit_target: bool,
    /// Launch force the shell left the muzzle with (m/s).
    pub launch_force: f64,
    /// Time spent charging the shot (seconds).
    pub charge_secs: f64,
}

/// Behavior events for observers of the decision loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BehaviorEvent {
    /// An agent's state machine entered a new state.
    StateEntered {
        agent: BodyId,
        state: BehaviorState,
    },
    /// An agent picked a new enemy target.
    TargetAcquired { agent: BodyId, enemy: BodyId },
    /// An agent fired a shell.
    ShellFired {
        agent: BodyId,
        launch_force: f64,
        hit_target: bool,
    },
    /// A vehicle drove over a power-up and claimed it.
    PowerUpClaimed { agent: BodyId, pickup: BodyId },
    /// A tank was destroyed.
    TankDestroyed { victim: BodyId },
}
