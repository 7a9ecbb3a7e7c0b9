//! Arena snapshot — the complete observable state produced each tick.

use serde::{Deserialize, Serialize};

use crate::components::BodyId;
use crate::enums::{ArenaPhase, BehaviorState, TargetPriority};
use crate::events::BehaviorEvent;
use crate::types::{Position, SimTime};

/// Complete arena state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub time: SimTime,
    pub phase: ArenaPhase,
    pub agents: Vec<AgentView>,
    pub pickups: Vec<PickupView>,
    pub events: Vec<BehaviorEvent>,
}

/// One agent's observable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentView {
    pub body: BodyId,
    pub team: u8,
    pub position: Position,
    /// Hull bearing (radians, 0 = North).
    pub heading: f64,
    /// Turret bearing (radians, 0 = North).
    pub turret_bearing: f64,
    pub health: f64,
    pub state: BehaviorState,
    pub priority: TargetPriority,
    pub enemy_target: Option<BodyId>,
    pub power_up_target: Option<BodyId>,
}

/// One active power-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupView {
    pub body: BodyId,
    pub position: Position,
}
