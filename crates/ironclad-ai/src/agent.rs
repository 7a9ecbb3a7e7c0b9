//! Per-agent decision state.

use ironclad_core::components::{BodyId, Team};
use ironclad_core::enums::TargetPriority;
use ironclad_core::events::ShotRecord;
use ironclad_core::types::Position;

/// Cap on retained shot records. Older entries are dropped.
pub const MAX_RECENT_SHOTS: usize = 16;

/// Decision state for one AI-controlled vehicle.
///
/// The agent owns its timers and flags exclusively. Enemy and power-up
/// targets are weak handles into externally-owned match state; they can
/// become invalid at any tick boundary and are re-validated before use.
#[derive(Debug, Clone)]
pub struct Agent {
    pub body: BodyId,
    pub team: Team,
    /// Current enemy, if any. Replaced only when it becomes invalid.
    pub enemy_target: Option<BodyId>,
    /// Current power-up, if any. Refreshed by the scanner every tick.
    pub power_up_target: Option<BodyId>,
    /// Point the agent is currently steering toward. Absent = no destination.
    pub move_target: Option<Position>,
    /// Which goal drives the movement target this tick.
    pub priority: TargetPriority,
    /// Simulation time of the last fire command (seconds).
    pub last_shot_secs: f64,
    /// Simulation time of the last destination assignment (seconds).
    pub last_path_refresh_secs: f64,
    /// Whether the previous attack cycle ended in a fire command.
    /// Produces the alternating aim/fire cadence.
    pub fired_last_cycle: bool,
    /// Externally-set kill switch: a stopped agent makes no decisions.
    pub stopped: bool,
    /// Outcomes of recent shots. Write-only bookkeeping for now.
    pub recent_shots: Vec<ShotRecord>,
}

impl Agent {
    pub fn new(body: BodyId, team: Team) -> Self {
        Self {
            body,
            team,
            enemy_target: None,
            power_up_target: None,
            move_target: None,
            priority: TargetPriority::None,
            // Negative infinity so the first shot and first replan are
            // not gated by a cooldown that never started.
            last_shot_secs: f64::NEG_INFINITY,
            last_path_refresh_secs: f64::NEG_INFINITY,
            fired_last_cycle: false,
            stopped: false,
            recent_shots: Vec::new(),
        }
    }

    /// Record a shot outcome, keeping only the most recent entries.
    pub fn record_shot(&mut self, record: ShotRecord) {
        self.recent_shots.insert(0, record);
        self.recent_shots.truncate(MAX_RECENT_SHOTS);
    }
}
