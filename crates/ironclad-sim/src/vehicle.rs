//! Per-vehicle actuator state and port adapters.
//!
//! `Vehicle` is the ECS component bundle holding one tank's planner,
//! turret, and drive input. `TurretRig` wraps the turret together with
//! the current stage so that `fire` can resolve a shell synchronously
//! and return its `ShotRecord`.

use glam::DVec3;

use ironclad_core::components::BodyId;
use ironclad_core::constants::ARENA_RADIUS;
use ironclad_core::enums::CollisionLayer;
use ironclad_core::events::ShotRecord;
use ironclad_core::types::Position;

use ironclad_ai::geometry::signed_bearing_delta;
use ironclad_ai::ports::{AgentPose, DriveControl, NavAgent, TurretControl, WorldQuery};

use crate::stage::StageView;

/// Straight-line path planner on the flat arena.
///
/// Plans resolve instantly: the path to any destination is a single
/// segment, so the steering target is the destination itself.
#[derive(Debug, Clone, Default)]
pub struct NavUnit {
    destination: Option<Position>,
    planner_pos: Position,
    warp: Option<Position>,
}

impl NavUnit {
    pub fn at(position: Position) -> Self {
        Self {
            destination: None,
            planner_pos: position,
            warp: None,
        }
    }

    /// Keep the planner's position in step with the body.
    pub fn sync_position(&mut self, position: Position) {
        self.planner_pos = position;
    }

    /// Consume a pending arrival warp, if the core snapped this tick.
    pub fn take_warp(&mut self) -> Option<Position> {
        self.warp.take()
    }
}

impl NavAgent for NavUnit {
    fn is_on_nav_surface(&self) -> bool {
        let r_sq = self.planner_pos.x * self.planner_pos.x + self.planner_pos.y * self.planner_pos.y;
        r_sq <= ARENA_RADIUS * ARENA_RADIUS
    }

    fn is_path_pending(&self) -> bool {
        false
    }

    fn has_path(&self) -> bool {
        self.destination.is_some()
    }

    fn set_destination(&mut self, point: Position) {
        self.destination = Some(point);
    }

    fn destination(&self) -> Option<Position> {
        self.destination
    }

    fn planner_position(&self) -> Position {
        self.planner_pos
    }

    fn warp_planner_position(&mut self, point: Position) {
        self.planner_pos = point;
        self.warp = Some(point);
    }

    fn steering_target(&self) -> Position {
        self.destination.unwrap_or(self.planner_pos)
    }
}

/// Turret aim state.
#[derive(Debug, Clone, Default)]
pub struct Turret {
    /// Absolute aim bearing (radians, 0 = North).
    pub bearing: f64,
    /// Target point the weapon system is locked on, if any.
    pub target: Option<Position>,
    /// Simulation time the current lock was taken (for charge time).
    pub target_since: Option<f64>,
}

/// Drive commands written by the core, consumed by locomotion.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriveInput {
    pub throttle: f64,
    pub turn: f64,
}

impl DriveControl for DriveInput {
    fn set_throttle(&mut self, throttle: f64) {
        self.throttle = throttle.clamp(-1.0, 1.0);
    }

    fn set_turn(&mut self, turn: f64) {
        self.turn = turn.clamp(-1.0, 1.0);
    }
}

/// The per-tank actuator bundle attached as an ECS component.
#[derive(Debug, Clone, Default)]
pub struct Vehicle {
    pub nav: NavUnit,
    pub turret: Turret,
    pub drive: DriveInput,
}

impl Vehicle {
    pub fn at(position: Position, heading: f64) -> Self {
        Self {
            nav: NavUnit::at(position),
            turret: Turret {
                bearing: heading,
                target: None,
                target_since: None,
            },
            drive: DriveInput::default(),
        }
    }
}

/// A resolved shell strike, applied to health after the decision pass.
#[derive(Debug, Clone, Copy)]
pub struct ShellImpact {
    pub shooter: BodyId,
    pub victim: BodyId,
    pub launch_force: f64,
}

/// Combat-actuator adapter: the turret plus everything needed to resolve
/// a shell against the current stage.
pub struct TurretRig<'a> {
    pub turret: &'a mut Turret,
    pub stage: &'a StageView,
    pub shooter: BodyId,
    pub pose: AgentPose,
    /// Muzzle height above the hull origin (meters).
    pub muzzle_height: f64,
    pub now: f64,
    pub dt: f64,
    pub impacts: &'a mut Vec<ShellImpact>,
}

impl TurretRig<'_> {
    fn muzzle(&self) -> Position {
        Position::new(
            self.pose.position.x,
            self.pose.position.y,
            self.pose.position.z + self.muzzle_height,
        )
    }
}

impl TurretControl for TurretRig<'_> {
    fn set_target(&mut self, point: Position) {
        if self.turret.target.is_none() {
            self.turret.target_since = Some(self.now);
        }
        self.turret.target = Some(point);
    }

    fn reset_target(&mut self) {
        self.turret.target = None;
        self.turret.target_since = None;
    }

    fn aim_towards(&mut self, point: Position, turn_speed: f64) -> DVec3 {
        let desired = self.pose.position.bearing_to(&point);
        let delta = signed_bearing_delta(self.turret.bearing, desired);
        let budget = turn_speed * self.dt;
        let step = delta.clamp(-budget, budget);
        self.turret.bearing = (self.turret.bearing + step).rem_euclid(std::f64::consts::TAU);
        self.aim_direction()
    }

    fn aim_direction(&self) -> DVec3 {
        Position::bearing_dir(self.turret.bearing)
    }

    fn fire(&mut self, launch_force: f64) -> ShotRecord {
        let charge_secs = self.turret.target_since.map(|t| self.now - t).unwrap_or(0.0);
        let muzzle = self.muzzle();
        let aim = self.aim_direction();
        let max_distance = self
            .turret
            .target
            .map(|t| muzzle.range_to(&t))
            .unwrap_or(2.0 * ARENA_RADIUS);

        // Walk ordered hits the same way line-of-fire does: own hull is
        // skipped, the first non-vehicle hit stops the shell.
        let mut hits = Vec::new();
        self.stage.raycast(muzzle, aim, max_distance, &mut hits);
        let mut victim = None;
        for hit in &hits {
            if hit.body == self.shooter {
                continue;
            }
            match hit.layer {
                CollisionLayer::Vehicle => {
                    victim = Some(hit.body);
                    break;
                }
                _ => break,
            }
        }

        if let Some(victim) = victim {
            self.impacts.push(ShellImpact {
                shooter: self.shooter,
                victim,
                launch_force,
            });
        }

        ShotRecord {
            hit_target: victim.is_some(),
            launch_force,
            charge_secs,
        }
    }
}
