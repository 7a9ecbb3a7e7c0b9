//! Host ports consumed by the decision core.
//!
//! The host simulation owns transforms, physics, navigation, and weapons.
//! The core only sees these narrow contracts, always called synchronously
//! against the current frame's scene state. External entities are
//! addressed by `BodyId` handles and re-validated through `ArenaState`
//! every tick; a `None` answer means the referenced entity is gone.

use glam::DVec3;

use ironclad_core::components::{BodyId, Team};
use ironclad_core::enums::CollisionLayer;
use ironclad_core::events::ShotRecord;
use ironclad_core::types::Position;

/// One raycast hit, reported in ascending-distance order.
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    pub body: BodyId,
    pub layer: CollisionLayer,
    /// Distance from the ray origin to the hit point (meters).
    pub distance: f64,
}

/// Health of a destructible body as reported by the match port.
#[derive(Debug, Clone, Copy)]
pub struct HealthStatus {
    pub current: f64,
    pub starting: f64,
    pub is_dead: bool,
}

/// The agent's own transform, owned by the host physics.
#[derive(Debug, Clone, Copy)]
pub struct AgentPose {
    pub position: Position,
    /// Hull bearing (radians, 0 = North, clockwise).
    pub heading: f64,
}

/// Synchronous geometric queries against the collidable world.
pub trait WorldQuery {
    /// Cast a ray and fill `out` with hits ordered by ascending distance.
    /// Clears `out` first; never retains results across calls.
    fn raycast(&self, origin: Position, direction: DVec3, max_distance: f64, out: &mut Vec<RayHit>);

    /// Fill `out` with up to `max_results` bodies on `layer` within
    /// `radius` of `center`. Clears `out` first. Enumeration order is
    /// stable across calls with an unchanged scene.
    fn overlap_sphere(
        &self,
        center: Position,
        radius: f64,
        layer: CollisionLayer,
        max_results: usize,
        out: &mut Vec<BodyId>,
    );
}

/// The host's path planner for one agent.
pub trait NavAgent {
    /// Whether the agent currently stands on the navigation surface.
    fn is_on_nav_surface(&self) -> bool;
    /// Whether a replan is still in flight.
    fn is_path_pending(&self) -> bool;
    /// Whether a computed path exists.
    fn has_path(&self) -> bool;
    /// Issue a new destination to the planner.
    fn set_destination(&mut self, point: Position);
    /// The destination the planner currently holds.
    fn destination(&self) -> Option<Position>;
    /// The planner's notion of the agent's current position.
    fn planner_position(&self) -> Position;
    /// Snap the planner position (arrival).
    fn warp_planner_position(&mut self, point: Position);
    /// The next path corner to steer at.
    fn steering_target(&self) -> Position;
}

/// The host's turret and weapon for one agent.
pub trait TurretControl {
    /// Inform the weapon system of the intended target point.
    fn set_target(&mut self, point: Position);
    /// Drop the target lock.
    fn reset_target(&mut self);
    /// Rotate the turret toward `point` at `turn_speed` rad/s for one
    /// tick. Returns the post-slew aim direction (unit vector); line of
    /// fire is evaluated along the turret's actual forward.
    fn aim_towards(&mut self, point: Position, turn_speed: f64) -> DVec3;
    /// Current aim direction (unit vector).
    fn aim_direction(&self) -> DVec3;
    /// Fire a shell with the given launch force (m/s).
    fn fire(&mut self, launch_force: f64) -> ShotRecord;
}

/// Match-level queries: who is alive, what can be picked up.
pub trait ArenaState {
    /// Fill `out` with currently-alive agents of every opposing team.
    /// Clears `out` first.
    fn alive_opposing(&self, team: Team, out: &mut Vec<BodyId>);
    /// Number of power-ups currently active in the match.
    fn active_power_up_count(&self) -> usize;
    /// Health of a body, or `None` if it no longer exists.
    fn health(&self, body: BodyId) -> Option<HealthStatus>;
    /// Position of a body, or `None` if it no longer exists. This is the
    /// handle-validity query; handles are never dereferenced blindly.
    fn position_of(&self, body: BodyId) -> Option<Position>;
}

/// The host's movement actuator. The core emits scalar commands and never
/// mutates position or rotation directly.
pub trait DriveControl {
    /// Forward throttle in [-1, 1].
    fn set_throttle(&mut self, throttle: f64);
    /// Turn command in [-1, 1] (positive = clockwise).
    fn set_turn(&mut self, turn: f64);
}

/// Everything the decision core touches during one tick.
pub struct TickPorts<'a> {
    pub world: &'a dyn WorldQuery,
    pub arena: &'a dyn ArenaState,
    pub nav: &'a mut dyn NavAgent,
    pub turret: &'a mut dyn TurretControl,
    pub drive: &'a mut dyn DriveControl,
    pub pose: AgentPose,
    /// Elapsed simulation seconds.
    pub now: f64,
    /// Seconds covered by this tick.
    pub dt: f64,
}
