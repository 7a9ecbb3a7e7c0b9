//! Per-tick scene snapshot serving the world and match-state ports.
//!
//! Captured once at the top of each tick from the ECS world, then read by
//! every controller. Collecting into a borrow-free view up front keeps
//! hecs borrows out of the decision loop and gives all agents the same
//! frame-consistent scene.

use std::cmp::Ordering;

use glam::DVec3;
use hecs::World;

use ironclad_core::components::{BodyId, Collider, Health, Team};
use ironclad_core::enums::CollisionLayer;
use ironclad_core::types::Position;

use ironclad_ai::ports::{ArenaState, HealthStatus, RayHit, WorldQuery};

/// One collidable body as seen this tick.
#[derive(Debug, Clone, Copy)]
pub struct StageBody {
    pub body: BodyId,
    pub position: Position,
    pub radius: f64,
    pub layer: CollisionLayer,
    pub team: Option<u8>,
    pub health: Option<(f64, f64)>,
}

/// Immutable scene view for one tick.
#[derive(Debug, Default)]
pub struct StageView {
    bodies: Vec<StageBody>,
}

impl StageView {
    /// Capture every collidable body from the world.
    pub fn capture(world: &World) -> Self {
        let mut bodies = Vec::new();
        let mut query =
            world.query::<(&BodyId, &Position, &Collider, Option<&Team>, Option<&Health>)>();
        for (_entity, (body, pos, collider, team, health)) in query.iter() {
            bodies.push(StageBody {
                body: *body,
                position: *pos,
                radius: collider.radius,
                layer: collider.layer,
                team: team.map(|t| t.0),
                health: health.map(|h| (h.current, h.starting)),
            });
        }
        Self { bodies }
    }

    pub fn bodies(&self) -> &[StageBody] {
        &self.bodies
    }

    /// Ray/sphere intersection distance, if the sphere is hit within
    /// `max_distance`. Bodies the ray starts inside of are not reported.
    fn ray_hit_distance(origin: DVec3, dir: DVec3, max_distance: f64, body: &StageBody) -> Option<f64> {
        let center = DVec3::from(body.position);
        let oc = center - origin;
        let tca = oc.dot(dir);
        if tca < 0.0 {
            return None;
        }
        let d_sq = oc.length_squared() - tca * tca;
        let r_sq = body.radius * body.radius;
        if d_sq > r_sq {
            return None;
        }
        let thc = (r_sq - d_sq).sqrt();
        let t = tca - thc;
        if t < 0.0 || t > max_distance {
            return None;
        }
        Some(t)
    }
}

impl WorldQuery for StageView {
    fn raycast(&self, origin: Position, direction: DVec3, max_distance: f64, out: &mut Vec<RayHit>) {
        out.clear();
        let origin = DVec3::from(origin);
        let dir = direction.normalize_or_zero();
        if dir == DVec3::ZERO {
            return;
        }

        for body in &self.bodies {
            if let Some(distance) = Self::ray_hit_distance(origin, dir, max_distance, body) {
                out.push(RayHit {
                    body: body.body,
                    layer: body.layer,
                    distance,
                });
            }
        }
        out.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal));
    }

    fn overlap_sphere(
        &self,
        center: Position,
        radius: f64,
        layer: CollisionLayer,
        max_results: usize,
        out: &mut Vec<BodyId>,
    ) {
        out.clear();
        let radius_sq = radius * radius;
        for body in &self.bodies {
            if out.len() >= max_results {
                break;
            }
            if body.layer == layer && center.range_sq_to(&body.position) <= radius_sq {
                out.push(body.body);
            }
        }
    }
}

impl ArenaState for StageView {
    fn alive_opposing(&self, team: Team, out: &mut Vec<BodyId>) {
        out.clear();
        for body in &self.bodies {
            if body.layer != CollisionLayer::Vehicle {
                continue;
            }
            let opposing = body.team.map(|t| t != team.0).unwrap_or(false);
            let alive = body.health.map(|(current, _)| current > 0.0).unwrap_or(false);
            if opposing && alive {
                out.push(body.body);
            }
        }
    }

    fn active_power_up_count(&self) -> usize {
        self.bodies
            .iter()
            .filter(|b| b.layer == CollisionLayer::Pickup)
            .count()
    }

    fn health(&self, body: BodyId) -> Option<HealthStatus> {
        self.bodies
            .iter()
            .find(|b| b.body == body)
            .and_then(|b| b.health)
            .map(|(current, starting)| HealthStatus {
                current,
                starting,
                is_dead: current <= 0.0,
            })
    }

    fn position_of(&self, body: BodyId) -> Option<Position> {
        self.bodies
            .iter()
            .find(|b| b.body == body)
            .map(|b| b.position)
    }
}
