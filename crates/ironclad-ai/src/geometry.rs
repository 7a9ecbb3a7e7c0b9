//! Geometric and targeting utilities shared by the decision modules.

use glam::DVec3;

use ironclad_core::components::BodyId;
use ironclad_core::enums::CollisionLayer;
use ironclad_core::types::Position;

use crate::ports::{RayHit, WorldQuery};

/// Whether `b` lies within `max_range` of `a`. Compares squared distances;
/// no square root on the per-tick path.
pub fn within_range(a: &Position, b: &Position, max_range: f64) -> bool {
    a.range_sq_to(b) <= max_range * max_range
}

/// Linear remap of `value` from `[in_min, in_max]` to `[out_min, out_max]`
/// with the input clamped to its range. A degenerate input span falls back
/// to `out_min` instead of dividing by zero.
pub fn remap_clamped(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let span = in_max - in_min;
    if span.abs() < f64::EPSILON {
        return out_min;
    }
    let t = ((value - in_min) / span).clamp(0.0, 1.0);
    out_min + (out_max - out_min) * t
}

/// Shortest signed angle from bearing `from` to bearing `to`, wrapped to
/// `[-π, π]`. Positive = clockwise (toward increasing bearing).
pub fn signed_bearing_delta(from: f64, to: f64) -> f64 {
    let mut delta = (to - from).rem_euclid(std::f64::consts::TAU);
    if delta > std::f64::consts::PI {
        delta -= std::f64::consts::TAU;
    }
    delta
}

/// Result of a line-of-fire evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineOfFire {
    /// Whether an unblocked shot at a vehicle exists along the aim ray.
    pub clear: bool,
    /// Distance to the confirmed hit, or -1.0 when nothing was confirmed.
    pub distance: f64,
}

impl LineOfFire {
    /// Nothing in the way, but also nothing confirmed hit.
    const NONE: LineOfFire = LineOfFire {
        clear: false,
        distance: -1.0,
    };
}

/// Evaluate the line of fire from `origin` along `aim` toward `target`.
///
/// The ray length is the straight-line distance to the target. Hits are
/// walked in ascending-distance order: the shooter's own body is skipped;
/// the first hit on any non-vehicle layer is a blocking obstacle (scan
/// stops, no shot); the first hit on another vehicle is an unblocked shot
/// reported with its hit distance.
pub fn line_of_fire(
    world: &dyn WorldQuery,
    shooter: BodyId,
    origin: Position,
    aim: DVec3,
    target: Position,
    scratch: &mut Vec<RayHit>,
) -> LineOfFire {
    let max_distance = origin.range_to(&target);
    world.raycast(origin, aim, max_distance, scratch);

    for hit in scratch.iter() {
        if hit.body == shooter {
            continue;
        }
        match hit.layer {
            CollisionLayer::Vehicle => {
                return LineOfFire {
                    clear: true,
                    distance: hit.distance,
                }
            }
            // Neutral layers block conservatively.
            _ => return LineOfFire::NONE,
        }
    }

    LineOfFire::NONE
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ScriptedRays {
        hits: Vec<RayHit>,
    }

    impl WorldQuery for ScriptedRays {
        fn raycast(
            &self,
            _origin: Position,
            _direction: DVec3,
            _max_distance: f64,
            out: &mut Vec<RayHit>,
        ) {
            out.clear();
            out.extend(self.hits.iter().copied());
        }

        fn overlap_sphere(
            &self,
            _center: Position,
            _radius: f64,
            _layer: CollisionLayer,
            _max_results: usize,
            out: &mut Vec<BodyId>,
        ) {
            out.clear();
        }
    }

    fn hit(id: u32, layer: CollisionLayer, distance: f64) -> RayHit {
        RayHit {
            body: BodyId(id),
            layer,
            distance,
        }
    }

    fn evaluate(hits: Vec<RayHit>) -> LineOfFire {
        let world = ScriptedRays { hits };
        let mut scratch = Vec::new();
        line_of_fire(
            &world,
            BodyId(0),
            Position::new(0.0, 0.0, 2.0),
            DVec3::new(0.0, 1.0, 0.0),
            Position::new(0.0, 10.0, 0.0),
            &mut scratch,
        )
    }

    #[test]
    fn test_clear_shot_reports_hit_distance() {
        let lof = evaluate(vec![hit(5, CollisionLayer::Vehicle, 2.0)]);
        assert_eq!(
            lof,
            LineOfFire {
                clear: true,
                distance: 2.0
            }
        );
    }

    #[test]
    fn test_obstacle_blocks_before_vehicle() {
        let lof = evaluate(vec![
            hit(9, CollisionLayer::Obstacle, 1.0),
            hit(5, CollisionLayer::Vehicle, 2.0),
        ]);
        assert_eq!(
            lof,
            LineOfFire {
                clear: false,
                distance: -1.0
            }
        );
    }

    #[test]
    fn test_own_body_is_skipped() {
        let lof = evaluate(vec![
            hit(0, CollisionLayer::Vehicle, 0.5),
            hit(5, CollisionLayer::Vehicle, 2.0),
        ]);
        assert_eq!(
            lof,
            LineOfFire {
                clear: true,
                distance: 2.0
            }
        );
    }

    #[test]
    fn test_no_hits_is_not_a_shot() {
        let lof = evaluate(vec![]);
        assert_eq!(
            lof,
            LineOfFire {
                clear: false,
                distance: -1.0
            }
        );
    }

    #[test]
    fn test_within_range_boundary() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 0.0);
        assert!(within_range(&a, &b, 5.0));
        assert!(within_range(&a, &b, 5.1));
        assert!(!within_range(&a, &b, 4.9));
    }

    #[test]
    fn test_remap_clamped_endpoints_and_clamp() {
        assert_eq!(remap_clamped(10.0, 10.0, 20.0, 1.0, 3.0), 1.0);
        assert_eq!(remap_clamped(20.0, 10.0, 20.0, 1.0, 3.0), 3.0);
        assert_eq!(remap_clamped(15.0, 10.0, 20.0, 1.0, 3.0), 2.0);
        // Out-of-range inputs clamp to the output bounds.
        assert_eq!(remap_clamped(0.0, 10.0, 20.0, 1.0, 3.0), 1.0);
        assert_eq!(remap_clamped(99.0, 10.0, 20.0, 1.0, 3.0), 3.0);
    }

    #[test]
    fn test_remap_clamped_degenerate_span() {
        // Zero input span must not divide by zero.
        assert_eq!(remap_clamped(5.0, 10.0, 10.0, 1.0, 3.0), 1.0);
    }

    #[test]
    fn test_signed_bearing_delta_wraps() {
        use std::f64::consts::{FRAC_PI_2, PI};

        assert!((signed_bearing_delta(0.0, FRAC_PI_2) - FRAC_PI_2).abs() < 1e-10);
        assert!((signed_bearing_delta(FRAC_PI_2, 0.0) + FRAC_PI_2).abs() < 1e-10);
        // Crossing North: 350° to 10° is +20°, not -340°.
        let from = 350.0_f64.to_radians();
        let to = 10.0_f64.to_radians();
        assert!((signed_bearing_delta(from, to) - 20.0_f64.to_radians()).abs() < 1e-10);
        // Opposite bearings resolve to ±π.
        assert!((signed_bearing_delta(0.0, PI).abs() - PI).abs() < 1e-10);
    }
}
