//! Power-up proximity scanner.

use std::cmp::Ordering;

use ironclad_core::components::BodyId;
use ironclad_core::enums::CollisionLayer;
use ironclad_core::types::Position;

use crate::ports::{ArenaState, WorldQuery};

/// Bounded proximity query for the nearest active power-up.
///
/// Scratch buffers are sized once at construction; steady-state scans do
/// not allocate.
#[derive(Debug)]
pub struct PowerUpScanner {
    radius: f64,
    max_results: usize,
    ids: Vec<BodyId>,
    ranked: Vec<(f64, BodyId)>,
}

impl PowerUpScanner {
    pub fn new(radius: f64, max_results: usize) -> Self {
        Self {
            radius,
            max_results,
            ids: Vec::with_capacity(max_results),
            ranked: Vec::with_capacity(max_results),
        }
    }

    /// Nearest power-up within the search radius, by ascending squared
    /// distance; ties keep the world's enumeration order (stable sort).
    /// Short-circuits without querying when the match has no active
    /// power-ups.
    pub fn scan(
        &mut self,
        world: &dyn WorldQuery,
        arena: &dyn ArenaState,
        position: Position,
    ) -> Option<BodyId> {
        if arena.active_power_up_count() == 0 {
            return None;
        }

        world.overlap_sphere(
            position,
            self.radius,
            CollisionLayer::Pickup,
            self.max_results,
            &mut self.ids,
        );

        self.ranked.clear();
        for &id in &self.ids {
            // A pickup can vanish between the overlap query and here;
            // skip anything the match no longer knows.
            if let Some(pos) = arena.position_of(id) {
                self.ranked.push((position.range_sq_to(&pos), id));
            }
        }

        self.ranked
            .sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        self.ranked.first().map(|&(_, id)| id)
    }
}
