//! Headless arena harness for IRONCLAD.
//!
//! `ArenaEngine` owns the hecs ECS world, implements the host ports the
//! decision core consumes, runs systems at a fixed tick rate, and
//! produces `ArenaSnapshot`s. Completely deterministic for a given seed.

pub mod engine;
pub mod snapshot;
pub mod stage;
pub mod systems;
pub mod vehicle;
pub mod world_setup;

pub use engine::ArenaEngine;
pub use ironclad_core as core;

#[cfg(test)]
mod tests;
