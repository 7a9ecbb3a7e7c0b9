//! Enemy target selection.

use rand::Rng;

use ironclad_core::components::BodyId;
use ironclad_core::events::BehaviorEvent;

use crate::agent::Agent;
use crate::ports::ArenaState;

/// Re-acquire the agent's enemy target if the current one is unset or
/// dead. Draws a uniformly random candidate from the currently-alive
/// opposing set; an empty set leaves the target unset. A living current
/// target is never replaced.
///
/// Uniform-random selection is a placeholder for smarter ranking; the
/// invariant callers rely on is switch-only-when-invalid.
pub fn ensure_enemy_target<R: Rng>(
    agent: &mut Agent,
    arena: &dyn ArenaState,
    rng: &mut R,
    candidates: &mut Vec<BodyId>,
    events: &mut Vec<BehaviorEvent>,
) {
    let current_alive = agent
        .enemy_target
        .and_then(|t| arena.health(t))
        .map(|h| !h.is_dead)
        .unwrap_or(false);
    if current_alive {
        return;
    }

    arena.alive_opposing(agent.team, candidates);
    if candidates.is_empty() {
        agent.enemy_target = None;
        return;
    }

    let pick = candidates[rng.gen_range(0..candidates.len())];
    agent.enemy_target = Some(pick);
    events.push(BehaviorEvent::TargetAcquired {
        agent: agent.body,
        enemy: pick,
    });
}
