//! Behavior finite state machine.
//!
//! Plain state-pattern data: states own action lists, transitions are
//! explicit rules evaluated once per tick after actions run. There is no
//! terminal state; the machine runs for the agent's entire lifetime.

use ironclad_core::enums::BehaviorState;

use crate::actions::Action;
use crate::agent::Agent;
use crate::config::AiConfig;
use crate::geometry::within_range;
use crate::ports::{AgentPose, ArenaState};

/// One FSM node: a behavior phase and the actions it runs each tick.
#[derive(Debug, Clone)]
pub struct State {
    pub id: BehaviorState,
    pub actions: Vec<Action>,
}

/// Condition under which a transition fires. A closed data enum so that
/// transition tables stay data, not code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionWhen {
    /// The agent holds a power-up target.
    PowerUpTargeted,
    /// The agent holds no power-up target.
    PowerUpLost,
    /// A living enemy target is within the given range (meters).
    EnemyWithin(f64),
    /// No living enemy target within the given range (meters).
    EnemyBeyond(f64),
}

impl TransitionWhen {
    fn holds(&self, agent: &Agent, pose: &AgentPose, arena: &dyn ArenaState) -> bool {
        match *self {
            TransitionWhen::PowerUpTargeted => agent.power_up_target.is_some(),
            TransitionWhen::PowerUpLost => agent.power_up_target.is_none(),
            TransitionWhen::EnemyWithin(range) => enemy_within(agent, pose, arena, range),
            TransitionWhen::EnemyBeyond(range) => !enemy_within(agent, pose, arena, range),
        }
    }
}

fn enemy_within(agent: &Agent, pose: &AgentPose, arena: &dyn ArenaState, range: f64) -> bool {
    match agent.enemy_target.and_then(|e| arena.position_of(e)) {
        Some(enemy_pos) => within_range(&pose.position, &enemy_pos, range),
        None => false,
    }
}

/// An explicit transition rule.
#[derive(Debug, Clone)]
pub struct Transition {
    pub from: BehaviorState,
    pub when: TransitionWhen,
    pub to: BehaviorState,
}

/// The per-agent state machine. Exactly one state is active at any time;
/// the initial state is host-configured at spawn.
#[derive(Debug, Clone)]
pub struct StateMachine {
    states: Vec<State>,
    transitions: Vec<Transition>,
    current: BehaviorState,
}

impl StateMachine {
    pub fn new(states: Vec<State>, transitions: Vec<Transition>, initial: BehaviorState) -> Self {
        Self {
            states,
            transitions,
            current: initial,
        }
    }

    pub fn current(&self) -> BehaviorState {
        self.current
    }

    /// Actions of the active state. Empty if the machine holds no state
    /// for the current id (a host configuration hole, tolerated as idle).
    pub fn active_actions(&self) -> &[Action] {
        self.states
            .iter()
            .find(|s| s.id == self.current)
            .map(|s| s.actions.as_slice())
            .unwrap_or(&[])
    }

    /// Evaluate transition rules in order; the first rule matching the
    /// active state fires. Returns the new state on a change.
    pub fn evaluate_transitions(
        &mut self,
        agent: &Agent,
        pose: &AgentPose,
        arena: &dyn ArenaState,
    ) -> Option<BehaviorState> {
        for rule in &self.transitions {
            if rule.from == self.current && rule.when.holds(agent, pose, arena) {
                if rule.to == self.current {
                    return None;
                }
                self.current = rule.to;
                return Some(rule.to);
            }
        }
        None
    }

    /// The stock tank behavior wiring: wander until an enemy closes to
    /// engagement range, fight while repositioning on a standoff ring,
    /// and break off for any scanned power-up.
    pub fn tank_default(cfg: &AiConfig, initial: BehaviorState) -> Self {
        let engage = cfg.max_engagement_range;
        let states = vec![
            State {
                id: BehaviorState::Wander,
                actions: vec![Action::Wander],
            },
            State {
                id: BehaviorState::RangedWander,
                actions: vec![Action::RangedWander, Action::Attack],
            },
            State {
                id: BehaviorState::Attack,
                actions: vec![Action::Attack, Action::RangedWander],
            },
            State {
                id: BehaviorState::PowerUp,
                actions: vec![Action::PursuePowerUp, Action::Attack],
            },
        ];
        let transitions = vec![
            Transition {
                from: BehaviorState::Wander,
                when: TransitionWhen::PowerUpTargeted,
                to: BehaviorState::PowerUp,
            },
            Transition {
                from: BehaviorState::Wander,
                when: TransitionWhen::EnemyWithin(engage),
                to: BehaviorState::Attack,
            },
            Transition {
                from: BehaviorState::RangedWander,
                when: TransitionWhen::PowerUpTargeted,
                to: BehaviorState::PowerUp,
            },
            Transition {
                from: BehaviorState::RangedWander,
                when: TransitionWhen::EnemyWithin(engage),
                to: BehaviorState::Attack,
            },
            Transition {
                from: BehaviorState::Attack,
                when: TransitionWhen::PowerUpTargeted,
                to: BehaviorState::PowerUp,
            },
            Transition {
                from: BehaviorState::Attack,
                when: TransitionWhen::EnemyBeyond(engage),
                to: BehaviorState::Wander,
            },
            Transition {
                from: BehaviorState::PowerUp,
                when: TransitionWhen::PowerUpLost,
                to: BehaviorState::Wander,
            },
        ];
        StateMachine::new(states, transitions, initial)
    }
}
