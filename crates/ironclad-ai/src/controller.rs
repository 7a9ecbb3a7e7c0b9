//! The per-agent decision cycle.
//!
//! Composes the scanner, enemy selector, priority arbitration, and state
//! machine into one synchronous tick, invoked by the host once per
//! simulation frame per agent.

use rand::Rng;

use ironclad_core::components::{BodyId, Team};
use ironclad_core::enums::{BehaviorState, TargetPriority};
use ironclad_core::events::BehaviorEvent;

use crate::agent::Agent;
use crate::attack::ShootingEnvelope;
use crate::config::AiConfig;
use crate::fsm::StateMachine;
use crate::ports::{RayHit, TickPorts};
use crate::scanner::PowerUpScanner;
use crate::targeting::ensure_enemy_target;

/// One agent's brain: decision state, behavior machine, and the scratch
/// buffers its queries reuse between ticks.
pub struct AgentController {
    pub agent: Agent,
    machine: StateMachine,
    scanner: PowerUpScanner,
    cfg: AiConfig,
    envelope: ShootingEnvelope,
    ray_scratch: Vec<RayHit>,
    candidate_scratch: Vec<BodyId>,
}

impl AgentController {
    pub fn new(body: BodyId, team: Team, cfg: AiConfig, machine: StateMachine) -> Self {
        let scanner = PowerUpScanner::new(cfg.powerup_scan_radius, cfg.powerup_scan_max_results);
        let envelope = ShootingEnvelope::derive(&cfg);
        Self {
            agent: Agent::new(body, team),
            machine,
            scanner,
            cfg,
            envelope,
            ray_scratch: Vec::new(),
            candidate_scratch: Vec::new(),
        }
    }

    /// A controller with the stock tank config and behavior wiring.
    pub fn tank(body: BodyId, team: Team, initial: BehaviorState) -> Self {
        let cfg = AiConfig::default();
        let machine = StateMachine::tank_default(&cfg, initial);
        Self::new(body, team, cfg, machine)
    }

    pub fn state(&self) -> BehaviorState {
        self.machine.current()
    }

    pub fn config(&self) -> &AiConfig {
        &self.cfg
    }

    pub fn envelope(&self) -> &ShootingEnvelope {
        &self.envelope
    }

    pub fn set_stopped(&mut self, stopped: bool) {
        self.agent.stopped = stopped;
    }

    /// Run one decision tick.
    pub fn tick<R: Rng>(
        &mut self,
        ports: &mut TickPorts,
        rng: &mut R,
        events: &mut Vec<BehaviorEvent>,
    ) {
        if self.agent.stopped {
            return;
        }

        // 1. Refresh the power-up target from a bounded proximity scan.
        self.agent.power_up_target = self
            .scanner
            .scan(ports.world, ports.arena, ports.pose.position);

        // 2. Re-acquire the enemy target if the current one is invalid.
        ensure_enemy_target(
            &mut self.agent,
            ports.arena,
            rng,
            &mut self.candidate_scratch,
            events,
        );

        // 3. Resolve movement priority: a present power-up always
        //    outranks combat movement. Firing is gated separately.
        self.agent.priority = if self.agent.power_up_target.is_some() {
            TargetPriority::PowerUp
        } else {
            TargetPriority::Enemy
        };

        // 4. Run the active state's actions in order.
        for &action in self.machine.active_actions() {
            action.run(
                &mut self.agent,
                &self.cfg,
                &self.envelope,
                ports,
                rng,
                &mut self.ray_scratch,
                events,
            );
        }

        // 5. Evaluate transitions after actions.
        if let Some(next) = self
            .machine
            .evaluate_transitions(&self.agent, &ports.pose, ports.arena)
        {
            events.push(BehaviorEvent::StateEntered {
                agent: self.agent.body,
                state: next,
            });
        }
    }
}
