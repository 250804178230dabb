//! High-level runtime orchestrator.
//!
//! The runtime owns the oracles, the player store and the action provider,
//! and exposes a builder-based API for clients to run encounters. It drives
//! a [`CombatSession`] turn by turn, awaiting the provider between turns and
//! publishing everything the session produces on the [`EventBus`].

use std::sync::Arc;

use tokio::sync::broadcast;

use combat_core::{
    CombatConfig, CombatOutcome, CombatSession, EnemyTemplate, PilotRecord, SessionSummary,
};

use crate::api::{ActionProvider, Result, RuntimeError, TurnView};
use crate::events::{Event, EventBus, SessionEvent, Topic, TurnEvent};
use crate::oracle::OracleManager;
use crate::repository::PilotRepository;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub combat: CombatConfig,
    pub event_buffer_size: usize,
    /// Fixed session seed. A fresh random seed is drawn per encounter when
    /// unset.
    pub seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            combat: CombatConfig::default(),
            event_buffer_size: 100,
            seed: None,
        }
    }
}

/// Runs encounters between stored pilots and enemy templates.
pub struct CombatRuntime {
    config: RuntimeConfig,
    oracles: OracleManager,
    pilots: Arc<dyn PilotRepository>,
    provider: Box<dyn ActionProvider>,
    events: EventBus,
}

impl CombatRuntime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    pub fn pilots(&self) -> &dyn PilotRepository {
        self.pilots.as_ref()
    }

    /// Cloneable handle to the event bus.
    pub fn events(&self) -> EventBus {
        self.events.clone()
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.events.subscribe(topic)
    }

    /// Fights `enemy_id` with the stored pilot `pilot_id` and saves the
    /// updated record.
    ///
    /// # Errors
    ///
    /// Fails if the pilot or the enemy template is unknown, the provider
    /// gives up, or the store cannot be read or written. A failed encounter
    /// leaves the stored record untouched.
    pub async fn engage(&self, pilot_id: &str, enemy_id: &str) -> Result<CombatOutcome> {
        let mut pilot = self
            .pilots
            .load(pilot_id)?
            .ok_or_else(|| RuntimeError::PilotNotFound(pilot_id.to_owned()))?;
        let template = self.oracles.as_combat_env().enemy_template(enemy_id)?;

        let summary = self.fight(&mut pilot, &template).await?;
        self.pilots.save(pilot_id, &pilot)?;
        tracing::debug!(pilot_id, credits = pilot.credits, "pilot record saved");

        self.publish_end(&pilot, &summary);
        Ok(summary.outcome)
    }

    /// Fights `enemy` with a caller-owned record, writing the results back
    /// into `pilot`.
    pub async fn engage_pilot(
        &self,
        pilot: &mut PilotRecord,
        enemy: &EnemyTemplate,
    ) -> Result<SessionSummary> {
        let summary = self.fight(pilot, enemy).await?;
        self.publish_end(pilot, &summary);
        Ok(summary)
    }

    async fn fight(
        &self,
        pilot: &mut PilotRecord,
        enemy: &EnemyTemplate,
    ) -> Result<SessionSummary> {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let loadout = pilot.loadout(self.oracles.modules());
        let mut session = CombatSession::start(
            self.oracles.as_combat_env(),
            self.config.combat.clone(),
            loadout,
            enemy,
            seed,
        )?;

        tracing::info!(pilot = %pilot.name, enemy = %enemy.id, seed, "combat initiated");
        self.events.publish(SessionEvent::Engaged {
            pilot: pilot.name.clone(),
            enemy: enemy.name.clone(),
            class: enemy.class.clone(),
            intro: session.intro_line(),
        });

        while !session.is_finished() {
            let view = TurnView::of(&session);
            self.events.publish(TurnEvent::Started {
                turn: view.turn,
                status_lines: view.status_lines.clone(),
            });

            let action = self.provider.provide_action(&view).await?;
            let report = session.play_turn(action)?;

            for module in &report.unknown_modules {
                tracing::warn!(turn = report.turn, %module, "loadout references an unknown module");
            }
            tracing::debug!(turn = report.turn, ?action, outcome = ?report.outcome, "turn resolved");
            self.events.publish(TurnEvent::Resolved { report });
        }

        let summary = session.finish()?;
        pilot.apply_summary(&summary);
        tracing::info!(
            pilot = %pilot.name,
            outcome = %summary.outcome,
            turns = summary.turns,
            "combat ended"
        );
        Ok(summary)
    }

    fn publish_end(&self, pilot: &PilotRecord, summary: &SessionSummary) {
        self.events.publish(SessionEvent::Ended {
            pilot: pilot.name.clone(),
            outcome: summary.outcome,
            summary: summary.clone(),
        });
    }
}

/// Builder for [`CombatRuntime`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleManager>,
    pilots: Option<Arc<dyn PilotRepository>>,
    provider: Option<Box<dyn ActionProvider>>,
    events: Option<EventBus>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            oracles: None,
            pilots: None,
            provider: None,
            events: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Set required player store
    pub fn pilots(mut self, pilots: impl PilotRepository + 'static) -> Self {
        self.pilots = Some(Arc::new(pilots));
        self
    }

    /// Share an existing player store
    pub fn shared_pilots(mut self, pilots: Arc<dyn PilotRepository>) -> Self {
        self.pilots = Some(pilots);
        self
    }

    /// Set required action provider
    pub fn action_provider(mut self, provider: impl ActionProvider + 'static) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Reuse an existing bus so subscribers can be attached before building.
    /// Otherwise one is created with `event_buffer_size` capacity.
    pub fn event_bus(mut self, events: EventBus) -> Self {
        self.events = Some(events);
        self
    }

    pub fn build(self) -> Result<CombatRuntime> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;
        let pilots = self.pilots.ok_or(RuntimeError::MissingRepository)?;
        let provider = self.provider.ok_or(RuntimeError::ProviderNotSet)?;
        let events = self
            .events
            .unwrap_or_else(|| EventBus::with_capacity(self.config.event_buffer_size));

        Ok(CombatRuntime {
            config: self.config,
            oracles,
            pilots,
            provider,
            events,
        })
    }
}
