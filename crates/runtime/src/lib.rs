//! Runtime orchestration for turn-based space combat.
//!
//! This crate wires together the action provider abstraction, oracle access,
//! the player store and the event bus into a cohesive runtime API. Consumers
//! embed [`CombatRuntime`] to run encounters and subscribe to what they
//! produce.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for presentation layers
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
pub mod api;
pub mod events;
pub mod oracle;
pub mod repository;
pub mod runtime;

pub use api::{
    ActionProvider, FixedActionProvider, Result, RuntimeError, ScriptedActionProvider, TurnView,
};
pub use events::{Event, EventBus, SessionEvent, Topic, TurnEvent};
pub use oracle::{EnemyOracleImpl, ModuleOracleImpl, OracleManager};
pub use repository::{FilePilotRepository, InMemoryPilotRepo, PilotRepository, RepositoryError};
pub use runtime::{CombatRuntime, RuntimeBuilder, RuntimeConfig};
