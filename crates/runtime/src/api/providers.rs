//! Asynchronous abstraction for sourcing the player's choice each turn.
//!
//! Runtime users plug in [`ActionProvider`] implementations so an encounter
//! can run with human input, scripted fixtures, or a fixed policy.
use std::collections::VecDeque;

use async_trait::async_trait;
use combat_core::{CombatSession, CombatantState, PlayerAction, ResourcePool};
use tokio::sync::Mutex;

use super::errors::{Result, RuntimeError};

/// Read-only view of the encounter handed to a provider before each turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnView {
    pub turn: u32,
    /// Header lines shown before the action menu.
    pub status_lines: Vec<String>,
    pub player: CombatantState,
    pub enemy: CombatantState,
    pub resources: ResourcePool,
}

impl TurnView {
    pub fn of(session: &CombatSession<'_>) -> Self {
        Self {
            turn: session.turn(),
            status_lines: session.status_lines(),
            player: session.player().clone(),
            enemy: session.enemy().clone(),
            resources: *session.resources(),
        }
    }
}

/// Trait for providing the player's action for the coming turn.
///
/// Different implementations can handle:
/// - Terminal input
/// - Scripted/replayed actions
/// - Testing fixtures
#[async_trait]
pub trait ActionProvider: Send + Sync {
    /// Provide the action for the turn described by `view`.
    ///
    /// Returning an error aborts the encounter without writing anything back.
    async fn provide_action(&self, view: &TurnView) -> Result<PlayerAction>;
}

/// Always answers with the same action.
/// Useful for testing or as a fallback.
pub struct FixedActionProvider(pub PlayerAction);

#[async_trait]
impl ActionProvider for FixedActionProvider {
    async fn provide_action(&self, _view: &TurnView) -> Result<PlayerAction> {
        Ok(self.0)
    }
}

/// Replays a fixed list of actions, one per turn.
///
/// Once the list runs dry the provider behaves like a closed input channel.
pub struct ScriptedActionProvider {
    actions: Mutex<VecDeque<PlayerAction>>,
}

impl ScriptedActionProvider {
    pub fn new(actions: impl IntoIterator<Item = PlayerAction>) -> Self {
        Self {
            actions: Mutex::new(actions.into_iter().collect()),
        }
    }

    pub async fn remaining(&self) -> usize {
        self.actions.lock().await.len()
    }
}

#[async_trait]
impl ActionProvider for ScriptedActionProvider {
    async fn provide_action(&self, _view: &TurnView) -> Result<PlayerAction> {
        self.actions
            .lock()
            .await
            .pop_front()
            .ok_or(RuntimeError::ActionProviderChannelClosed)
    }
}
