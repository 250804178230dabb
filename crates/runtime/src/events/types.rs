//! Event payloads published during an encounter.

use combat_core::{CombatOutcome, SessionSummary, TurnReport};
use serde::{Deserialize, Serialize};

/// Encounter-level cues, e.g. for banners or combat audio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A fight has started.
    Engaged {
        pilot: String,
        enemy: String,
        class: String,
        /// `"Combat initiated: <name> (<class>)"`
        intro: String,
    },
    /// The fight is over and the record has been written back.
    Ended {
        pilot: String,
        outcome: CombatOutcome,
        summary: SessionSummary,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// Published right before the action provider is asked for input.
    Started { turn: u32, status_lines: Vec<String> },
    /// Everything the resolved turn produced.
    Resolved { report: TurnReport },
}
