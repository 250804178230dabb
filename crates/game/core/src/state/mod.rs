//! Mutable combat state.
//!
//! Combatant records and the player's resource pool are owned by a session
//! for the duration of one encounter. [`PilotRecord`] is the persistent
//! counterpart that outlives it.
mod combatant;
mod error;
mod pilot;
mod resources;

pub use combatant::CombatantState;
pub use error::{ResourceError, StateError};
pub use pilot::{Loadout, PilotRecord, ShipProfile};
pub use resources::{ResourceCost, ResourceKind, ResourcePool};
