//! Public API surface for runtime consumers.
mod errors;
mod providers;

pub use errors::{RepositoryError, Result, RuntimeError};
pub use providers::{
    ActionProvider, FixedActionProvider, ScriptedActionProvider, TurnView,
};
