//! Repository layer for dynamic runtime data
//!
//! Repositories handle data that CHANGES between encounters: the pilot
//! record with its ship and loadout.
//!
//! Static combat content (modules, enemy templates) is handled by Oracles,
//! not Repositories.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FilePilotRepository;
pub use memory::InMemoryPilotRepo;
pub use traits::PilotRepository;
