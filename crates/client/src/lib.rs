//! Terminal client for the skirmish combat runtime.
//!
//! The `skirmish` binary is the composition root: it reads [`ClientConfig`]
//! from the environment, loads content through [`bootstrap`], and runs one
//! encounter with the [`terminal`] frontend.
pub mod bootstrap;
pub mod config;
pub mod terminal;

pub use config::ClientConfig;
