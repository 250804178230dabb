//! Skirmish client binary.
//!
//! Assembles content, the player store and the runtime, then plays one
//! encounter against the configured enemy in the terminal.
//!
//! # Examples
//!
//! ```bash
//! SKIRMISH_SEED=42 RUST_LOG=debug cargo run -p skirmish-client
//! ```

use std::sync::Arc;

use anyhow::Result;
use combat_runtime::{CombatRuntime, EventBus, RuntimeConfig, RuntimeError};
use skirmish_client::terminal::{Presenter, StdinActionProvider};
use skirmish_client::{ClientConfig, bootstrap};
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    tracing::debug!(?config, "Starting skirmish client");

    let content = bootstrap::load_content(&config.data_dir)?;
    let pilots = bootstrap::open_store(&config.save_dir, &config.pilot_id, &content.starter)?;

    let events = EventBus::with_capacity(config.event_buffer);
    let presenter = Arc::new(Mutex::new(Presenter::subscribe(&events)));

    let runtime = CombatRuntime::builder()
        .config(RuntimeConfig {
            combat: content.combat,
            event_buffer_size: config.event_buffer,
            seed: config.seed,
        })
        .oracles(content.oracles)
        .shared_pilots(pilots)
        .event_bus(events)
        .action_provider(StdinActionProvider::new(Arc::clone(&presenter)))
        .build()?;

    let result = runtime.engage(&config.pilot_id, &config.enemy_id).await;
    presenter.lock().await.flush();

    match result {
        Ok(_) => {
            if let Some(pilot) = runtime.pilots().load(&config.pilot_id)? {
                println!(
                    "{}: {} credits | Hull {} | Shields {} | Power {} | Ammo {}",
                    pilot.name, pilot.credits, pilot.hull, pilot.shields, pilot.power_grid, pilot.ammo
                );
            }
        }
        Err(RuntimeError::ActionProviderChannelClosed) => {
            println!();
            tracing::warn!("Input closed, encounter abandoned without saving");
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
