//! # siwes-demo
//!
//! Command-line walkthrough of the SIWES workbook.
//!
//! Builds an in-memory store (optionally filled with the demo dataset),
//! logs in as the configured user and prints that user's dashboard as JSON
//! on stdout.  Logs go to stderr.

mod config;

use anyhow::{bail, Context};
use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use siwes_client::commands::{dashboard, identity};
use siwes_client::{share, AppState};
use siwes_shared::constants::APP_NAME;
use siwes_store::Store;

use crate::config::{DemoConfig, LoginAs};

fn main() -> anyhow::Result<()> {
    // -----------------------------------------------------------------------
    // 1. Initialize tracing (respects RUST_LOG env var)
    // -----------------------------------------------------------------------
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,siwes_store=debug,siwes_client=debug")),
        )
        .init();

    info!("Starting {} demo v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    // -----------------------------------------------------------------------
    // 2. Load configuration
    // -----------------------------------------------------------------------
    let config = DemoConfig::from_env();
    info!(?config, "Loaded configuration");

    // -----------------------------------------------------------------------
    // 3. Build the store
    // -----------------------------------------------------------------------
    let now = Utc::now();
    let mut store = Store::new();
    if config.seed_demo {
        store.seed_demo(now).context("seeding demo data")?;
    }
    let mut state = AppState::new(share(store));

    // -----------------------------------------------------------------------
    // 4. Log in and render the dashboard
    // -----------------------------------------------------------------------
    let user = match &config.login {
        LoginAs::Role(role) => identity::login(&mut state, "", Some(*role))?,
        LoginAs::Email(email) => identity::login(&mut state, email, None)?,
    };
    let Some(user) = user else {
        bail!("no account matches {:?}", config.login);
    };
    info!(user_id = %user.id, role = %user.role, "Logged in as {}", user.name);

    let view = dashboard::dashboard(&state, now.date_naive())?;
    let json = if config.pretty {
        serde_json::to_string_pretty(&view)?
    } else {
        serde_json::to_string(&view)?
    };
    println!("{json}");

    identity::logout(&mut state);
    Ok(())
}
