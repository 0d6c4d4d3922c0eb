//! Tabhead demo shell
//!
//! Static page frame around the tab header widget. All state lives in the
//! widget; the shell only mounts it and renders the frame.

mod frame;
mod state;

pub use frame::{Frame, ShellView};
pub use state::AppState;

use anyhow::Context;
use tabhead_core::Config;

/// Mount the widget against the on-disk store and print one rendered frame
pub fn run() -> anyhow::Result<()> {
    tabhead_core::init_logging();

    let config = Config::default();
    let state = AppState::open(&config)
        .with_context(|| format!("failed to mount tab header from {}", config.database_path.display()))?;

    let view = state.render()?;
    println!("{}", serde_json::to_string_pretty(&view)?);

    tracing::info!("Tabhead shell rendered");

    Ok(())
}
