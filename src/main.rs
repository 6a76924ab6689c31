//! Universe Wizard
//!
//! Entry point for the Dioxus Desktop database settings step.
//!
//! Configuration is read from the file named by `UNIVERSE_WIZARD_CONFIG`;
//! without it the built-in defaults are used. Log levels follow `RUST_LOG`.

use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use wizard_core::WizardConfig;

/// Environment variable naming the configuration file
const CONFIG_ENV: &str = "UNIVERSE_WIZARD_CONFIG";

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            let path = PathBuf::from(path);
            WizardConfig::load(&path)
                .with_context(|| format!("loading configuration from {}", path.display()))?
        }
        None => {
            tracing::info!("{} not set, using default configuration", CONFIG_ENV);
            WizardConfig::default()
        }
    };

    let strings = config
        .translations()
        .context("loading translation bundle")?;

    // Launch the Dioxus desktop application
    wizard_ui::launch(config, strings);
    Ok(())
}
