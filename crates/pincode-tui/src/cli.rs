//! Command-line flags

use std::path::PathBuf;

use clap::Parser;
use pincode_core::InputRule;

use crate::app::{ConfigStore, TuiConfig};

#[derive(Parser, Debug)]
#[command(name = "pincode-tui")]
#[command(about = "Terminal PIN code entry form", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of boxes to start with (3-200)
    #[arg(short, long)]
    pub count: Option<u32>,

    /// Input rule: ONLY_NUMBER or ALL
    #[arg(short, long)]
    pub rule: Option<InputRule>,

    /// Start with values masked
    #[arg(long)]
    pub hidden: bool,

    /// Simulated submit delay in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Config file path (defaults to ~/.config/pincode-form/config.json)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    ///
    /// Returns the effective configuration and the store that form changes
    /// are saved to, if a config location is known.
    pub fn resolve_config(&self) -> (TuiConfig, Option<ConfigStore>) {
        let store = ConfigStore::open(self.config.clone());
        let base = store
            .as_ref()
            .map(|store| store.config().clone())
            .unwrap_or_default();

        (self.apply_overrides(base), store)
    }

    /// Overlay the flags that were given on `config`
    pub fn apply_overrides(&self, mut config: TuiConfig) -> TuiConfig {
        if let Some(count) = self.count {
            config.default_count = count;
        }
        if let Some(rule) = self.rule {
            config.default_rule = rule;
        }
        if self.hidden {
            config.hidden = true;
        }
        if let Some(delay) = self.delay_ms {
            config.submit_delay_ms = delay;
        }

        config.clamped()
    }
}
