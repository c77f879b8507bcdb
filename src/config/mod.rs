pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-lookup")]
#[command(about = "An interactive directory lookup session with a deadline")]
pub struct CliConfig {
    #[arg(long, default_value = "Awesome Lookup")]
    pub title: String,

    #[arg(long, default_value = "10")]
    pub queries: u32,

    #[arg(long, default_value = "10")]
    pub timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log session resource stats")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn title(&self) -> &str {
        &self.title
    }

    fn query_budget(&self) -> u32 {
        self.queries
    }

    fn session_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("title", &self.title)?;
        validate_positive_number("queries", u64::from(self.queries), 1)?;
        validate_positive_number("timeout-secs", self.timeout_secs, 1)?;
        Ok(())
    }
}
