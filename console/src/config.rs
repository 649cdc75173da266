use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use clientes_core::DEFAULT_API_BASE;

#[derive(Debug, Clone, Parser)]
#[command(name = "clientes")]
#[command(about = "Gerenciamento de clientes pelo terminal")]
pub struct Config {
    /// Base address of the clientes API.
    #[arg(long, env = "CLIENTES_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Origin serving `/partials/*`; defaults to the API base.
    #[arg(long, env = "CLIENTES_FRONTEND_BASE")]
    pub frontend_base: Option<String>,

    #[arg(long, env = "CLIENTES_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Config {
    pub fn frontend_base(&self) -> &str {
        self.frontend_base.as_deref().unwrap_or(&self.api_base)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<()> {
        for (flag, value) in [("--api-base", self.api_base.as_str()), ("--frontend-base", self.frontend_base())] {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                bail!("{flag} must be an http(s) URL, got {value:?}");
            }
        }
        if self.timeout_secs == 0 {
            bail!("--timeout-secs must be greater than zero");
        }
        Ok(())
    }
}
