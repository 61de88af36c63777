use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};

use super::utils::options_from_file;
use crate::constants::{DEFAULT_DECREMENTS, DEFAULT_INCREMENTS, DEFAULT_THREADS};

#[derive(clap::Args, Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WorkloadOptions {
    /// Workload file in YAML/JSON format, [default: <empty>]
    #[clap(long)]
    #[serde(skip)]
    pub config: Option<String>,

    /// Number of worker threads
    #[clap(short, long, default_value_t = DEFAULT_THREADS)]
    pub threads: usize,

    /// Increments performed by each worker
    #[clap(short, long, default_value_t = DEFAULT_INCREMENTS)]
    pub increments: u64,

    /// Decrements performed by each worker after its increments
    #[clap(short, long, default_value_t = DEFAULT_DECREMENTS)]
    pub decrements: u64,

    /// Log progress every N milliseconds while workers run, [default: <empty>]
    #[clap(long)]
    pub progress_interval: Option<u64>,
}

impl Default for WorkloadOptions {
    fn default() -> Self {
        Self {
            config: None,
            threads: DEFAULT_THREADS,
            increments: DEFAULT_INCREMENTS,
            decrements: DEFAULT_DECREMENTS,
            progress_interval: None,
        }
    }
}

impl WorkloadOptions {
    /// Replace the current options with those from `config`, keeping the path.
    pub fn try_load_from_file(&mut self, config: &str) -> Result<()> {
        let mut file_opts = options_from_file::<WorkloadOptions>(config)?;
        file_opts.config = Some(config.to_string());
        *self = file_opts;
        Ok(())
    }

    pub fn check(&self) -> Result<()> {
        if self.threads == 0 {
            return Err(Error::msg("-t or --threads must be greater than 0."));
        }

        if self.progress_interval == Some(0) {
            return Err(Error::msg("--progress-interval must be greater than 0."));
        }

        if self.expected_value().is_none() {
            return Err(Error::msg(format!(
                "the expected value of {} threads x ({} - {}) overflows a 64-bit counter.",
                self.threads, self.increments, self.decrements
            )));
        }

        Ok(())
    }

    /// The value a zeroed counter must hold once every worker has finished.
    pub fn expected_value(&self) -> Option<i64> {
        let threads = i64::try_from(self.threads).ok()?;
        let increments = i64::try_from(self.increments).ok()?;
        let decrements = i64::try_from(self.decrements).ok()?;

        increments.checked_sub(decrements)?.checked_mul(threads)
    }
}
