use anyhow::Result;
use clap::Parser;
use counter_core::WorkloadOptions;

#[derive(Parser, Debug)]
#[clap(name = "counter", version, about)]
pub struct Cli {
    #[clap(flatten)]
    pub workload: WorkloadOptions,

    /// Log level written to stderr
    #[clap(long, default_value = "warn", possible_values = &["off", "error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

impl Cli {
    /// Workload options with --config applied and validated.
    pub fn workload_options(&self) -> Result<WorkloadOptions> {
        let mut opts = self.workload.clone();

        if let Some(config) = &self.workload.config {
            log::info!("loading workload from {}", config);
            opts.try_load_from_file(config)?;
        }

        opts.check()?;

        Ok(opts)
    }
}
