use std::sync::Arc;

use anyhow::{Error, Result};
use counter_core::{workload, AtomicCounter, Report, WorkloadOptions};

/// Run the workload on a fresh counter and insist on the expected value.
pub fn run(opts: &WorkloadOptions) -> Result<Report> {
    let counter = Arc::new(AtomicCounter::new());

    let report = workload::run(opts, counter)?;

    if !report.is_consistent() {
        return Err(Error::msg(format!(
            "lost updates detected: counter is {}, expected {}",
            report.value, report.expected
        )));
    }

    Ok(report)
}
