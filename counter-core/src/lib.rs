mod constants;
mod counter;
mod options;

pub mod workload;

pub use constants::{DEFAULT_DECREMENTS, DEFAULT_INCREMENTS, DEFAULT_THREADS};
pub use counter::AtomicCounter;
pub use options::{
    utils::{options_from_file, ConfigFormat},
    workload::WorkloadOptions,
};
pub use workload::Report;
