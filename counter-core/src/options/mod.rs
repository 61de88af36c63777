pub mod utils;
pub mod workload;
