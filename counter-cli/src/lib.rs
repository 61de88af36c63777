pub mod commands;
pub mod logging;
pub mod options;
pub mod utils;
