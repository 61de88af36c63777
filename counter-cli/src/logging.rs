use anyhow::{Error, Result};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

/// Install a stderr-only logger, leaving stdout to the final counter value.
pub fn init(level: &str) -> Result<()> {
    let level: LevelFilter = level
        .parse()
        .map_err(|_| Error::msg(format!("unknown log level: {}", level)))?;

    let encoder = Box::new(PatternEncoder::new("{d(%Y-%m-%d %H:%M:%S%.3f)} {h({l})} [{M}] {m}{n}"));
    let console = ConsoleAppender::builder().encoder(encoder).target(Target::Stderr).build();

    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(console)))
        .build(Root::builder().appender("console").build(level))?;

    log4rs::init_config(config)?;

    Ok(())
}
