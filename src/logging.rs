//! Logger setup on top of log4rs.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const STDERR_APPENDER: &str = "stderr";
const STDERR_PATTERN: &str = "{h({l}):<5} {m}{n}";

/// Install the global logger.
///
/// With `config_file` the log4rs YAML file decides everything and `level` is
/// ignored. Otherwise all records at `level` and above go to stderr.
pub fn init_logging(level: LevelFilter, config_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    match config_file {
        Some(file) => log4rs::init_file(file, Default::default())?,
        None => {
            log4rs::init_config(stderr_config(level)?)?;
        }
    }
    Ok(())
}

fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build(STDERR_APPENDER, Box::new(stderr)))
        .build(Root::builder().appender(STDERR_APPENDER).build(level))?;
    Ok(config)
}
