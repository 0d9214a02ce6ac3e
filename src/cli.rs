//! CLI argument parsing with clap.

use crate::source::DEFAULT_SOURCE_URL;
use crate::Config;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vpnlist")]
#[command(version, about = "Download a VPN IP list and save it sorted as JSON or CSV")]
pub struct Cli {
    /// The destination file path (.json, .csv, optionally with .gz)
    #[arg(long, default_value = "vpnlist.json")]
    pub destination: PathBuf,

    /// The source URL
    #[arg(long, default_value = DEFAULT_SOURCE_URL)]
    pub source: String,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug output)
    #[arg(short, long)]
    pub verbose: bool,

    /// log4rs YAML file replacing the built-in stderr logger
    #[arg(long)]
    pub log_config: Option<PathBuf>,
}

impl Cli {
    /// Log level from the verbosity flags. `--verbose` wins over `--quiet`.
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Error
        } else {
            LevelFilter::Info
        }
    }

    pub fn config(&self) -> Config {
        Config {
            source: self.source.clone(),
            destination: self.destination.clone(),
        }
    }
}
