use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use vpnlist::cli::Cli;
use vpnlist::error::error_chain;
use vpnlist::logging::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    if let Err(e) = init_logging(cli.log_level(), cli.log_config.as_deref()) {
        eprintln!("{} initializing logging: {e}", "ERROR".red());
        return ExitCode::FAILURE;
    }
    log::debug!("#Start main()");

    match vpnlist::run(&cli.config()).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            let chain = error_chain(&e);
            log::error!("{chain}");
            eprintln!("{} {chain}", "ERROR".red());
            ExitCode::FAILURE
        }
    }
}
