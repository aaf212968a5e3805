mod cli;
mod commands;

use clap::Parser;
use storefront::error::formatter::ErrorFormatter;
use storefront::logging;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    let verbose = cli.verbose > 0;
    logging::init_logger(cli.verbose);

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{}", ErrorFormatter::new(verbose).format(&err));
        std::process::exit(1);
    }
}
