mod cli;
mod fetch_ui;
mod format;
mod output;

use clap::Parser;
use pinku::error::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Initialize logger; RUST_LOG still overrides the default level
    let default_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let Some(api_key) = cli::api_key(std::env::var(cli::API_KEY_VAR).ok()) else {
        println!("{} environment variable not found", cli::API_KEY_VAR);
        return Ok(());
    };

    cli::run(&args, &api_key)
}
