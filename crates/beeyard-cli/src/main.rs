//! Bee Yard CLI: the `beeyard` command.

mod cli;
mod commands;
mod config;
mod present;
mod support;

use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let config = Config::load(cli.global.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });
    init_tracing(cli.global.verbose, config.log_level.as_deref());

    let data_dir = config.resolve_data_dir(cli.global.data_dir.as_deref());

    match cli.command {
        Commands::Init { json } => commands::init::run(&data_dir, json),
        Commands::Hive { command } => commands::hive::run(command, &data_dir),
        Commands::Inspection { command } => commands::inspection::run(command, &data_dir),
        Commands::Harvest { command } => commands::harvest::run(command, &data_dir),
        Commands::Stats { json } => commands::stats::run(&data_dir, json),
        Commands::Feed {
            sugar_kg,
            feed_type,
            json,
        } => commands::feed::run(sugar_kg, feed_type, json),
        Commands::Season { season, all, json } => commands::season::run(season, all, json),
        Commands::Settings { command } => commands::settings::run(command, &data_dir),
    }
}

/// Logs go to stderr so `--json` stdout stays machine-readable.
///
/// Filter precedence: `BEEYARD_LOG`, `RUST_LOG`, `-v` count, config
/// `log_level`, then `warn`.
fn init_tracing(verbose: u8, config_level: Option<&str>) {
    let from_verbosity = match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    };
    let filter = EnvFilter::try_from_env("BEEYARD_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| {
            let directive = from_verbosity.or(config_level).unwrap_or("warn");
            EnvFilter::try_new(directive).unwrap_or_else(|e| {
                eprintln!("warning: invalid log level `{directive}`: {e}");
                EnvFilter::new("warn")
            })
        });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .try_init();
}
