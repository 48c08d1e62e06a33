use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use dartcoach::config::Config;
use dartcoach::history::{self, SessionRecord};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON array of stored sessions.
    #[arg(global = true, long)]
    history: Option<String>,

    /// JSON file with planner, tendency and training parameters.
    #[arg(global = true, long = "config")]
    config_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Score(cmd::score::ScoreArgs),
    Checkout(cmd::checkout::CheckoutArgs),
    Accuracy(cmd::accuracy::AccuracyArgs),
    Tendencies(cmd::tendency::TendencyArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.command {
        Commands::Score(_) | Commands::Accuracy(_) => Config::default(),
        Commands::Checkout(args) => resolve_config(&cli, &args.config, &matches, "checkout"),
        Commands::Tendencies(args) => {
            resolve_config(&cli, &args.config, &matches, "tendencies")
        }
    };

    let records = load_records(&cli);

    match cli.command {
        Commands::Score(args) => cmd::score::run(args),
        Commands::Checkout(args) => cmd::checkout::run(args, &config, &records),
        Commands::Accuracy(args) => cmd::accuracy::run(args, &records),
        Commands::Tendencies(_) => cmd::tendency::run(&config, &records),
    }
}

/// File config first, then whatever the user typed on the subcommand.
fn resolve_config(cli: &Cli, cli_config: &Config, matches: &ArgMatches, name: &str) -> Config {
    let Some(path) = &cli.config_file else {
        return cli_config.clone();
    };

    let mut config = Config::load_from_file(path).unwrap_or_else(|e| {
        error!("Failed to load config {}: {}", path, e);
        process::exit(1);
    });
    if let Some(sub_matches) = matches.subcommand_matches(name) {
        config.merge_from_cli(cli_config, sub_matches);
    }
    config
}

fn load_records(cli: &Cli) -> Vec<SessionRecord> {
    match &cli.history {
        Some(path) => history::load_history(path).unwrap_or_else(|e| {
            error!("Failed to load history {}: {}", path, e);
            process::exit(1);
        }),
        None => {
            info!("No history given; planning with an empty ledger");
            Vec::new()
        }
    }
}
