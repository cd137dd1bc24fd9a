use beamscore_core::config::SurfaceConfig;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Optional JSON config file; command-line flags override its values
    #[arg(global = true, short, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Render(cmd::render::RenderArgs),
    Sweep(cmd::sweep::SweepArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    // Logs go to stderr so csv/json piped from stdout stays clean.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("🚀 Initializing BeamScore...");

    let (cli_config, sub_matches) = match &cli.command {
        Commands::Render(args) => (
            &args.config,
            matches.subcommand_matches("render").unwrap(),
        ),
        Commands::Sweep(args) => (&args.config, matches.subcommand_matches("sweep").unwrap()),
    };

    let mut config = if let Some(path) = &cli.config {
        info!("📂 Loading config: {}", path);
        SurfaceConfig::load_from_file(path).unwrap_or_else(|e| {
            error!("❌ {}", e);
            process::exit(1);
        })
    } else {
        SurfaceConfig::default()
    };
    config.merge_from_cli(cli_config, sub_matches);

    if let Err(e) = config.validate() {
        error!("❌ {}", e);
        process::exit(1);
    }

    let result = match cli.command {
        Commands::Render(args) => cmd::render::run(&args, &config),
        Commands::Sweep(args) => cmd::sweep::run(&args, &config),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
