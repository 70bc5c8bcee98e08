use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use query_runner::{cli, RunConfig};

#[derive(Parser)]
#[command(
    name = "query-runner",
    about = "Resolve a named query runner and print the number it returns",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(
        short,
        long,
        global = true,
        env = "QUERY_RUNNER_LOG_LEVEL",
        help = "Set the log level"
    )]
    log_level: Option<Level>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Run a query runner and print its number")]
    Run {
        #[arg(help = "Query runner name (prompted for when omitted)")]
        name: Option<String>,

        #[arg(short = 'c', long, help = "Path to a TOML run configuration")]
        config: Option<PathBuf>,
    },

    #[command(about = "List available query runners")]
    List,

    #[command(about = "Generate a sample run configuration")]
    Sample {
        #[arg(short = 'o', long, help = "Output file path")]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.command {
        Commands::Run {
            config: Some(path), ..
        } => Some(RunConfig::from_file(path)?),
        _ => None,
    };

    // Initialize logging; stdout is reserved for the result
    let log_level = match (cli.log_level, &config) {
        (Some(level), _) => level,
        (None, Some(config)) => Level::from_str(&config.runner.log_level)?,
        (None, None) => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Run { name, .. } => {
            let number = cli::run_query(name, config)?;
            println!("{}", number);
        }

        Commands::List => {
            info!("Listing available query runners");
            cli::list_runners()?;
        }

        Commands::Sample { output } => {
            cli::write_sample(output)?;
        }
    }

    Ok(())
}
