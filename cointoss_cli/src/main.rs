use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cointoss_core::{FlipController, FlipReport, HttpOutcomeService, ResetReport};

mod file_store;
mod terminal;

use file_store::FileStore;
use terminal::{TerminalView, TokioDelay};

#[derive(Parser)]
#[command(name = "cointoss", about = "Flip a coin against a cointoss server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Server base URL
    #[arg(long, env = "COINTOSS_SERVER_URL", default_value = "http://127.0.0.1:5000")]
    server_url: String,
    /// Where statistics are kept between runs
    #[arg(long, env = "COINTOSS_STATS_FILE", default_value = "cointoss_stats.json")]
    stats_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Flip the coin
    Flip {
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
    /// Show saved statistics
    Stats,
    /// Zero the statistics
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let assume_yes = matches!(cli.command, Commands::Reset { yes: true });
    // only a flip has an animation to wait out; the terminal notice never hides
    let delay = match cli.command {
        Commands::Flip { .. } => TokioDelay::new(),
        Commands::Stats | Commands::Reset { .. } => TokioDelay::instant(),
    };
    // attaching prints the saved counters
    let controller = FlipController::attach(
        HttpOutcomeService::new(&cli.server_url),
        FileStore::new(&cli.stats_file),
        TerminalView::new(assume_yes),
        delay,
    );

    match cli.command {
        Commands::Flip { count } => {
            for n in 1..=count {
                if let FlipReport::Failed(err) = controller.trigger_flip().await {
                    anyhow::bail!("flip {n} of {count} failed: {err}");
                }
            }
        }
        Commands::Stats => {}
        Commands::Reset { .. } => {
            if controller.reset_statistics().await == ResetReport::Declined {
                println!("Statistics kept.");
            }
        }
    }

    Ok(())
}
