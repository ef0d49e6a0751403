mod collect;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tubemood")]
#[command(about = "YouTube comment sentiment analysis")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch comments for the configured videos and summarize their sentiment
    Collect {
        /// Video URL or id to analyze instead of the video list (repeatable)
        #[arg(long = "video", value_name = "URL")]
        videos: Vec<String>,

        /// Page cap per video (0 = unlimited); overrides `TUBEMOOD_MAX_PAGES`
        #[arg(long)]
        max_pages: Option<u32>,

        /// Comment cap per video (0 = unlimited); overrides `TUBEMOOD_MAX_RESULTS`
        #[arg(long)]
        max_results: Option<usize>,

        /// Number of frequent words to show
        #[arg(long, default_value_t = tubemood_sentiment::pipeline::DEFAULT_TOP_TOKENS)]
        top: usize,

        /// Write the scored comment table as CSV
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,

        /// Write the full report as JSON
        #[arg(long, value_name = "PATH")]
        json: Option<PathBuf>,
    },
    /// Score text offline and print its label
    Score {
        #[arg(required = true, value_name = "TEXT")]
        texts: Vec<String>,
    },
    /// List the configured videos with their resolved ids
    Videos {
        /// Video list file
        #[arg(
            long,
            env = "TUBEMOOD_VIDEOS_PATH",
            default_value = "./config/videos.yaml"
        )]
        file: PathBuf,
    },
}

/// Install the global subscriber. `RUST_LOG` wins over `default_level`.
fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Commands::Collect {
            videos,
            max_pages,
            max_results,
            top,
            csv,
            json,
        } => {
            let config = tubemood_core::load_app_config_from_env()?;
            init_tracing(&config.log_level)?;
            let options = collect::CollectOptions {
                videos,
                max_pages,
                max_results,
                top,
                csv,
                json,
            };
            collect::run_collect(&config, options).await?;
        }
        Commands::Score { texts } => {
            init_tracing("warn")?;
            report::write_scores(&mut std::io::stdout().lock(), &texts)?;
        }
        Commands::Videos { file } => {
            init_tracing("warn")?;
            collect::run_list_videos(&file)?;
        }
    }

    Ok(())
}
