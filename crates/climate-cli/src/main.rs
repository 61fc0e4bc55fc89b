mod clean;
mod report;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use climate_core::{AveragePolicy, SurveyConfig};
use tracing_subscriber::EnvFilter;

use report::ReportFormat;

#[derive(Debug, Parser)]
#[command(name = "climate")]
#[command(about = "Rank feelings from an emotional climate survey dump")]
struct Cli {
    #[command(flatten)]
    survey: SurveyArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Overrides for the `CLIMATE_*` environment configuration.
#[derive(Debug, Args)]
struct SurveyArgs {
    /// Survey dump to read
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Literal string separating question blocks
    #[arg(long, global = true)]
    delimiter: Option<String>,

    /// First block to keep (zero-indexed; negative counts from the end)
    #[arg(long, global = true, allow_negative_numbers = true)]
    start: Option<i64>,

    /// Block to stop before (negative counts from the end)
    #[arg(
        long,
        global = true,
        allow_negative_numbers = true,
        conflicts_with = "to_end"
    )]
    end: Option<i64>,

    /// Keep every block from `--start` to the last one
    #[arg(long, global = true)]
    to_end: bool,

    /// Which bracketed word in a block names the feeling
    #[arg(long, global = true, allow_negative_numbers = true)]
    label_index: Option<i64>,

    /// How unmapped responses count: propagate, exclude or zero
    #[arg(long, global = true)]
    policy: Option<AveragePolicy>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rank feelings by average response weight (default)
    Rank {
        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
    /// Show how each selected block cleans, including skip reasons
    Clean,
}

impl SurveyArgs {
    fn apply(&self, config: &mut SurveyConfig) -> anyhow::Result<()> {
        if let Some(input) = &self.input {
            config.input_path.clone_from(input);
        }
        if let Some(delimiter) = &self.delimiter {
            anyhow::ensure!(!delimiter.is_empty(), "--delimiter must be non-empty");
            config.delimiter.clone_from(delimiter);
        }
        if let Some(start) = self.start {
            config.block_range.start = start;
        }
        if let Some(end) = self.end {
            config.block_range.end = Some(end);
        }
        if self.to_end {
            config.block_range.end = None;
        }
        if let Some(label_index) = self.label_index {
            config.label_index = label_index;
        }
        if let Some(policy) = self.policy {
            config.average_policy = policy;
        }
        Ok(())
    }
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = climate_core::load_survey_config()?;
    cli.survey.apply(&mut config)?;
    init_tracing(&config.log_level)?;

    tracing::debug!(?config, "configuration resolved");

    let mut stdout = std::io::stdout().lock();
    let result = match cli.command {
        Some(Commands::Rank { format }) => report::run_rank(&config, format, &mut stdout),
        Some(Commands::Clean) => clean::run_clean(&config, &mut stdout),
        None => report::run_rank(&config, ReportFormat::Text, &mut stdout),
    };
    result.with_context(|| format!("survey run over {} failed", config.input_path.display()))
}
