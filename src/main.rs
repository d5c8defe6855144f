use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use lyricmood::{cli, config, error, report};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Import fetched liked tracks as the raw snapshot
    Import(ImportOptions),

    /// Score the sentiment of every track's lyrics
    Analyze,

    /// Summarize mood over time and export the series for plotting
    Report(ReportOptions),

    /// Train the sentiment model from labelled corpora
    Train(TrainOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ImportOptions {
    /// JSON array of tracks (id, name, artist, add_time, lyrics)
    #[clap(long)]
    pub input: PathBuf,

    /// Only keep the first N tracks
    #[clap(long)]
    pub limit: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct ReportOptions {
    /// Only write mood_report.json, skip the tables
    #[clap(long)]
    pub json_only: bool,

    /// Number of histogram bins
    #[clap(long, default_value_t = report::HISTOGRAM_BINS)]
    pub bins: usize,

    /// Rolling window of the daily calendar, in days
    #[clap(long, default_value_t = report::CALENDAR_WINDOW_DAYS)]
    pub window: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct TrainOptions {
    /// Positive corpus, one document per line
    #[clap(long)]
    pub positive: PathBuf,

    /// Negative corpus, one document per line
    #[clap(long)]
    pub negative: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Import(opt) => cli::import(opt.input, opt.limit).await,
        Command::Analyze => cli::analyze().await,
        Command::Report(opt) => cli::report(opt.json_only, opt.bins, opt.window).await,
        Command::Train(opt) => cli::train(opt.positive, opt.negative).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
