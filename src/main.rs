use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use apodcli::{cli, config, warning};

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
    /// Show pictures and videos for a date range
    Gallery(GalleryOptions),

    /// Date window and archive bounds
    Info(InfoOptions),

    /// Print a random space fact
    Fact,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct GalleryOptions {
    /// First day of the range (YYYY-MM-DD), defaults to nine days ago
    #[clap(long)]
    pub start_date: Option<String>,

    /// Last day of the range (YYYY-MM-DD), defaults to today
    #[clap(long)]
    pub end_date: Option<String>,

    /// Open the details of the given tile
    #[clap(long)]
    pub open: Option<usize>,

    /// Keep prompting for tiles to open
    #[clap(long, short)]
    pub interactive: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct InfoOptions {
    #[clap(long)]
    range: bool,
    #[clap(long)]
    archive: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Gallery(opt) => {
            cli::gallery(opt.start_date, opt.end_date, opt.open, opt.interactive).await
        }
        Command::Info(opt) => cli::info(opt.range, opt.archive),
        Command::Fact => cli::fact(),
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
