use std::net::SocketAddr;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use sporldl::{cli, config, error, warning};

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
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search an artist or playlist, pick tracks and download them (default)
    Fetch(FetchOptions),

    /// List the tracks an artist or playlist resolves to
    Search(SearchOptions),

    /// Download the given track strings
    Download(DownloadOptions),

    /// Run the HTTP backend
    Serve(ServeOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone, Default)]
pub struct FetchOptions {
    /// Artist or playlist name; prompted for when omitted
    #[clap(long, short)]
    pub query: Option<String>,

    /// Download every listed track without asking
    #[clap(long)]
    pub all: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Artist or playlist name
    #[clap(required = true, num_args = 1..)]
    pub query: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct DownloadOptions {
    /// Track strings, e.g. "Around the World Daft Punk"
    #[clap(required = true, num_args = 1..)]
    pub tracks: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Address to bind, overrides SERVER_ADDRESS
    #[clap(long)]
    pub addr: Option<SocketAddr>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Fetch(FetchOptions::default()));

    if let Command::Completions(opt) = &command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment file. Err: {}", e);
    }

    let config = match &command {
        Command::Download(_) => config::Config::downloads_only_from_env(),
        _ => config::Config::from_env(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => error!("Invalid configuration: {}", e),
    };

    match command {
        Command::Fetch(opt) => cli::fetch(&config, opt.query, opt.all).await,
        Command::Search(opt) => cli::search(&config, &opt.query.join(" ")).await,
        Command::Download(opt) => cli::download(&config, opt.tracks).await,
        Command::Serve(opt) => cli::serve(config, opt.addr).await,
        Command::Completions(_) => {}
    }
}
