mod app;
mod config;
mod export;
mod input;
mod lookup;
mod storage;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use lookup::{LookupQuery, LyricsResult, Resolver};

#[derive(Debug, Parser)]
#[command(name = "verso", version, about = "Lyrics lookup for the terminal")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Look up a song and print the result to stdout (headless).
    Lookup {
        artist: String,
        song: String,
    },
    /// Dump the full lookup result as JSON to stdout (headless).
    LookupJson {
        artist: String,
        song: String,
    },
    /// Look up a song and save the lyrics to a text file.
    Save {
        artist: String,
        song: String,
        /// Output directory (defaults to the configured download dir).
        #[arg(long)]
        out: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            let mut terminal = tui::TerminalGuard::enter().context("init terminal")?;
            let mut app = app::App::new(cfg)?;
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Lookup { artist, song } => {
            let resolution = resolve_headless(&cfg, &artist, &song).await?;
            print_resolution(&resolution);
        }
        Command::LookupJson { artist, song } => {
            let resolution = resolve_headless(&cfg, &artist, &song).await?;
            println!("{}", serde_json::to_string_pretty(&resolution)?);
        }
        Command::Save { artist, song, out } => {
            let resolution = resolve_headless(&cfg, &artist, &song).await?;
            match &resolution.lyrics {
                LyricsResult::Found { text } => {
                    let dir = out.unwrap_or_else(|| cfg.download_dir());
                    let path = export::write_lyrics_file(&dir, artist.trim(), song.trim(), text)?;
                    println!("Saved {}", path.display());
                }
                other => {
                    print_lyrics_result(other);
                }
            }
        }
    }

    Ok(())
}

async fn resolve_headless(
    cfg: &config::Config,
    artist: &str,
    song: &str,
) -> anyhow::Result<lookup::Resolution> {
    let query = LookupQuery::new(artist, song)
        .context("artist and song must both be non-empty")?;
    let resolver = Resolver::new(cfg.genius.token.clone());
    Ok(resolver.resolve(&query).await)
}

fn print_resolution(resolution: &lookup::Resolution) {
    print_lyrics_result(&resolution.lyrics);

    if let Some(info) = &resolution.song_info {
        println!();
        println!("Album:    {}", info.album);
        println!("Released: {}", info.release_date);
        println!("Artwork:  {}", info.artwork_url);
        if let Some(preview) = &info.preview_url {
            println!("Preview:  {}", preview);
        }
    }
}

fn print_lyrics_result(lyrics: &LyricsResult) {
    match lyrics {
        LyricsResult::Found { text } => println!("{}", text),
        LyricsResult::ExternalLink { url } => {
            println!("Lyrics not available in the API. View them here:");
            println!("{}", url);
        }
        LyricsResult::NotFound => println!("{}", lookup::NOT_FOUND_MESSAGE),
        LyricsResult::Error { message } => println!("{}", message),
    }
}
