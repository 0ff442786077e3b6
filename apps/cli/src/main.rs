//! Chroma CLI - interactive color format converter.
//!
//! Prompts for a source format, a target format and a color value, then
//! prints the converted value. Runs until interrupted or stdin closes.

mod repl;

use clap::Parser;
use colored::Colorize;
use tokio::signal;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Chroma - convert colors between hex, rgb, hsv and hsl notations
#[derive(Parser, Debug)]
#[command(
    name = "chroma",
    author,
    version,
    about = "Convert colors between hex, rgb, hsv and hsl",
    long_about = "Chroma is an interactive color converter.\nPick a source format, a target format, enter a value, and get the converted color back."
)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber =
        FmtSubscriber::builder().with_max_level(level).without_time().with_target(false).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Register SIGINT handler so Ctrl-C ends the session even mid-read.
    tokio::spawn(async {
        if let Ok(()) = signal::ctrl_c().await {
            println!("\n{}", repl::FAREWELL.cyan());
            std::process::exit(0);
        }
    });

    repl::run()
}
