use std::path::PathBuf;

use clap::Parser;
use maze_components::{process, Symbols, PATH, WALL};
use miette::{Context, IntoDiagnostic};
use tracing::warn;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Count the connected regions of path cells in a maze read as
/// `N M` followed by N x M whitespace-separated cells.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Character marking an impassable cell
    #[arg(short, long, default_value_t = WALL)]
    wall: char,

    /// Character marking a traversable cell
    #[arg(short, long, default_value_t = PATH)]
    path: char,

    /// Read the maze from this file instead of stdin
    input: Option<PathBuf>,
}

#[tracing::instrument]
fn main() -> miette::Result<()> {
    init();

    let args = Args::parse();
    if args.wall == args.path {
        warn!(symbol = %args.wall, "wall and path symbols are identical");
    }

    let input = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("read {}", path.display()))?,
        None => std::io::read_to_string(std::io::stdin())
            .into_diagnostic()
            .context("read stdin")?,
    };

    let result = process(&input, Symbols::new(args.wall, args.path)).context("count components")?;
    println!("{}", result);
    Ok(())
}

fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr)
        .try_init();
}
