use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

/// Kindling: hype classification for meme-coin chatter.
///
/// Reads a JSON array of post objects from standard input and prints a
/// single-line JSON classification to standard output. A non-zero exit
/// status means the input itself could not be read or parsed; a degraded
/// classification (neutral with an `error` field) still exits 0.
#[derive(Parser)]
#[command(name = "kindling", version, about)]
struct Cli {}

fn main() -> ExitCode {
    // Structured logging goes to stderr, off by default; stdout carries
    // exactly one JSON line.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kindling=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let _cli = Cli::parse();

    let mut raw = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut raw) {
        return fail(format!("Failed to read stdin: {e}"));
    }

    let posts = match kindling::posts::parse_posts(&raw) {
        Ok(posts) => posts,
        Err(e) => return fail(format!("{e:#}")),
    };

    debug!(posts = posts.len(), "Parsed input payload");

    let result = kindling::scoring::classify(&posts);

    let mut stdout = io::stdout();
    match kindling::output::write_result(&mut stdout, &result) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(format!("{e:#}")),
    }
}

/// Entry-point failure: print the neutral fallback shape and exit non-zero.
///
/// The exit status distinguishes "your input was invalid" from a
/// successful-but-unconfident classification, which also prints a neutral
/// shape but exits 0.
fn fail(message: String) -> ExitCode {
    let fallback = kindling::scoring::Classification::degraded(message);
    // If even the fallback cannot be serialized, the exit status alone
    // still signals the failure.
    if let Ok(json) = serde_json::to_string(&fallback) {
        println!("{json}");
    }
    ExitCode::FAILURE
}
