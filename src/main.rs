//! calbridge - bridge between a web-view application shell and the device
//! calendar store.
//!
//! The shim speaks the bridge protocol as JSON over stdin/stdout: one
//! `Request` per line, one `Response` line back. The backing store is the
//! in-memory reference store, optionally seeded from a JSON file.

mod commands;
mod dispatch;
mod fields;
mod store;
mod tz;

use anyhow::{anyhow, Context, Result};
use calbridge_core::protocol::{Request, Response};
use chrono_tz::Tz;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use store::memory::MemoryStore;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calbridge")]
#[command(about = "Expose the device calendar store over a JSON line protocol")]
struct Cli {
    /// IANA timezone written on created events (defaults to $TZ, then UTC)
    #[arg(long)]
    timezone: Option<String>,

    /// JSON file of calendars and events to preload into the store
    #[arg(long)]
    seed: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let local_tz = resolve_timezone(cli.timezone.as_deref())?;
    let mut store = match &cli.seed {
        Some(path) => MemoryStore::from_seed_file(path)?,
        None => MemoryStore::new(),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;

        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(&line) {
            Ok(request) => dispatch::handle_request(&mut store, local_tz, request),
            Err(e) => Response::error(&format!("Failed to parse request: {e}")),
        };

        writeln!(stdout, "{response}")?;
        stdout.flush()?;
    }

    Ok(())
}

fn resolve_timezone(flag: Option<&str>) -> Result<Tz> {
    let Some(name) = flag
        .map(str::to_owned)
        .or_else(|| std::env::var("TZ").ok())
    else {
        return Ok(Tz::UTC);
    };

    name.parse()
        .map_err(|e| anyhow!("Unknown timezone '{name}': {e}"))
}
