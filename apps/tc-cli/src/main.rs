//! tc-cli — answer a batch of transit catalogue requests.
//!
//! Reads a request document (stdin by default), builds the catalogue and,
//! when the matching settings are present, the router and the map renderer,
//! then writes the answers (stdout by default).  Logs go to stderr; the
//! level comes from `RUST_LOG` and defaults to `info`.
//!
//! `--format json` (the default) reads a JSON document and writes a JSON
//! array.  `--format text` reads counted `Stop`/`Bus` lines followed by
//! counted queries and writes one answer line per query.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tc_requests::{process_document, process_text, Document};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// JSON request document in, JSON response array out
    Json,
    /// Line-oriented requests in, one answer line per query out
    Text,
}

#[derive(Parser, Debug)]
#[command(
    name = "tc-cli",
    version,
    about = "Answer stop, bus and route requests over a transit catalogue"
)]
struct Args {
    /// Request document.  Reads stdin when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the answers.  Writes stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input and output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Pretty-print JSON responses
    #[arg(long)]
    pretty: bool,

    /// Show debug messages regardless of RUST_LOG
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let t0 = Instant::now();
    match args.format {
        Format::Json => {
            let document = match &args.input {
                Some(path) => Document::from_path(path),
                None => Document::from_reader(BufReader::new(io::stdin().lock())),
            }
            .context("failed to read request document")?;

            let responses = process_document(&document)?;
            let mut writer = open_output(args.output.as_deref())?;
            if args.pretty {
                serde_json::to_writer_pretty(&mut writer, &responses)?;
            } else {
                serde_json::to_writer(&mut writer, &responses)?;
            }
            writeln!(writer)?;
            writer.flush()?;
        }
        Format::Text => {
            let text = read_input(args.input.as_deref()).context("failed to read request document")?;
            let answers = process_text(&text)?;
            let mut writer = open_output(args.output.as_deref())?;
            writer.write_all(answers.as_bytes())?;
            writer.flush()?;
        }
    }

    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "done");
    Ok(())
}

fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().lock().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn open_output(path: Option<&Path>) -> Result<BufWriter<Box<dyn Write>>> {
    let writer: Box<dyn Write> = match path {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    Ok(BufWriter::new(writer))
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
