// src/main.rs
//
// richtext-guard — sanitize tracker descriptions from the command line
//
// - Reads one document (file or stdin), runs it through the selected mode and
//   writes the result to a file or stdout.
// - Modes:
//     • html        : allowlisted markup subset (default)
//     • text        : plain text, block boundaries as line breaks
//     • description : html plus placeholder for empty input and <br> tidying
// - Input bytes are decoded lossily; the sanitizer accepts any text.
//
// CLI flags:
//   --mode <MODE>          : html | text | description
//   --placeholder <TEXT>   : localized placeholder text for description mode
//   --max-len <BYTES>      : truncate input (at a char boundary) before sanitizing
// Logging: RUST_LOG (e.g. RUST_LOG=richtext_guard=debug), written to stderr.

use clap::{Parser, ValueEnum};
use richtext_guard::description::DEFAULT_PLACEHOLDER_TEXT;
use richtext_guard::{sanitize_html, sanitize_pr_description_with, strip_html};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    Html,
    Text,
    Description,
}

/// CLI flags
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Output flavour
    #[arg(long, value_enum, default_value_t = Mode::Html)]
    mode: Mode,

    /// Placeholder text for empty descriptions (description mode)
    #[arg(long, default_value = DEFAULT_PLACEHOLDER_TEXT)]
    placeholder: String,

    /// Truncate input to at most this many bytes before sanitizing
    #[arg(long = "max-len", value_name = "BYTES")]
    max_len: Option<usize>,

    /// Input file, or "-" for stdin
    input: PathBuf,

    /// Output file (default: stdout)
    output: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let raw = if cli.input.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        fs::read(&cli.input)?
    };
    let mut src = String::from_utf8_lossy(&raw).into_owned();
    if let Some(max) = cli.max_len {
        truncate_at_char_boundary(&mut src, max);
    }

    let out = run(cli.mode, &src, &cli.placeholder);
    tracing::debug!(mode = ?cli.mode, in_len = src.len(), out_len = out.len(), "sanitized");

    match &cli.output {
        Some(path) => fs::write(path, out)?,
        None => io::stdout().write_all(out.as_bytes())?,
    }
    Ok(())
}

fn run(mode: Mode, src: &str, placeholder: &str) -> String {
    match mode {
        Mode::Html => sanitize_html(src),
        Mode::Text => strip_html(src),
        Mode::Description => sanitize_pr_description_with(Some(src), placeholder),
    }
}

fn truncate_at_char_boundary(s: &mut String, max: usize) {
    if s.len() <= max {
        return;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    tracing::debug!(from = s.len(), to = end, "truncated input");
    s.truncate(end);
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}
