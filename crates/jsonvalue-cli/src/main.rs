//! `jsonvalue` CLI — check, compact, query, and measure JSON documents.
//!
//! ## Usage
//!
//! ```sh
//! # Compact JSON (stdin → stdout): no whitespace, sorted keys
//! echo '{ "b": 1, "a": [1.5] }' | jsonvalue format
//!
//! # Compact from file to file
//! jsonvalue format -i data.json -o data.min.json
//!
//! # Validate; --strict also rejects trailing content
//! jsonvalue check --strict -i data.json
//!
//! # Print the value at a dotted path (`*` matches every element with --all)
//! jsonvalue get servers.0.host -i config.json
//! jsonvalue get --all 'servers.*.host' -i config.json
//!
//! # Show node counts, nesting depth and size reduction
//! jsonvalue stats -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jsonvalue_core::path::select;
use jsonvalue_core::reader::{parse_prefix, DEFAULT_MAX_DEPTH};
use jsonvalue_core::{lookup, serialize, ReaderConfig, Value};
use std::collections::BTreeMap;
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(name = "jsonvalue", version, about = "Compact JSON reader/writer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Maximum array/object nesting accepted by the reader (0 for no limit)
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Combine `\uD83D\uDE00`-style surrogate pair escapes into one character
    #[arg(long, global = true)]
    join_surrogates: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite JSON in compact form
    Format {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Validate JSON and report the first error
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Reject non-whitespace content after the first value
        #[arg(long)]
        strict: bool,
    },
    /// Print the value at a dotted path (exit code 1 if absent)
    Get {
        /// Dotted path such as `servers.0.host`
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Treat `*` segments as wildcards and print every match on its own line
        #[arg(long)]
        all: bool,
    },
    /// Show document statistics (node counts, depth, compaction ratio)
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match cli.max_depth {
        0 => ReaderConfig::unbounded(),
        limit => ReaderConfig::default().with_max_depth(limit),
    }
    .with_surrogate_pairs(cli.join_surrogates);

    match cli.command {
        Commands::Format { input, output } => {
            let text = read_input(input.as_deref())?;
            let value = parse_document(&text, config, false)?;
            write_output(output.as_deref(), &serialize(&value))?;
        }
        Commands::Check { input, strict } => {
            let text = read_input(input.as_deref())?;
            let value = parse_document(&text, config, strict)?;
            println!("ok: {}", value.type_name());
        }
        Commands::Get { path, input, all } => {
            let text = read_input(input.as_deref())?;
            let value = parse_document(&text, config, false)?;
            let matches = if all {
                select(&value, &path)
            } else {
                Some(lookup(&value, &path))
                    .filter(|found| !found.is_undefined())
                    .into_iter()
                    .collect()
            };
            if matches.is_empty() {
                process::exit(1);
            }
            for found in matches {
                println!("{}", serialize(found));
            }
        }
        Commands::Stats { input } => {
            let text = read_input(input.as_deref())?;
            let value = parse_document(&text, config, false)?;
            let compact = serialize(&value);

            let mut stats = Stats::default();
            stats.visit(&value, 0);

            let input_bytes = text.len();
            let output_bytes = compact.len();
            let ratio = if input_bytes > 0 {
                (1.0 - (output_bytes as f64 / input_bytes as f64)) * 100.0
            } else {
                0.0
            };
            for (name, count) in &stats.counts {
                println!("{:<12} {}", format!("{name}:"), count);
            }
            println!("{:<12} {}", "Max depth:", stats.max_depth);
            println!("{:<12} {} bytes", "Input size:", input_bytes);
            println!("{:<12} {} bytes", "Compact:", output_bytes);
            println!("{:<12} {:.1}%", "Reduction:", ratio);
        }
    }

    Ok(())
}

/// Parse `text`, optionally requiring that nothing but whitespace follows
/// the first value.
fn parse_document(text: &str, config: ReaderConfig, strict: bool) -> Result<Value> {
    let (value, consumed) = parse_prefix(text, config).context("Failed to parse JSON")?;
    if strict {
        let rest = &text[consumed..];
        if let Some(extra) = rest.find(|c: char| !matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0C')) {
            anyhow::bail!(
                "Trailing content after JSON value at offset {}",
                consumed + extra
            );
        }
    }
    Ok(value)
}

/// Node counts keyed by type name (sorted), plus the deepest container level.
#[derive(Default)]
struct Stats {
    counts: BTreeMap<&'static str, usize>,
    max_depth: usize,
}

impl Stats {
    fn visit(&mut self, value: &Value, depth: usize) {
        *self.counts.entry(value.type_name()).or_default() += 1;
        match value {
            Value::Array(items) => {
                self.max_depth = self.max_depth.max(depth + 1);
                for item in items {
                    self.visit(item, depth + 1);
                }
            }
            Value::Object(members) => {
                self.max_depth = self.max_depth.max(depth + 1);
                for child in members.values() {
                    self.visit(child, depth + 1);
                }
            }
            _ => {}
        }
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
