//! Command-line front end for the issue-form field checks.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use gcdform::{
    classify_identifier_list, compare_note, BindingConfig, IdentifierKind, ParsedDate,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gcdform", version, about = "Key-date inference and ISBN/UPC/EAN checks")]
struct Cli {
    /// JSON configuration (labels, field names)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Infer the key date for a free-text publication date
    KeyDate {
        /// Publication date as printed, e.g. "Spring 1974"
        text: String,
    },
    /// Check a `;`-separated ISBN list
    Isbn {
        /// ISBN list
        list: String,
        /// Print the review-screen note instead of the status label
        #[arg(long)]
        note: bool,
    },
    /// Check a `;`-separated UPC/EAN barcode list
    Barcode {
        /// Barcode list
        list: String,
        /// Print the review-screen note instead of the status label
        #[arg(long)]
        note: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => BindingConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => BindingConfig::default(),
    };
    tracing::debug!(?config, "loaded configuration");

    match cli.command {
        Command::KeyDate { text } => key_date(&text, cli.json),
        Command::Isbn { list, note } => {
            identifiers(&config, &list, IdentifierKind::Isbn, note, cli.json)
        },
        Command::Barcode { list, note } => {
            identifiers(&config, &list, IdentifierKind::Barcode, note, cli.json)
        },
    }
}

fn key_date(text: &str, as_json: bool) -> anyhow::Result<()> {
    let parsed = ParsedDate::parse(text);
    let Some(key_date) = parsed.key_date() else {
        bail!("no usable year in {text:?}");
    };

    if as_json {
        println!(
            "{}",
            json!({ "input": text, "key_date": key_date, "parsed": parsed })
        );
    } else {
        println!("{key_date}");
    }
    Ok(())
}

fn identifiers(
    config: &BindingConfig,
    list: &str,
    kind: IdentifierKind,
    note: bool,
    as_json: bool,
) -> anyhow::Result<()> {
    let classification = classify_identifier_list(list, kind);
    let label = config.labels.for_classification(classification, kind);

    if as_json {
        let mut out = json!({
            "input": list,
            "classification": classification,
            "label": label,
        });
        if note {
            out["note"] = json!(compare_note(list, kind));
        }
        println!("{out}");
        return Ok(());
    }

    let line = if note {
        compare_note(list, kind)
    } else {
        label.map(str::to_string)
    };
    match line {
        Some(line) => println!("{line}"),
        None => bail!("no {kind} entries given"),
    }
    Ok(())
}
