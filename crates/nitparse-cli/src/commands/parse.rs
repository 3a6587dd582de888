//! Parse command - extract line items from a single NIT document.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use nitparse_core::extract::read_input;
use nitparse_core::{Item, ItemParser};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input file (PDF or plain text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ParseArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let text = read_input(&args.input)
        .with_context(|| format!("Failed to extract text from {}", args.input.display()))?;

    let items = ItemParser::new().parse(&text);
    info!("extracted {} items from {}", items.len(), args.input.display());

    if items.is_empty() {
        eprintln!("Warning: no items found in {}", args.input.display());
    }

    let rendered = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&items)?,
        OutputFormat::Text => render_text(&items),
    };

    match args.output {
        Some(path) => {
            fs::write(&path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote {} items to {}", items.len(), path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn render_text(items: &[Item]) -> String {
    let mut out = String::new();

    for item in items {
        out.push_str(&format!("Item {}: {}\n", item.item_no, item.description));
        if item.has_quantity() {
            out.push_str(&format!("  Quantity: {} {}\n", item.quantity, item.unit));
        }
        if !item.specifications.is_empty() {
            out.push_str(&format!("  Specifications: {}\n", item.specifications));
        }
    }

    out.push_str(&format!("Total: {} items\n", items.len()));
    out
}
