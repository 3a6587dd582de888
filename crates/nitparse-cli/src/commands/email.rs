//! Email command - draft BQ-request or OEM-authorization text.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use nitparse_core::email::{compose_bq_request, compose_oem_authorization};
use nitparse_core::extract::read_input;
use nitparse_core::{CompanyDetails, ItemParser, TenderDetails};

/// Arguments for the email command.
#[derive(Args)]
pub struct EmailArgs {
    /// Input file (PDF or plain text)
    #[arg(required = true)]
    input: PathBuf,

    /// Kind of email to draft
    #[arg(short, long, value_enum)]
    kind: EmailKind,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Company details JSON file (defaults to built-in identity)
    #[arg(long)]
    company: Option<PathBuf>,

    /// Tender name (BQ request)
    #[arg(long)]
    tender_name: Option<String>,

    /// Tender reference number (BQ request)
    #[arg(long)]
    tender_ref: Option<String>,

    /// Tender issue date, as printed on the notice (BQ request)
    #[arg(long)]
    issue_date: Option<String>,

    /// OEM manufacturer name (OEM authorization)
    #[arg(long, default_value = "OEM")]
    oem_name: String,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum EmailKind {
    /// Bill of Quantities request
    Bq,
    /// OEM authorization certificate request
    Oem,
}

pub fn run(args: EmailArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let company = match &args.company {
        Some(path) => CompanyDetails::from_file(path)
            .with_context(|| format!("Failed to load company details from {}", path.display()))?,
        None => CompanyDetails::default(),
    };

    let text = read_input(&args.input)
        .with_context(|| format!("Failed to extract text from {}", args.input.display()))?;

    let items = ItemParser::new().parse(&text);
    if items.is_empty() {
        anyhow::bail!("No items found in {}. Is this a NIT document?", args.input.display());
    }
    info!("drafting {:?} email for {} items", args.kind, items.len());

    let email = match args.kind {
        EmailKind::Bq => {
            let tender = TenderDetails {
                tender_name: args.tender_name,
                tender_ref: args.tender_ref,
                issue_date: args.issue_date,
            };
            compose_bq_request(&items, &tender, &company)
        }
        EmailKind::Oem => compose_oem_authorization(&items, &args.oem_name, &company),
    };

    match args.output {
        Some(path) => fs::write(&path, email)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{email}"),
    }

    Ok(())
}
