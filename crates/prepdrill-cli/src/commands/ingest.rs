//! Ingest command

use crate::app::{IngestArgs, OutputFormat};
use crate::commands::ingest_session;
use anyhow::Result;
use prepdrill_core::Config;

pub fn run(args: IngestArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let session = ingest_session(&args.document, config)?;
    let stats = session.index().stats();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&stats)?),
        OutputFormat::Cli => println!(
            "Indexed {} chunks ({} terms) from {}",
            stats.chunks,
            stats.vocabulary,
            args.document.display()
        ),
    }

    Ok(())
}
