//! Search command

use crate::app::{OutputFormat, SearchArgs};
use crate::commands::ingest_session;
use crate::output::{format_ranked_chunks, RankedChunk};
use anyhow::Result;
use prepdrill_core::Config;

pub fn run(args: SearchArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let query = args.query.join(" ");
    if query.trim().is_empty() {
        anyhow::bail!("search query cannot be empty");
    }

    let session = ingest_session(&args.document, config)?;
    let index = session.index();

    let results: Vec<RankedChunk> = index
        .top_k(&query, args.k)
        .into_iter()
        .map(|(idx, score)| RankedChunk {
            index: idx,
            score,
            text: index.chunk_text(idx).unwrap_or_default(),
        })
        .collect();

    print!("{}", format_ranked_chunks(&results, format)?);
    Ok(())
}
