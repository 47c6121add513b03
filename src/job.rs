//! One job run, end to end
//!
//! fetch -> extract -> select -> post-process -> write. A run that
//! extracts zero cards succeeds without touching the output files, so
//! consumers keep serving the previous artifacts when a page breaks.

use std::path::{Path, PathBuf};

use scraper::Html;
use tracing::info;

use crate::config::JobConfig;
use crate::error::EngineError;
use crate::extract::extract_cards;
use crate::{fetch, output, post, select};

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub card_count: usize,
    pub written: Vec<PathBuf>,
}

/// Fetch the configured page and run the pipeline over it.
pub fn run(config: &JobConfig, output_dir: &Path) -> Result<RunSummary, EngineError> {
    info!(job = %config.id, name = %config.name, url = %config.url, "starting run");
    let doc = fetch::fetch_document(&config.url)?;
    run_document(config, &doc, output_dir)
}

/// Run the pipeline over an already-fetched document.
pub fn run_document(
    config: &JobConfig,
    doc: &Html,
    output_dir: &Path,
) -> Result<RunSummary, EngineError> {
    let cards = extract_cards(doc, config);
    if cards.is_empty() {
        info!(job = %config.id, "no cards extracted; keeping previous output");
        return Ok(RunSummary {
            card_count: 0,
            written: Vec::new(),
        });
    }

    let single = select::pick_single(&cards, config.selection.strategy).map(|mut card| {
        post::apply(&mut card, &cards, config);
        card
    });

    let written = output::write_outputs(&cards, single.as_ref(), config, output_dir)?;
    info!(job = %config.id, cards = cards.len(), files = written.len(), "run completed");

    Ok(RunSummary {
        card_count: cards.len(),
        written,
    })
}
