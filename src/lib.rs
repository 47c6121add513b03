//! feedgrab: config-driven extraction of feed cards from web pages
//!
//! A job is described by a YAML config: where to fetch, which strategy
//! walks the page (`simple` flat lists or `nested` category blocks),
//! how each field is selected, and which JSON artifacts to write. The
//! engine itself consumes an already-parsed document, so tests drive it
//! with inline HTML and the binary wires in the HTTP fetch.

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod job;
pub mod output;
pub mod post;
pub mod select;
mod template;

pub use config::{JobConfig, SelectionStrategy};
pub use error::EngineError;
pub use extract::{extract_cards, FeedCard, StrategyKind};
pub use job::{run, run_document, RunSummary};
