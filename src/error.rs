//! Error taxonomy for job runs
//!
//! Only configuration, transport, and persistence failures surface here.
//! Extraction-level misses never become errors; they resolve through the
//! field sentinels in `extract::value`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures of a single job run.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: ureq::Error,
    },
    #[error("HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },
    #[error("failed to serialize {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
