//! Writing run artifacts to disk
//!
//! Two artifacts per job, each behind its own enable flag: the full
//! card list and the selected single card. Files are written atomically
//! enough for our consumers (whole-file rewrite); a run that produced
//! no cards never reaches this module, so stale artifacts survive bad
//! pages.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::config::JobConfig;
use crate::error::EngineError;
use crate::extract::FeedCard;

/// Write the enabled artifacts, returning the paths written.
pub fn write_outputs(
    cards: &[FeedCard],
    single: Option<&FeedCard>,
    config: &JobConfig,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, EngineError> {
    fs::create_dir_all(output_dir).map_err(|source| EngineError::WriteOutput {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();

    if config.output.all.enabled {
        let path = output_dir.join(&config.output.all.filename);
        write_json(&path, &cards)?;
        info!(job = %config.id, path = %path.display(), count = cards.len(), "wrote card list");
        written.push(path);
    }

    if config.output.single.enabled {
        if let Some(card) = single {
            let path = output_dir.join(&config.output.single.filename);
            write_json(&path, card)?;
            info!(job = %config.id, path = %path.display(), "wrote single card");
            written.push(path);
        }
    }

    Ok(written)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), EngineError> {
    let body = serde_json::to_string_pretty(value).map_err(|source| EngineError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, body).map_err(|source| EngineError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JobConfig;

    fn config(yaml: &str) -> JobConfig {
        JobConfig::from_yaml(yaml).unwrap()
    }

    fn sample_cards() -> Vec<FeedCard> {
        vec![
            FeedCard {
                id: 1,
                title: Some("One".to_string()),
                description: None,
                image_url: None,
                call_to_action_url: None,
                published_at: "2024-05-01T09:00".to_string(),
            },
            FeedCard {
                id: 2,
                title: Some("Two".to_string()),
                description: None,
                image_url: None,
                call_to_action_url: None,
                published_at: "2024-05-01T09:00".to_string(),
            },
        ]
    }

    #[test]
    fn test_writes_both_artifacts_with_default_filenames() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(
            r#"
            id: news
            url: "https://example.com/"
            selectors:
              container: "div"
            output:
              all:
                enabled: true
              single:
                enabled: true
            "#,
        );

        let cards = sample_cards();
        let written = write_outputs(&cards, Some(&cards[0]), &config, dir.path()).unwrap();

        assert_eq!(
            written,
            vec![
                dir.path().join("news-alle.json"),
                dir.path().join("news.json"),
            ]
        );

        let all: Vec<FeedCard> =
            serde_json::from_str(&fs::read_to_string(&written[0]).unwrap()).unwrap();
        assert_eq!(all, cards);

        let single: FeedCard =
            serde_json::from_str(&fs::read_to_string(&written[1]).unwrap()).unwrap();
        assert_eq!(single, cards[0]);
    }

    #[test]
    fn test_disabled_all_artifact_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(
            r#"
            id: solo
            url: "https://example.com/"
            selectors:
              container: "div"
            output:
              all:
                enabled: false
              single:
                enabled: true
                filename: "pick.json"
            "#,
        );

        let cards = sample_cards();
        let written = write_outputs(&cards, Some(&cards[1]), &config, dir.path()).unwrap();

        assert_eq!(written, vec![dir.path().join("pick.json")]);
        assert!(!dir.path().join("solo-alle.json").exists());
    }

    #[test]
    fn test_enabled_single_without_selection_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(
            r#"
            id: none
            url: "https://example.com/"
            selectors:
              container: "div"
            output:
              all:
                enabled: false
              single:
                enabled: true
            "#,
        );

        let written = write_outputs(&sample_cards(), None, &config, dir.path()).unwrap();
        assert!(written.is_empty());
        assert!(!dir.path().join("none.json").exists());
    }

    #[test]
    fn test_creates_missing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let config = config(
            r#"
            id: deep
            url: "https://example.com/"
            selectors:
              container: "div"
            output:
              all:
                enabled: true
              single:
                enabled: false
            "#,
        );

        let written = write_outputs(&sample_cards(), None, &config, &nested).unwrap();
        assert_eq!(written, vec![nested.join("deep-alle.json")]);
        assert!(written[0].exists());
    }

    #[test]
    fn test_output_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(
            r#"
            id: pretty
            url: "https://example.com/"
            selectors:
              container: "div"
            output:
              all:
                enabled: true
              single:
                enabled: false
            "#,
        );

        let written = write_outputs(&sample_cards(), None, &config, dir.path()).unwrap();
        let body = fs::read_to_string(&written[0]).unwrap();
        assert!(body.contains("\n  {"));
        assert!(body.contains("\"id\": 1"));
    }
}
