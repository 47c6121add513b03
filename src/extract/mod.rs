//! Extraction strategies: parsed document in, feed cards out
//!
//! Two strategies cover the configured sites. `simple` walks a flat
//! list of repeated containers; `nested` walks category blocks that
//! each hold their own item list. Extraction never fails a run: pages
//! whose markup has drifted produce fewer cards, down to none.

use scraper::Html;
use serde::{Deserialize, Serialize};

use crate::config::JobConfig;

mod field;
mod nested;
mod simple;
mod value;

pub use field::{Attribute, FieldRule, SelectorEntry};
pub use value::{extract_value, FieldOutcome};

/// Which extraction strategy a job runs.
///
/// Closed set; an unrecognized `type` in the config is a parse error
/// rather than a silent fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Flat list of repeated containers, one card per container.
    #[default]
    Simple,
    /// Category blocks with per-category item lists.
    Nested,
}

/// One extracted record, serialized in field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedCard {
    pub id: u32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub call_to_action_url: Option<String>,
    pub published_at: String,
}

/// Run the configured strategy over a parsed document.
pub fn extract_cards(doc: &Html, config: &JobConfig) -> Vec<FeedCard> {
    match config.strategy {
        StrategyKind::Simple => simple::extract(doc, config),
        StrategyKind::Nested => nested::extract(doc, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_kind_parses_lowercase() {
        let kind: StrategyKind = serde_yaml::from_str("simple").unwrap();
        assert_eq!(kind, StrategyKind::Simple);
        let kind: StrategyKind = serde_yaml::from_str("nested").unwrap();
        assert_eq!(kind, StrategyKind::Nested);
    }

    #[test]
    fn test_unknown_strategy_kind_is_an_error() {
        let parsed: Result<StrategyKind, _> = serde_yaml::from_str("flat");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_feed_card_serializes_in_field_order() {
        let card = FeedCard {
            id: 1,
            title: Some("Title".to_string()),
            description: None,
            image_url: None,
            call_to_action_url: Some("https://example.com/1".to_string()),
            published_at: "2024-05-01T09:00".to_string(),
        };

        let json = serde_json::to_string(&card).unwrap();
        let id_pos = json.find("\"id\"").unwrap();
        let title_pos = json.find("\"title\"").unwrap();
        let published_pos = json.find("\"published_at\"").unwrap();
        assert!(id_pos < title_pos);
        assert!(title_pos < published_pos);
        assert!(json.contains("\"description\":null"));
    }
}
