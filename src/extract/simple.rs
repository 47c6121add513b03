//! Simple strategy: one card per repeated container element

use chrono::Local;
use scraper::{Html, Selector};
use tracing::{debug, warn};

use crate::config::JobConfig;
use crate::extract::field::FieldRule;
use crate::extract::value::extract_value;
use crate::extract::FeedCard;

/// Extract one card per container match, in document order.
pub fn extract(doc: &Html, config: &JobConfig) -> Vec<FeedCard> {
    let container = config.selectors.container.as_deref().unwrap_or("");
    if container.is_empty() {
        warn!(job = %config.id, "no container selector configured");
        return Vec::new();
    }

    let container_selector = match Selector::parse(container) {
        Ok(selector) => selector,
        Err(_) => {
            warn!(job = %config.id, selector = container, "unparsable container selector");
            return Vec::new();
        }
    };

    let title_rule = FieldRule::from_entry(config.selectors.title.as_ref());
    let description_rule = FieldRule::from_entry(config.selectors.description.as_ref());
    let image_rule = FieldRule::from_entry(config.selectors.image_url.as_ref());
    let cta_rule = FieldRule::from_entry(config.selectors.call_to_action_url.as_ref());

    // One timestamp per run; every card from a pass shares it.
    let published_at = Local::now().format("%Y-%m-%dT%H:%M").to_string();

    let containers: Vec<_> = doc.select(&container_selector).collect();
    debug!(job = %config.id, count = containers.len(), "matched containers");

    let mut cards = Vec::new();
    for (index, node) in containers.into_iter().enumerate() {
        // Ids follow container position, so a skipped container leaves
        // a gap rather than renumbering later cards.
        let id = index as u32 + 1;

        let title = extract_value(node, &title_rule).into_value();
        let description = extract_value(node, &description_rule).into_value();
        if is_blank(&title) && is_blank(&description) {
            debug!(job = %config.id, id, "skipping container without title or description");
            continue;
        }

        cards.push(FeedCard {
            id,
            title,
            description,
            image_url: extract_value(node, &image_rule).into_value(),
            call_to_action_url: extract_value(node, &cta_rule).into_value(),
            published_at: published_at.clone(),
        });
    }

    cards
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}
