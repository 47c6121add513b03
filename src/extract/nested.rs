//! Nested strategy: category blocks with per-category item lists

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::config::JobConfig;
use crate::extract::field::FieldRule;
use crate::extract::value::extract_value;
use crate::extract::FeedCard;
use crate::template::render;

/// Extract one card per item, walking categories in document order.
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

    let items = match &config.selectors.items {
        Some(items) if !items.selector.is_empty() => items,
        _ => {
            warn!(job = %config.id, "no item selector configured");
            return Vec::new();
        }
    };
    let item_selector = match Selector::parse(&items.selector) {
        Ok(selector) => selector,
        Err(_) => {
            warn!(job = %config.id, selector = %items.selector, "unparsable item selector");
            return Vec::new();
        }
    };

    let category_rule = FieldRule::from_entry(config.selectors.category_title.as_ref());
    let image_rule = FieldRule::from_entry(items.image_url.as_ref());
    let cta_rule = FieldRule::from_entry(items.call_to_action_url.as_ref());
    let title_override = config.output.single.title_override.as_deref();

    let mut cards = Vec::new();
    let mut next_id = 1u32;
    for outer in doc.select(&container_selector) {
        let category_title = extract_value(outer, &category_rule).into_value();

        for item in outer.select(&item_selector) {
            cards.push(FeedCard {
                id: next_id,
                title: title_override
                    .map(str::to_string)
                    .or_else(|| category_title.clone()),
                description: category_title.clone(),
                image_url: extract_value(item, &image_rule).into_value(),
                call_to_action_url: resolve_cta(item, &cta_rule, config),
                // Nested pages carry no per-item dates.
                published_at: String::new(),
            });
            next_id += 1;
        }
    }

    debug!(job = %config.id, count = cards.len(), "collected nested items");
    cards
}

/// Item CTA: template expansion when configured, plain extraction otherwise.
fn resolve_cta(item: ElementRef<'_>, rule: &FieldRule, config: &JobConfig) -> Option<String> {
    match rule.template.as_deref() {
        Some(template) if !template.is_empty() => {
            let id_attribute = rule.item_id_attribute.as_deref().unwrap_or("id");
            let item_id = item.value().attr(id_attribute).unwrap_or("");
            Some(render(
                template,
                &[
                    ("url", &config.url),
                    ("base_url", &config.base_url),
                    ("item_id", item_id),
                ],
            ))
        }
        _ => extract_value(item, rule).into_value(),
    }
}
