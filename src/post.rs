//! Post-processing of the selected single card
//!
//! Steps run in order: title override first, then the description
//! template, then the CTA override. The template therefore sees the
//! overridden title. Placeholders expand in one pass, so braces
//! inside card text are data, not template.

use crate::config::JobConfig;
use crate::extract::FeedCard;
use crate::template::render;

/// Apply the configured overrides and templates to the selected card.
pub fn apply(card: &mut FeedCard, all_cards: &[FeedCard], config: &JobConfig) {
    if let Some(title) = &config.output.single.title_override {
        card.title = Some(title.clone());
    }

    if let Some(template) = &config.post_process.single_description_template {
        let count = all_cards.len().to_string();
        let rendered = render(
            template,
            &[
                ("title", card.title.as_deref().unwrap_or("")),
                ("description", card.description.as_deref().unwrap_or("")),
                ("count", count.as_str()),
            ],
        );
        card.description = Some(rendered);
    }

    if let Some(cta) = &config.output.single.cta_override {
        let rendered = render(cta, &[("all_filename", &config.output.all.filename)]);
        card.call_to_action_url = Some(rendered);
    }
}
