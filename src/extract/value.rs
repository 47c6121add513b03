//! Single-field extraction against a parsed element
//!
//! Resolution order: configured selector, then fallback, then default.
//! Misses are ordinary outcomes here, not errors; a rule that cannot
//! produce a value resolves to `FieldOutcome::Missing` and the caller
//! decides what an absent field means.

use scraper::{ElementRef, Selector};

use crate::extract::field::{Attribute, FieldRule};

/// How a field's value was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    /// The selector matched and produced a non-empty value.
    Extracted(String),
    /// The selector missed; the rule's fallback was used.
    Fallback(String),
    /// No selector configured, or no fallback; the rule's default was used.
    Default(String),
    /// Nothing matched and the rule carries no fallback or default.
    Missing,
}

impl FieldOutcome {
    /// The resolved value, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            FieldOutcome::Extracted(v) | FieldOutcome::Fallback(v) | FieldOutcome::Default(v) => {
                Some(v)
            }
            FieldOutcome::Missing => None,
        }
    }

    /// Consume the outcome, keeping only the resolved value.
    pub fn into_value(self) -> Option<String> {
        match self {
            FieldOutcome::Extracted(v) | FieldOutcome::Fallback(v) | FieldOutcome::Default(v) => {
                Some(v)
            }
            FieldOutcome::Missing => None,
        }
    }
}

/// Resolve one field rule against an element subtree.
pub fn extract_value(node: ElementRef<'_>, rule: &FieldRule) -> FieldOutcome {
    if rule.selector.is_empty() {
        return default_outcome(rule);
    }

    let selector = match Selector::parse(&rule.selector) {
        Ok(selector) => selector,
        // Unparsable selectors degrade to a miss, same as selectors
        // that match nothing.
        Err(_) => return miss_outcome(rule),
    };

    let found = match node.select(&selector).next() {
        Some(found) => found,
        None => return miss_outcome(rule),
    };

    let raw = match &rule.attribute {
        Attribute::Text => found.text().collect::<String>().trim().to_string(),
        Attribute::Named(name) => found.value().attr(name).unwrap_or("").to_string(),
    };

    if raw.is_empty() {
        return miss_outcome(rule);
    }

    FieldOutcome::Extracted(apply_prefix(raw, &rule.prefix))
}

/// Prepend the prefix unless the value is already an absolute URL.
fn apply_prefix(value: String, prefix: &str) -> String {
    if prefix.is_empty() || value.starts_with("http://") || value.starts_with("https://") {
        value
    } else {
        format!("{prefix}{value}")
    }
}

fn miss_outcome(rule: &FieldRule) -> FieldOutcome {
    match &rule.fallback {
        Some(fallback) => FieldOutcome::Fallback(fallback.clone()),
        None => default_outcome(rule),
    }
}

fn default_outcome(rule: &FieldRule) -> FieldOutcome {
    match &rule.default {
        Some(default) => FieldOutcome::Default(default.clone()),
        None => FieldOutcome::Missing,
    }
}
