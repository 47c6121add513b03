//! Field descriptors: the per-field extraction grammar
//!
//! A selector-map entry is either a bare CSS selector or a structured
//! rule. Both canonicalize into `FieldRule`; absent entries degrade to
//! an all-default rule instead of erroring, so partial configs keep a
//! batch job running.

use serde::Deserialize;

/// Where a field's value is read from on the matched element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Attribute {
    /// The element's trimmed visible text.
    #[default]
    Text,
    /// A named HTML attribute, e.g. `href` or `src`.
    Named(String),
}

impl From<String> for Attribute {
    fn from(raw: String) -> Self {
        if raw == "text" {
            Attribute::Text
        } else {
            Attribute::Named(raw)
        }
    }
}

/// One entry in the configured selector map.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SelectorEntry {
    /// Bare CSS selector, e.g. `title: "h2 a"`.
    Selector(String),
    /// Structured rule with attribute/prefix/fallback options.
    Rule(FieldRule),
}

/// Canonical extraction rule for one output field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FieldRule {
    /// CSS selector; empty means "not configured, use the default".
    pub selector: String,
    /// Value source on the matched element.
    pub attribute: Attribute,
    /// Prepended to extracted values that are not already absolute URLs.
    pub prefix: String,
    /// Used when the selector matches nothing or extraction comes back empty.
    pub fallback: Option<String>,
    /// Used when no selector is configured and when no fallback applies.
    pub default: Option<String>,
    /// Template for composed values, e.g. `"{url}#{item_id}"`.
    pub template: Option<String>,
    /// Attribute holding the item identifier the template reads.
    pub item_id_attribute: Option<String>,
}

impl FieldRule {
    /// Canonicalize a selector-map entry.
    ///
    /// A bare string populates only the selector; an absent entry yields
    /// the all-default rule, which signals "not configured" downstream.
    pub fn from_entry(entry: Option<&SelectorEntry>) -> FieldRule {
        match entry {
            None => FieldRule::default(),
            Some(SelectorEntry::Selector(selector)) => FieldRule {
                selector: selector.clone(),
                ..FieldRule::default()
            },
            Some(SelectorEntry::Rule(rule)) => rule.clone(),
        }
    }
}
