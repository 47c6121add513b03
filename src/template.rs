//! Single-pass placeholder rendering for configured templates
//!
//! The template string is scanned exactly once. Substituted values are
//! never re-scanned, so brace sequences inside page text or config
//! values stay verbatim. Unknown placeholders stay verbatim too.

/// Replace each known `{name}` placeholder with its value.
pub(crate) fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        rest = &rest[open..];
        let Some(close) = rest.find('}') else {
            break;
        };
        let key = &rest[1..close];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => rendered.push_str(value),
            None => rendered.push_str(&rest[..=close]),
        }
        rest = &rest[close + 1..];
    }
    rendered.push_str(rest);
    rendered
}
