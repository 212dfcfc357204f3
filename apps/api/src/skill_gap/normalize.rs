//! Skill normalization — the canonical form used for every equality and membership test.

use serde_json::Value;

/// Lower-cases and trims a single skill label.
/// Returns `None` when nothing remains after trimming.
pub fn normalize_skill(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Normalizes an untyped JSON value into an ordered list of skills.
///
/// Anything other than an array yields `[]`. Non-string elements and blank
/// strings are dropped. Order and duplicates of the surviving elements are kept.
pub fn normalize_skills(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .filter_map(normalize_skill)
            .collect(),
        _ => Vec::new(),
    }
}

/// Typed variant of [`normalize_skills`] for callers that already hold strings.
pub fn normalize_strs<I, S>(skills: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    skills
        .into_iter()
        .filter_map(|s| normalize_skill(s.as_ref()))
        .collect()
}
