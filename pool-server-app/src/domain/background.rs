use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Background {
    pub key: String,
    pub public_url: String,
}

/// Builds the storage key for an uploaded file: `<millis>_<file name>`.
///
/// Only the last path component of `original_name` is kept and anything
/// outside `[A-Za-z0-9._-]` becomes `_`.
pub fn background_key(uploaded_at: DateTime<Utc>, original_name: &str) -> String {
    let file_name = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original_name)
        .trim();
    let sanitized: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let sanitized = sanitized.trim_start_matches('.');
    let sanitized = if sanitized.is_empty() {
        "image"
    } else {
        sanitized
    };
    format!("{}_{}", uploaded_at.timestamp_millis(), sanitized)
}

/// Variant of a key for the `attempt`-th retry after a collision:
/// `<millis>_<attempt>_<file name>`. Attempt 0 is the key itself.
pub fn retry_key(key: &str, attempt: u32) -> String {
    if attempt == 0 {
        return key.to_string();
    }
    match key.split_once('_') {
        Some((millis, name)) => format!("{}_{}_{}", millis, attempt, name),
        None => format!("{}_{}", key, attempt),
    }
}

pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}
