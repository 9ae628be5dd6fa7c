use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

use crate::scholarships::dto::ScholarshipOut;

const NAME_MAX: usize = 300;
const PROVIDER_MAX: usize = 300;
const DEADLINE_MAX: usize = 50;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response is not a JSON array")]
    NotAnArray,

    #[error("array entry is not an object")]
    MalformedEntry,
}

/// Extracts and normalizes the scholarship list from free-form provider
/// output. The provider is asked for a pure JSON array but routinely wraps
/// it in prose or code fences, so the first bracket-delimited array of
/// objects is taken when present. Any failure fails the whole call; callers
/// never get partial results.
pub fn parse_candidate_list(text: &str) -> Result<Vec<ScholarshipOut>, ParseError> {
    lazy_static! {
        static ref ARRAY_RE: Regex = Regex::new(r"(?s)(\[\s*\{.*\}\s*\])").unwrap();
    }
    let raw = ARRAY_RE
        .find(text)
        .map(|m| m.as_str())
        .unwrap_or_else(|| text.trim());

    let value: Value = serde_json::from_str(raw)?;
    let entries = value.as_array().ok_or(ParseError::NotAnArray)?;

    let mut out = Vec::with_capacity(entries.len());
    for entry in entries {
        if !entry.is_object() {
            return Err(ParseError::MalformedEntry);
        }
        out.push(ScholarshipOut {
            name: clip(coerce(entry, "name", ""), NAME_MAX),
            provider: clip(coerce(entry, "provider", ""), PROVIDER_MAX),
            deadline: clip(coerce(entry, "deadline", "unknown"), DEADLINE_MAX),
            url: coerce(entry, "url", ""),
        });
    }
    Ok(out)
}

/// Coerces a field to a trimmed string; numbers and booleans are
/// stringified, null or missing values take the default.
fn coerce(entry: &Value, key: &str, default: &str) -> String {
    match entry.get(key) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Null) | None => default.to_string(),
        Some(other) => other.to_string().trim().to_string(),
    }
}

fn clip(s: String, max: usize) -> String {
    if s.chars().count() <= max {
        s
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_json(name: &str) -> String {
        format!(
            r#"{{"name": "{name}", "provider": "Acme Fund", "deadline": "2026-01-31", "url": "https://acme.example/s"}}"#
        )
    }

    #[test]
    fn parses_pure_array() {
        let text = format!("[{}]", entry_json("Acme Grant"));
        let items = parse_candidate_list(&text).expect("parse");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Acme Grant");
        assert_eq!(items[0].provider, "Acme Fund");
        assert_eq!(items[0].deadline, "2026-01-31");
        assert_eq!(items[0].url, "https://acme.example/s");
    }

    #[test]
    fn extracts_array_embedded_in_prose() {
        let entries: Vec<String> = (1..=8).map(|i| entry_json(&format!("Grant {i}"))).collect();
        let text = format!(
            "Sure! Here are some scholarships:\n\n[{}]\n\nLet me know if you need more.",
            entries.join(",\n")
        );
        let items = parse_candidate_list(&text).expect("parse");
        assert_eq!(items.len(), 8);
        assert_eq!(items[0].name, "Grant 1");
        assert_eq!(items[7].name, "Grant 8");
    }

    #[test]
    fn extracts_array_inside_code_fence() {
        let text = format!("```json\n[{}]\n```", entry_json("Fenced Grant"));
        let items = parse_candidate_list(&text).expect("parse");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Fenced Grant");
    }

    #[test]
    fn truncates_long_fields() {
        let long_name = "n".repeat(400);
        let long_deadline = "d".repeat(80);
        let long_url = "https://example.org/".to_string() + &"u".repeat(400);
        let text = format!(
            r#"[{{"name": "{long_name}", "provider": "{}", "deadline": "{long_deadline}", "url": "{long_url}"}}]"#,
            "p".repeat(400)
        );
        let items = parse_candidate_list(&text).expect("parse");
        assert_eq!(items[0].name.chars().count(), 300);
        assert_eq!(items[0].provider.chars().count(), 300);
        assert_eq!(items[0].deadline.chars().count(), 50);
        // URL is never truncated
        assert_eq!(items[0].url, long_url);
    }

    #[test]
    fn coerces_missing_and_null_fields() {
        let text = r#"[{"name": "Grant", "provider": null, "url": "https://x.example"}]"#;
        let items = parse_candidate_list(text).expect("parse");
        assert_eq!(items[0].provider, "");
        assert_eq!(items[0].deadline, "unknown");
    }

    #[test]
    fn coerces_non_string_fields() {
        let text = r#"[{"name": 42, "provider": true, "deadline": 2026, "url": "https://x.example"}]"#;
        let items = parse_candidate_list(text).expect("parse");
        assert_eq!(items[0].name, "42");
        assert_eq!(items[0].provider, "true");
        assert_eq!(items[0].deadline, "2026");
    }

    #[test]
    fn rejects_prose_without_array() {
        assert!(parse_candidate_list("I could not find any scholarships.").is_err());
    }

    #[test]
    fn rejects_array_of_non_objects() {
        let err = parse_candidate_list(r#"["just", "strings"]"#).unwrap_err();
        assert!(matches!(err, ParseError::MalformedEntry));
    }

    #[test]
    fn rejects_top_level_object() {
        let err = parse_candidate_list(r#"{"name": "Grant"}"#).unwrap_err();
        assert!(matches!(err, ParseError::NotAnArray));
    }

    #[test]
    fn empty_array_is_ok() {
        assert!(parse_candidate_list("[]").expect("parse").is_empty());
    }
}
