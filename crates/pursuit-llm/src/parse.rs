//! Tolerant JSON extraction from LLM responses.
//!
//! Models asked for JSON still wrap it in markdown fences, leave trailing
//! commas, or add a sentence of prose around it. [`parse_json`] tries the
//! raw text first and then progressively more forgiving readings before
//! giving up.

use serde::de::DeserializeOwned;

use crate::error::LlmError;

/// Parse an LLM response into `T`.
///
/// Readings tried, in order:
/// 1. the trimmed text as-is
/// 2. the body of a markdown code block
/// 3. the outermost `{ .. }` span
///
/// and each of those again with trailing commas removed.
///
/// # Errors
///
/// Returns [`LlmError::Parse`] if no reading deserializes.
pub fn parse_json<T: DeserializeOwned>(raw: &str) -> Result<T, LlmError> {
    let trimmed = raw.trim();
    let candidates = [
        Some(trimmed),
        extract_json_from_codeblock(trimmed),
        outermost_object(trimmed),
    ];

    for candidate in candidates.iter().flatten() {
        if let Ok(parsed) = serde_json::from_str::<T>(candidate) {
            return Ok(parsed);
        }
    }
    for candidate in candidates.iter().flatten() {
        if let Ok(parsed) = serde_json::from_str::<T>(&strip_trailing_commas(candidate)) {
            return Ok(parsed);
        }
    }

    Err(LlmError::Parse(format!(
        "no JSON reading matched the expected shape: {}",
        preview(trimmed)
    )))
}

/// Body of the first fenced code block, with or without a language tag.
pub fn extract_json_from_codeblock(text: &str) -> Option<&str> {
    let open = text.find("```")?;
    let after_fence = text.get(open.checked_add(3)?..)?;
    // Skip the rest of the fence line (the language tag, if any).
    let body_start = after_fence.find('\n').and_then(|nl| nl.checked_add(1))?;
    let body = after_fence.get(body_start..)?;
    let close = body.find("```")?;
    body.get(..close).map(str::trim)
}

/// Text from the first `{` to the last `}`, inclusive.
pub fn outermost_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    text.get(start..=end)
}

/// Drop commas that directly precede `}` or `]`, ignoring string contents.
pub fn strip_trailing_commas(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;
    for (i, c) in text.char_indices() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            ',' => {
                let rest = text.get(i.saturating_add(1)..).unwrap_or("");
                let closes = rest
                    .trim_start()
                    .starts_with(|next: char| next == '}' || next == ']');
                if !closes {
                    out.push(c);
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// First 200 characters of a response, for error messages.
fn preview(text: &str) -> String {
    text.chars().take(200).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pursuit_core::{CaseProfile, DestinationResponse};

    use super::*;

    #[test]
    fn clean_json_parses() {
        let raw = r#"{"destinations": ["Lima", "Oslo"]}"#;
        let parsed: DestinationResponse = parse_json(raw).unwrap();
        assert_eq!(parsed.destinations, ["Lima", "Oslo"]);
    }

    #[test]
    fn fenced_json_with_trailing_comma_parses() {
        let raw = "Here you go:\n```json\n{\"destinations\": [\"Lima\", \"Oslo\",],}\n```\nEnjoy!";
        let parsed: DestinationResponse = parse_json(raw).unwrap();
        assert_eq!(parsed.destinations, ["Lima", "Oslo"]);
    }

    #[test]
    fn prose_around_object_parses() {
        let raw = r#"Sure! {"suspect_name": "Dr. Dunes", "stolen_item": "A violin", "starting_city": "Accra", "hops": ["Lima"]} Good luck."#;
        let parsed: CaseProfile = parse_json(raw).unwrap();
        assert_eq!(parsed.suspect_name, "Dr. Dunes");
        assert_eq!(parsed.hops, ["Lima"]);
    }

    #[test]
    fn wrong_shape_is_parse_error() {
        let parsed: Result<DestinationResponse, _> = parse_json(r#"{"cities": ["Lima"]}"#);
        assert!(matches!(parsed, Err(LlmError::Parse(_))));
    }

    #[test]
    fn commas_inside_strings_survive() {
        let input = r#"{"clue": "north, }then east", "n": [1, 2,],}"#;
        assert_eq!(
            strip_trailing_commas(input),
            r#"{"clue": "north, }then east", "n": [1, 2]}"#
        );
    }

    #[test]
    fn codeblock_without_language_tag() {
        let text = "```\n{\"a\": 1}\n```";
        assert_eq!(extract_json_from_codeblock(text), Some("{\"a\": 1}"));
        assert_eq!(extract_json_from_codeblock("no fences"), None);
    }
}
