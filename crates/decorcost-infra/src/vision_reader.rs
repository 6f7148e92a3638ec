//! Reader for vision model output
//!
//! The vision collaborator returns free text that should contain one JSON
//! document, sometimes wrapped in a markdown fence or surrounded by prose,
//! and occasionally an error payload instead of an analysis.

use std::fs;
use std::path::Path;

use decorcost_domain::model::VisionAnalysis;
use decorcost_types::{Error, Result};
use serde_json::Value;

/// Contents of a markdown code fence with its language tag removed
fn fenced_body(text: &str) -> Option<&str> {
    let inner = text.strip_prefix("```")?;
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    Some(
        inner
            .trim_start_matches(|c: char| c.is_ascii_alphanumeric())
            .trim(),
    )
}

/// Span from the first `{` to the last `}`
fn object_span(text: &str) -> Option<&str> {
    let open = text.find('{')?;
    let close = text.rfind('}')?;
    (open < close).then(|| &text[open..=close])
}

/// Reduce a model response to the JSON document it carries.
///
/// Fenced bodies are used as-is when they parse; otherwise the outermost
/// object span wins, so prose around or after the document is dropped.
pub fn extract_json_from_response(response: &str) -> String {
    let response = response.trim();
    let body = fenced_body(response).unwrap_or(response);

    if serde_json::from_str::<Value>(body).is_ok() {
        return body.to_string();
    }

    object_span(body).unwrap_or(body).to_string()
}

/// Parse a raw vision response into an analysis
pub fn parse_vision_response(response: &str) -> Result<VisionAnalysis> {
    let json_str = extract_json_from_response(response);

    let value: Value = serde_json::from_str(&json_str).map_err(|e| {
        let truncated: String = response.chars().take(200).collect();
        Error::InvalidVisionResponse(format!("{} | raw: {}", e, truncated))
    })?;

    if !value.is_object() {
        return Err(Error::InvalidVisionResponse(
            "expected a JSON object".to_string(),
        ));
    }

    if let Some(code) = value.get("error").filter(|code| !code.is_null()) {
        let code = code
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| code.to_string());
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        return Err(Error::VisionRejected { code, message });
    }

    Ok(serde_json::from_value(value)?)
}

/// Read a saved vision response from disk
pub fn read_vision_file(path: &Path) -> Result<VisionAnalysis> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    parse_vision_response(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_fenced_json() {
        let response = "```json\n{\"items\": []}\n```";
        assert_eq!(extract_json_from_response(response), "{\"items\": []}");
    }

    #[test]
    fn test_extract_single_line_fence() {
        let response = "```json{\"items\": [{\"name\": \"Sofa\"}]}```";
        assert_eq!(
            extract_json_from_response(response),
            "{\"items\": [{\"name\": \"Sofa\"}]}"
        );

        let analysis = parse_vision_response(response).unwrap();
        assert_eq!(analysis.items.len(), 1);
        assert_eq!(analysis.items[0].name, "Sofa");
    }

    #[test]
    fn test_extract_fence_followed_by_prose() {
        let response = "```json\n{\"room_type\": \"Lobby\"}\n```\nLet me know if you need more.";
        assert_eq!(extract_json_from_response(response), "{\"room_type\": \"Lobby\"}");
    }

    #[test]
    fn test_extract_bare_fence() {
        let response = "```\n{\"room_type\": \"Office\"}\n```";
        assert_eq!(extract_json_from_response(response), "{\"room_type\": \"Office\"}");
    }

    #[test]
    fn test_extract_from_prose() {
        let response = "Here is the analysis: {\"items\": []} Hope it helps.";
        assert_eq!(extract_json_from_response(response), "{\"items\": []}");
    }

    #[test]
    fn test_parse_fenced_response() {
        let response = r#"```json
{
  "room_type": "Conference Room",
  "items": [{"name": "Projection Screen", "quantity": 1, "category": "decor"}],
  "complexity_flags": {"false_ceiling": true}
}
```"#;
        let analysis = parse_vision_response(response).unwrap();
        assert_eq!(analysis.room_type.as_deref(), Some("Conference Room"));
        assert_eq!(analysis.items.len(), 1);
        assert!(analysis.complexity_flags.false_ceiling);
    }

    #[test]
    fn test_error_payload() {
        let response = r#"{"error": "RATE_LIMIT", "message": "Try again in 1 minute."}"#;
        match parse_vision_response(response) {
            Err(Error::VisionRejected { code, message }) => {
                assert_eq!(code, "RATE_LIMIT");
                assert_eq!(message, "Try again in 1 minute.");
            }
            other => panic!("expected VisionRejected, got {:?}", other),
        }
    }

    #[test]
    fn test_not_json() {
        assert!(matches!(
            parse_vision_response("Sorry, I cannot help with that."),
            Err(Error::InvalidVisionResponse(_))
        ));
        assert!(matches!(
            parse_vision_response("[1, 2]"),
            Err(Error::InvalidVisionResponse(_))
        ));
    }
}
