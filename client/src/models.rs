use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result of one query submission, success or failure.
///
/// Exactly one of `response`/`error` carries meaning; `context` may
/// accompany either. The backend omits fields freely (its missing-parameter
/// answer has no `query` at all), so every field tolerates absence and
/// unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(default)]
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Answer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}

impl QueryResult {
    /// The displayed answer text, if any. Empty content counts as absent.
    pub fn answer_text(&self) -> Option<&str> {
        self.response
            .as_ref()
            .map(|answer| answer.content.as_str())
            .filter(|content| !content.is_empty())
    }
}

/// Answer payload as the backend serializes it. Only `content` is
/// interpreted; provider metadata (token counts, model name, finish reason,
/// tool-call arrays) passes through untouched in `metadata`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Answer {
    #[serde(default)]
    pub content: String,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

/// Error body the backend may attach to a non-success status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_backend_answer() {
        let body = r#"{
            "query": "what is a monad",
            "response": {
                "content": "A monoid in the category of endofunctors.",
                "additional_kwargs": {},
                "response_metadata": {
                    "finish_reason": "STOP",
                    "model_name": "gemini-2.5-flash",
                    "safety_ratings": []
                },
                "type": "ai",
                "name": null,
                "id": "run-123",
                "tool_calls": [],
                "invalid_tool_calls": [],
                "usage_metadata": {
                    "input_tokens": 11,
                    "output_tokens": 9,
                    "total_tokens": 20
                }
            },
            "context": ["snippet"]
        }"#;

        let result: QueryResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.query, "what is a monad");
        assert_eq!(
            result.answer_text(),
            Some("A monoid in the category of endofunctors.")
        );

        let answer = result.response.unwrap();
        assert!(answer.metadata.contains_key("response_metadata"));
        assert_eq!(
            answer.metadata["usage_metadata"]["total_tokens"],
            serde_json::json!(20)
        );
        assert_eq!(result.context.unwrap(), vec!["snippet".to_string()]);
    }

    #[test]
    fn tolerates_missing_fields() {
        let result: QueryResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result.query, "");
        assert!(result.response.is_none());
        assert!(result.context.is_none());
        assert!(result.error.is_none());
    }

    #[test]
    fn error_only_body_still_parses() {
        // The backend answers a missing `q` with 200 and just an error field.
        let result: QueryResult =
            serde_json::from_str(r#"{"error": "missing query parameter 'q'"}"#).unwrap();
        assert_eq!(result.query, "");
        assert_eq!(result.error.as_deref(), Some("missing query parameter 'q'"));
        assert!(result.answer_text().is_none());
    }

    #[test]
    fn empty_content_is_not_an_answer() {
        let result: QueryResult = serde_json::from_str(r#"{"response": {"content": ""}}"#).unwrap();
        assert!(result.answer_text().is_none());
    }

    #[test]
    fn serializing_success_omits_error_fields() {
        let result = QueryResult {
            query: "q".to_string(),
            response: Some(Answer {
                content: "a".to_string(),
                metadata: Map::new(),
            }),
            ..Default::default()
        };

        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("error").is_none());
        assert!(value.get("fallback").is_none());
    }
}
