//! Wire envelopes shared by every REST endpoint

use serde::{Deserialize, Serialize};

/// Error body returned by the API on rejected writes
///
/// Validation failures carry either a top-level `message` or a list of
/// `non_field_errors`. Framework-level errors use `detail`, which is kept for
/// logging only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub non_field_errors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ApiErrorBody {
    /// Text worth showing to the operator, if the server supplied any.
    ///
    /// Precedence: `message`, then the first non-field error.
    pub fn user_message(&self) -> Option<&str> {
        fn non_blank(s: &str) -> Option<&str> {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then_some(trimmed)
        }

        self.message
            .as_deref()
            .and_then(non_blank)
            .or_else(|| self.non_field_errors.iter().find_map(|e| non_blank(e)))
    }
}

/// List response: either a bare array or a paginated page with `results`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Plain(Vec<T>),
    Paged {
        results: Vec<T>,
        #[serde(default)]
        count: Option<u64>,
    },
}

impl<T> ListEnvelope<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Plain(items) => items,
            ListEnvelope::Paged { results, .. } => results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(json: &str) -> ApiErrorBody {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_message_wins_over_field_errors() {
        let b = body(r#"{"message": "Tier already has a rule", "non_field_errors": ["other"]}"#);
        assert_eq!(b.user_message(), Some("Tier already has a rule"));
    }

    #[test]
    fn test_first_non_field_error_is_fallback() {
        let b = body(
            r#"{"non_field_errors": ["The fields product, tier must make a unique set.", "second"]}"#,
        );
        assert_eq!(
            b.user_message(),
            Some("The fields product, tier must make a unique set.")
        );
    }

    #[test]
    fn test_blank_message_is_skipped() {
        let b = body(r#"{"message": "  ", "non_field_errors": ["", "Must be unique."]}"#);
        assert_eq!(b.user_message(), Some("Must be unique."));
    }

    #[test]
    fn test_detail_only_body_has_no_message() {
        let b = body(r#"{"detail": "Authentication credentials were not provided."}"#);
        assert_eq!(
            b.detail.as_deref(),
            Some("Authentication credentials were not provided.")
        );
        assert_eq!(b.user_message(), None);
    }

    #[test]
    fn test_unrelated_body_has_no_message() {
        let b = body(r#"{"value": ["A valid number is required."]}"#);
        assert_eq!(b.user_message(), None);
    }

    #[test]
    fn test_list_envelope_shapes() {
        let plain: ListEnvelope<u32> = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(plain.into_items(), vec![1, 2, 3]);

        let paged: ListEnvelope<u32> =
            serde_json::from_str(r#"{"count": 2, "next": null, "results": [4, 5]}"#).unwrap();
        assert_eq!(paged.into_items(), vec![4, 5]);
    }
}
