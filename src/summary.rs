//! Review and summary records exchanged with the backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One review as returned by the reviews endpoint.
///
/// The client never looks inside; reviews are forwarded to the summary
/// endpoint exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Review(pub serde_json::Value);

impl From<&str> for Review {
    fn from(text: &str) -> Self {
        Review(serde_json::Value::String(text.to_string()))
    }
}

/// The overall rating, which the backend may send as text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rating {
    Number(f64),
    Text(String),
}

impl Default for Rating {
    fn default() -> Self {
        Rating::Text("N/A".to_string())
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Number(n) => write!(f, "{n}"),
            Rating::Text(s) => f.write_str(s.trim()),
        }
    }
}

/// The structured digest produced by the summary endpoint.
///
/// List fields are kept as received, blank entries included. Use the
/// accessors to get only the entries worth showing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Summary {
    #[serde(rename = "Overall Rating")]
    pub overall_rating: Rating,
    #[serde(rename = "Pros")]
    pub pros: Vec<String>,
    #[serde(rename = "Cons")]
    pub cons: Vec<String>,
    #[serde(rename = "Specific Feedback")]
    pub specific_feedback: Vec<String>,
    #[serde(rename = "Recommendations")]
    pub recommendations: Vec<String>,
    #[serde(rename = "Overall Summary")]
    pub overall_summary: String,
    #[serde(rename = "Alternative Professor")]
    pub alternative_professor: String,
}

const SUMMARY_KEYS: &[&str] = &[
    "Overall Rating",
    "Pros",
    "Cons",
    "Specific Feedback",
    "Recommendations",
    "Overall Summary",
    "Alternative Professor",
];

impl Summary {
    /// Decode a summary response body.
    ///
    /// Fails when the body is not an object or carries none of the summary
    /// keys, e.g. the bare `{"summary": "..."}` the backend sends when it
    /// had nothing to summarize.
    pub fn from_json(value: serde_json::Value) -> anyhow::Result<Self> {
        let Some(object) = value.as_object() else {
            anyhow::bail!("summary response is not an object: {}", value);
        };
        if !SUMMARY_KEYS.iter().any(|key| object.contains_key(*key)) {
            anyhow::bail!("summary response has no summary fields: {}", value);
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn pros(&self) -> Vec<&str> {
        non_blank(&self.pros)
    }

    pub fn cons(&self) -> Vec<&str> {
        non_blank(&self.cons)
    }

    pub fn specific_feedback(&self) -> Vec<&str> {
        non_blank(&self.specific_feedback)
    }

    pub fn recommendations(&self) -> Vec<&str> {
        non_blank(&self.recommendations)
    }

    /// A copy with the blank list entries dropped, for output.
    pub fn shown(&self) -> Summary {
        Summary {
            overall_rating: self.overall_rating.clone(),
            pros: owned(&self.pros()),
            cons: owned(&self.cons()),
            specific_feedback: owned(&self.specific_feedback()),
            recommendations: owned(&self.recommendations()),
            overall_summary: self.overall_summary.clone(),
            alternative_professor: self.alternative_professor.clone(),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn non_blank(items: &[String]) -> Vec<&str> {
    items
        .iter()
        .map(String::as_str)
        .filter(|item| !item.trim().is_empty())
        .collect()
}

/// Body of `POST /api/reviews`.
#[derive(Debug, Serialize)]
pub struct ReviewsRequest<'a> {
    pub name: &'a str,
}

/// Response of `POST /api/reviews`.
#[derive(Debug, Deserialize)]
pub struct ReviewsResponse {
    pub reviews: Vec<Review>,
    /// Set by the backend when it could not locate the professor page.
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `POST /api/summary`.
#[derive(Debug, Serialize)]
pub struct SummaryRequest<'a> {
    pub reviews: &'a [Review],
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn smith() -> serde_json::Value {
        json!({
            "Overall Rating": " 4.5",
            "Pros": ["Clear"],
            "Cons": [""],
            "Specific Feedback": ["Fair exams", "", "  "],
            "Recommendations": ["Go to office hours"],
            "Overall Summary": "Solid lecturer.",
            "Alternative Professor": "Not needed"
        })
    }

    #[test]
    fn decodes_spaced_keys() {
        let summary = Summary::from_json(smith()).unwrap();
        assert_eq!(summary.overall_rating, Rating::Text(" 4.5".to_string()));
        assert_eq!(summary.overall_summary, "Solid lecturer.");
        assert_eq!(summary.alternative_professor, "Not needed");
    }

    #[test]
    fn blank_entries_are_filtered() {
        let summary = Summary::from_json(smith()).unwrap();
        assert_eq!(summary.pros(), vec!["Clear"]);
        assert!(summary.cons().is_empty());
        assert_eq!(summary.specific_feedback(), vec!["Fair exams"]);
        // raw data is untouched
        assert_eq!(summary.cons, vec![String::new()]);
    }

    #[test]
    fn shown_drops_blank_entries_only() {
        let shown = Summary::from_json(smith()).unwrap().shown();
        assert_eq!(shown.pros, vec!["Clear".to_string()]);
        assert!(shown.cons.is_empty());
        assert_eq!(shown.specific_feedback, vec!["Fair exams".to_string()]);
        assert_eq!(shown.overall_summary, "Solid lecturer.");
    }

    #[test]
    fn numeric_rating() {
        let summary = Summary::from_json(json!({"Overall Rating": 7, "Pros": []})).unwrap();
        assert_eq!(summary.overall_rating, Rating::Number(7.0));
        assert_eq!(summary.overall_rating.to_string(), "7");
    }

    #[test]
    fn text_rating_displays_trimmed() {
        assert_eq!(Rating::Text(" 8/10".to_string()).to_string(), "8/10");
    }

    #[test]
    fn missing_fields_default() {
        let summary = Summary::from_json(json!({"Pros": ["Kind"]})).unwrap();
        assert_eq!(summary.overall_rating.to_string(), "N/A");
        assert!(summary.cons.is_empty());
        assert!(summary.overall_summary.is_empty());
    }

    #[test]
    fn bare_summary_message_is_rejected() {
        let err = Summary::from_json(json!({"summary": "This professor does not exist"}))
            .unwrap_err();
        assert!(err.to_string().contains("no summary fields"));
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(Summary::from_json(json!(["Pros"])).is_err());
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        assert!(Summary::from_json(json!({"Pros": "not a list"})).is_err());
    }

    #[test]
    fn reviews_response_with_timeout_hint() {
        let resp: ReviewsResponse =
            serde_json::from_value(json!({"reviews": [], "error": "timeout"})).unwrap();
        assert!(resp.reviews.is_empty());
        assert_eq!(resp.error.as_deref(), Some("timeout"));
    }

    #[test]
    fn reviews_pass_through_untouched() {
        let resp: ReviewsResponse =
            serde_json::from_value(json!({"reviews": ["great", {"text": "ok", "stars": 3}]}))
                .unwrap();
        let body = serde_json::to_value(SummaryRequest {
            reviews: &resp.reviews,
        })
        .unwrap();
        assert_eq!(body, json!({"reviews": ["great", {"text": "ok", "stars": 3}]}));
    }

    #[test]
    fn reviews_request_shape() {
        let body = serde_json::to_value(ReviewsRequest { name: "Smith" }).unwrap();
        assert_eq!(body, json!({"name": "Smith"}));
    }
}
