use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TransportError;

/// What came back over the wire, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parses a 2xx body into `T`. Anything else fails closed.
    pub fn parse<T>(self) -> Result<T, TransportError>
    where
        T: for<'de> Deserialize<'de>,
    {
        if !self.is_success() {
            return Err(TransportError::Status {
                status: self.status,
                status_text: self.status_text,
                body: self.body,
            });
        }

        serde_json::from_str(&self.body).map_err(|e| TransportError::Malformed {
            reason: e.to_string(),
            body: self.body,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

impl EnrollResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub filename: String,
    #[serde(default)]
    pub person_name: Option<String>,
    pub distance: f64,
    #[serde(rename = "image_base64")]
    pub image_payload: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub matches: Option<Vec<MatchResult>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub cache_count: usize,
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

/// Pulls the `detail` field out of an error body. Strings are returned
/// verbatim, structured details as compact JSON.
pub fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;

    match parsed.detail? {
        Value::Null => None,
        Value::String(text) if text.trim().is_empty() => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(status: u16, body: &str) -> HttpReply {
        HttpReply {
            status,
            status_text: String::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn search_response_tolerates_missing_matches() {
        let parsed: SearchResponse = reply(200, r#"{"count":0}"#).parse().unwrap();
        assert_eq!(parsed.matches, None);
    }

    #[test]
    fn match_result_reads_backend_field_names() {
        let parsed: SearchResponse = reply(
            200,
            r#"{"count":1,"matches":[{"filename":"ann.jpg","person_name":"Ann","distance":0.31,"image_base64":"AAEC"}]}"#,
        )
        .parse()
        .unwrap();

        let matches = parsed.matches.unwrap();
        assert_eq!(matches[0].filename, "ann.jpg");
        assert_eq!(matches[0].person_name.as_deref(), Some("Ann"));
        assert_eq!(matches[0].image_payload, "AAEC");
    }

    #[test]
    fn shape_mismatch_fails_closed() {
        let err = reply(200, r#"{"matches":[{"filename":3}]}"#)
            .parse::<SearchResponse>()
            .unwrap_err();
        assert!(matches!(err, TransportError::Malformed { .. }));

        let err = reply(200, "<html>oops</html>").parse::<EnrollResponse>().unwrap_err();
        assert!(matches!(err, TransportError::Malformed { .. }));
    }

    #[test]
    fn non_2xx_becomes_status_error() {
        let err = reply(502, "bad gateway").parse::<SearchResponse>().unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status code 502");
    }

    #[test]
    fn detail_extraction() {
        assert_eq!(
            error_detail(r#"{"detail":"No face detected: x"}"#).as_deref(),
            Some("No face detected: x")
        );
        assert_eq!(
            error_detail(r#"{"detail":[{"loc":["body","file"]}]}"#).as_deref(),
            Some(r#"[{"loc":["body","file"]}]"#)
        );
        assert_eq!(error_detail(r#"{"other":1}"#), None);
        assert_eq!(error_detail("not json"), None);
    }
}
