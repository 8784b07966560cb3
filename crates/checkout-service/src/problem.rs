//! Error bodies in the `application/problem+json` shape (RFC 9457).
//!
//! Every non-2xx answer from the checkout API carries one of these, with the
//! request ID in `instance` so clients can quote it back.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use checkout_lib::Error as LibError;

/// `type` of a 404 for a segment code that is not on the board.
pub const PROBLEM_UNKNOWN_SEGMENT: &str = "/problems/unknown-segment";

/// `type` of a 400 for a malformed or invalid checkout request.
pub const PROBLEM_INVALID_REQUEST: &str = "/problems/invalid-request";

const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// A problem document returned instead of a checkout payload.
///
/// # Example
///
/// ```
/// use checkout_service::{ProblemDetails, PROBLEM_INVALID_REQUEST};
/// use axum::http::StatusCode;
///
/// let problem = ProblemDetails::new(
///     PROBLEM_INVALID_REQUEST,
///     "Invalid Request",
///     StatusCode::BAD_REQUEST,
/// )
/// .with_detail("preferred_doubles may list at most 21 codes")
/// .with_request_id("req-12345");
/// assert_eq!(problem.status, 400);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// Relative URI naming the kind of failure.
    #[serde(rename = "type")]
    pub type_uri: String,

    pub title: String,

    pub status: u16,

    /// What went wrong with this particular request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Echo of the `X-Request-ID` of the failed request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,

    /// Always "application/problem+json".
    pub content_type: String,
}

impl ProblemDetails {
    pub fn new(type_uri: impl Into<String>, title: impl Into<String>, status: StatusCode) -> Self {
        Self {
            type_uri: type_uri.into(),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
            content_type: PROBLEM_CONTENT_TYPE.to_string(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.instance = Some(request_id.into());
        self
    }

    /// 400 for a body that failed to parse or validate.
    pub fn bad_request(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INVALID_REQUEST,
            "Invalid Request",
            StatusCode::BAD_REQUEST,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }

    /// 404 for a segment code that is not on the board, listing near misses.
    pub fn unknown_segment(
        code: &str,
        suggestions: &[String],
        request_id: impl Into<String>,
    ) -> Self {
        let detail = if suggestions.is_empty() {
            format!("Segment '{}' not found", code)
        } else {
            format!(
                "Segment '{}' not found. Did you mean: {}?",
                code,
                suggestions.join(", ")
            )
        };

        Self::new(
            PROBLEM_UNKNOWN_SEGMENT,
            "Unknown Segment",
            StatusCode::NOT_FOUND,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }

}

impl std::fmt::Display for ProblemDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.title,
            self.detail.as_deref().unwrap_or("")
        )
    }
}

impl std::error::Error for ProblemDetails {}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = Json(&self).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(PROBLEM_CONTENT_TYPE),
        );
        *response.status_mut() = status;
        response
    }
}

/// Map a segment lookup failure onto a problem document.
///
/// Unknown codes become 404s; everything else is the caller's fault (400).
pub fn from_lib_error(error: &LibError, request_id: &str) -> ProblemDetails {
    match error {
        LibError::UnknownSegment { code, suggestions } => {
            ProblemDetails::unknown_segment(code, suggestions, request_id)
        }
        LibError::NotFinishingSegment { .. }
        | LibError::EmptyRoute
        | LibError::TooManyDarts { .. } => ProblemDetails::bad_request(error.to_string(), request_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_details_serialization() {
        let problem = ProblemDetails::bad_request("bad input", "req-1");
        let json = serde_json::to_value(&problem).unwrap();

        assert_eq!(json["type"], PROBLEM_INVALID_REQUEST);
        assert_eq!(json["status"], 400);
        assert_eq!(json["detail"], "bad input");
        assert_eq!(json["instance"], "req-1");
        assert_eq!(json["content_type"], "application/problem+json");
    }

    #[test]
    fn test_problem_details_skips_missing_fields() {
        let problem = ProblemDetails::new(
            PROBLEM_UNKNOWN_SEGMENT,
            "Unknown Segment",
            StatusCode::NOT_FOUND,
        );
        let json = serde_json::to_string(&problem).unwrap();
        assert!(!json.contains("detail"));
        assert!(!json.contains("instance"));
    }

    #[test]
    fn test_unknown_segment_lists_suggestions() {
        let problem = ProblemDetails::unknown_segment("D21", &["D20".to_string()], "req-2");
        assert_eq!(problem.status, 404);
        assert_eq!(
            problem.detail.as_deref(),
            Some("Segment 'D21' not found. Did you mean: D20?")
        );
    }

    #[test]
    fn test_from_lib_error() {
        let unknown = LibError::UnknownSegment {
            code: "X1".to_string(),
            suggestions: Vec::new(),
        };
        let problem = from_lib_error(&unknown, "req-3");
        assert_eq!(problem.type_uri, PROBLEM_UNKNOWN_SEGMENT);
        assert_eq!(problem.detail.as_deref(), Some("Segment 'X1' not found"));

        let not_finishing = LibError::NotFinishingSegment {
            code: "T20".to_string(),
        };
        let problem = from_lib_error(&not_finishing, "req-4");
        assert_eq!(problem.status, 400);
        assert!(problem.detail.unwrap().contains("T20"));
    }

    #[test]
    fn test_into_response_sets_status_and_content_type() {
        let response = ProblemDetails::bad_request("nope", "req-5").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/problem+json"
        );
    }
}
