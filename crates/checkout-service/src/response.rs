//! Response wrapper for successful HTTP responses.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Wrapper for successful responses with content type metadata.
///
/// Mirrors the `content_type` field of `ProblemDetails` so clients can
/// branch on a single field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResponse<T> {
    /// The actual response payload.
    #[serde(flatten)]
    pub data: T,

    pub content_type: String,
}

impl<T> ServiceResponse<T> {
    /// Create a new successful response with the default content type.
    pub fn new(data: T) -> Self {
        Self {
            data,
            content_type: "application/json".to_string(),
        }
    }
}

impl<T> From<T> for ServiceResponse<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}

impl<T: Serialize> IntoResponse for ServiceResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Sample {
        min_darts: u8,
        routes: Vec<String>,
    }

    #[test]
    fn test_response_flattens_payload() {
        let response = ServiceResponse::new(Sample {
            min_darts: 3,
            routes: vec!["T20,T20,DBULL".to_string()],
        });
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["min_darts"], 3);
        assert_eq!(json["routes"][0], "T20,T20,DBULL");
        assert_eq!(json["content_type"], "application/json");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_response_from_trait() {
        let data = Sample {
            min_darts: 1,
            routes: Vec::new(),
        };
        let response: ServiceResponse<Sample> = data.clone().into();
        assert_eq!(response.data, data);
    }
}
