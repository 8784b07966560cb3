//! Request types and validation for HTTP endpoints.

use serde::{Deserialize, Serialize};

use checkout_lib::{segments, CheckoutConfig, DEFAULT_PREFERRED_DOUBLES};

use crate::ProblemDetails;

/// Validation trait for request types.
///
/// Implementations should validate all fields and return a `ProblemDetails`
/// error for invalid input. The `request_id` populates the `instance` field.
///
/// Returns a boxed `ProblemDetails` to avoid large `Result::Err` variants.
pub trait Validate {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

/// Request for the ranked checkouts of one remaining score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Remaining score. Values outside 2-170 yield an empty result, not an error.
    pub target: i64,

    /// Preferred finishing doubles; codes are matched case-insensitively.
    #[serde(default = "default_preferred_doubles")]
    pub preferred_doubles: Vec<String>,

    /// Drop routes that do not finish on a preferred double.
    #[serde(default)]
    pub show_only_preferred: bool,
}

fn default_preferred_doubles() -> Vec<String> {
    DEFAULT_PREFERRED_DOUBLES.map(String::from).to_vec()
}

impl CheckoutRequest {
    /// Convert to a library [`CheckoutConfig`].
    pub fn to_config(&self) -> CheckoutConfig {
        CheckoutConfig::with_preferred(
            self.preferred_doubles
                .iter()
                .map(|code| code.trim().to_ascii_uppercase()),
        )
        .only_preferred(self.show_only_preferred)
    }
}

impl Validate for CheckoutRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        let max_codes = segments().finishing().len();
        if self.preferred_doubles.len() > max_codes {
            return Err(Box::new(ProblemDetails::bad_request(
                format!("The 'preferred_doubles' field may list at most {max_codes} codes"),
                request_id,
            )));
        }

        if self
            .preferred_doubles
            .iter()
            .any(|code| code.trim().is_empty())
        {
            return Err(Box::new(ProblemDetails::bad_request(
                "The 'preferred_doubles' field cannot contain empty codes",
                request_id,
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(codes: &[&str]) -> CheckoutRequest {
        CheckoutRequest {
            target: 40,
            preferred_doubles: codes.iter().map(|c| c.to_string()).collect(),
            show_only_preferred: false,
        }
    }

    #[test]
    fn test_defaults_when_fields_missing() {
        let request: CheckoutRequest = serde_json::from_str(r#"{"target": 170}"#).unwrap();
        assert_eq!(request.preferred_doubles, vec!["D20", "D16"]);
        assert!(!request.show_only_preferred);
    }

    #[test]
    fn test_valid_request() {
        assert!(request(&["D20", "d16", "DBULL"]).validate("req-1").is_ok());
        assert!(request(&[]).validate("req-1").is_ok());
    }

    #[test]
    fn test_empty_code_rejected() {
        let problem = request(&["D20", "  "]).validate("req-2").unwrap_err();
        assert_eq!(problem.status, 400);
        assert_eq!(problem.instance.as_deref(), Some("req-2"));
    }

    #[test]
    fn test_too_many_codes_rejected() {
        let codes: Vec<String> = (1..=22).map(|n| format!("D{n}")).collect();
        let refs: Vec<&str> = codes.iter().map(String::as_str).collect();
        let problem = request(&refs).validate("req-3").unwrap_err();
        assert!(problem.detail.unwrap().contains("at most 21"));
    }

    #[test]
    fn test_config_normalises_codes() {
        let config = CheckoutRequest {
            show_only_preferred: true,
            ..request(&[" d8", "dbull"])
        }
        .to_config();
        assert!(config.is_preferred("D8"));
        assert!(config.is_preferred("DBULL"));
        assert!(config.show_only_preferred);
    }
}
