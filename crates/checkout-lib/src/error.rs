use thiserror::Error;

/// Convenient result alias for the checkout library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// The checkout computation itself never fails; these errors only surface
/// when a caller looks up segments by code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Raised when a segment code does not name any legal dart.
    #[error("unknown segment code: {code}{}", format_suggestions(.suggestions))]
    UnknownSegment {
        code: String,
        suggestions: Vec<String>,
    },

    /// Raised when a code names a real segment that cannot finish a checkout.
    #[error("segment {code} is not a double and cannot finish a checkout")]
    NotFinishingSegment { code: String },

    /// Raised when building a route from an empty list of codes.
    #[error("a route needs at least one dart")]
    EmptyRoute,

    /// Raised when building a route longer than three darts.
    #[error("a route may use at most {max} darts, got {count}")]
    TooManyDarts { count: usize, max: usize },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
