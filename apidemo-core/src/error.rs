use thiserror::Error;

/// Errors produced while talking to one of the remote APIs.
///
/// None of these abort the menu loop; actions render them and move on.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with anything other than 200.
    #[error("resource not found (HTTP {status})")]
    NotFound { status: u16 },

    /// The request never produced a response (DNS, connect, timeout, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// The body was not JSON, or lacked a field we need.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// A configured base URL could not be parsed.
    #[error("invalid endpoint '{0}'")]
    InvalidEndpoint(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    pub(crate) fn missing(field: &str) -> Self {
        ApiError::Malformed(format!("missing field `{field}`"))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_distinct_from_transport_failure() {
        assert!(ApiError::NotFound { status: 404 }.is_not_found());
        assert!(!ApiError::Transport("connection refused".into()).is_not_found());
    }

    #[test]
    fn json_errors_become_malformed() {
        let err: ApiError = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, ApiError::Malformed(_)));
        assert!(err.to_string().starts_with("malformed response"));
    }
}
