//! Error taxonomy for upstream requests.

/// Failure modes of a market-data request.
///
/// Variants carry rendered messages rather than error sources so that a
/// failed outcome can be cloned into the shared fetch cache and handed to
/// every observer of the same key.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (DNS, TLS, connection drop, ...).
    #[error("request failed: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),
    /// The upstream has no record of the requested identifier.
    #[error("no such coin: {0}")]
    NotFound(String),
    /// Any other non-success HTTP status.
    #[error("server returned status {0}")]
    Status(u16),
}

impl ApiError {
    pub(crate) fn network(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }

    pub(crate) fn decode(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(
            ApiError::NotFound("btc-bitcoin".into()).to_string(),
            "no such coin: btc-bitcoin"
        );
        assert_eq!(ApiError::Status(503).to_string(), "server returned status 503");
    }

    #[test]
    fn decode_errors_keep_serde_context() {
        let err = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let api = ApiError::decode(err);
        assert!(matches!(api, ApiError::Decode(_)));
    }
}
