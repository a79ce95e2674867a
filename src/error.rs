/// Result type used throughout the client
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything a request against the osu! API can fail with
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The token endpoint rejected the client credentials
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The API answered a user lookup with a null error marker
    #[error("no user was found by the name or id {0:?}")]
    UserNotFound(String),

    /// The API answered a beatmap lookup with a null error marker
    #[error("no beatmap was found by the id {0:?}")]
    BeatmapNotFound(String),

    /// A caller-supplied type parameter is not one of the accepted values
    #[error("{0}")]
    InvalidArgument(String),

    /// Reqwest HTTP error
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Json error
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// The client was used after `close`
    #[error("the client session has been closed")]
    Closed,
}

impl Error {
    /// True for either of the lookup misses
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::UserNotFound(_) | Error::BeatmapNotFound(_))
    }

    /// True for network and decoding failures
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Json(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_not_found() {
        assert!(Error::UserNotFound("peppy".into()).is_not_found());
        assert!(Error::BeatmapNotFound("1".into()).is_not_found());
        assert!(!Error::Closed.is_not_found());
    }

    #[test]
    fn classifies_transport() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(Error::from(err).is_transport());
        assert!(!Error::Authentication("nope".into()).is_transport());
    }

    #[test]
    fn messages_name_the_lookup() {
        let err = Error::UserNotFound("Sawsha".into());
        assert_eq!(err.to_string(), "no user was found by the name or id \"Sawsha\"");
    }
}
