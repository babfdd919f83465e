//! Error types for call sessions

/// Result type alias using the call Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running a call session
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Local capture could not be started (permission denied, no device, busy)
    #[error("Media access error: {0}")]
    MediaAccess(String),

    /// The session already holds a local stream
    #[error("Local media already acquired for this session")]
    MediaAlreadyAcquired,

    /// The platform could not allocate a peer connection
    #[error("Connection setup error: {0}")]
    ConnectionSetup(String),

    /// Offer/answer/description operation attempted in an invalid state
    #[error("Negotiation error: {0}")]
    Negotiation(String),

    /// A remote ICE candidate could not be applied (never propagated by the session)
    #[error("Candidate apply failure: {0}")]
    CandidateApply(String),

    /// The session has been ended and cannot be used again
    #[error("Session closed")]
    SessionClosed,

    /// Invalid configuration parameter
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// WebRTC library error
    #[error("WebRTC error: {0}")]
    WebRtcError(String),

    /// Any other error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Errors that leave the session unusable for the current call
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::MediaAccess(_) | Error::ConnectionSetup(_) | Error::SessionClosed
        )
    }

    /// Check if this error came from offer/answer sequencing
    pub fn is_negotiation_error(&self) -> bool {
        matches!(self, Error::Negotiation(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Negotiation("no connection".to_string());
        assert_eq!(err.to_string(), "Negotiation error: no connection");
        assert_eq!(Error::SessionClosed.to_string(), "Session closed");
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::MediaAccess("denied".to_string()).is_fatal());
        assert!(Error::SessionClosed.is_fatal());
        assert!(!Error::CandidateApply("late".to_string()).is_fatal());
        assert!(!Error::Negotiation("twice".to_string()).is_fatal());
    }

    #[test]
    fn test_error_is_negotiation_error() {
        assert!(Error::Negotiation("x".to_string()).is_negotiation_error());
        assert!(!Error::ConnectionSetup("x".to_string()).is_negotiation_error());
    }

    #[test]
    fn test_serde_error_conversion() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(Error::from(err), Error::Serialization(_)));
    }
}
