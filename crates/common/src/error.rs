use thiserror::Error;

/// Prefix of every error message relayed to the chat.
pub const ERROR_NOTIFICATION_PREFIX: &str = "Program Error: ";

/// Malformed or unexpected structure in an upstream payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("{what} must be a JSON object, got {found}")]
    NotAnObject {
        what: &'static str,
        found: &'static str,
    },

    #[error("key `{key}` is missing from {what}")]
    MissingKey {
        what: &'static str,
        key: &'static str,
    },

    #[error("key `{key}` must be {expected}, got {found}")]
    WrongType {
        key: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("response body is not valid JSON: {0}")]
    InvalidJson(String),
}

/// Failure of one polling cycle.
///
/// Every variant except [`PollError::Internal`] is relayed to the chat.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PollError {
    /// The request never reached the API. The cause is logged, not rendered,
    /// so consecutive network faults collapse into one notification.
    #[error("review API request failed, try again later")]
    Transport { cause: String },

    #[error("review API answered with HTTP {status}, expected 200")]
    UpstreamStatus { status: u16 },

    #[error("unexpected API response: {0}")]
    Shape(#[from] ShapeError),

    #[error("unexpected homework status: {status}")]
    UnknownStatus { status: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl PollError {
    /// Whether this failure should be forwarded to the chat.
    pub fn is_notifiable(&self) -> bool {
        !matches!(self, PollError::Internal(_))
    }

    /// Text sent to the chat, also used as the de-duplication key.
    pub fn notification(&self) -> String {
        format!("{ERROR_NOTIFICATION_PREFIX}{self}")
    }
}

/// Start-up configuration errors. Always fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_internal_is_silent() {
        assert!(
            PollError::Transport {
                cause: "connection refused".into()
            }
            .is_notifiable()
        );
        assert!(PollError::UpstreamStatus { status: 503 }.is_notifiable());
        assert!(PollError::Shape(ShapeError::InvalidJson("eof".into())).is_notifiable());
        assert!(
            PollError::UnknownStatus {
                status: "lost".into()
            }
            .is_notifiable()
        );
        assert!(!PollError::Internal("bad endpoint".into()).is_notifiable());
    }

    #[test]
    fn test_transport_cause_not_rendered() {
        let a = PollError::Transport {
            cause: "dns failure".into(),
        };
        let b = PollError::Transport {
            cause: "timed out".into(),
        };
        assert_eq!(a.notification(), b.notification());
        assert!(!a.notification().contains("dns"));
    }

    #[test]
    fn test_notification_prefix() {
        let err = PollError::Shape(ShapeError::MissingKey {
            what: "API response",
            key: "homeworks",
        });
        assert_eq!(
            err.notification(),
            "Program Error: unexpected API response: key `homeworks` is missing from API response"
        );
    }

    #[test]
    fn test_missing_lists_every_key() {
        let err = ConfigError::Missing(vec!["PRACTICUM_TOKEN", "TELEGRAM_CHAT_ID"]);
        assert_eq!(
            err.to_string(),
            "missing required environment variables: PRACTICUM_TOKEN, TELEGRAM_CHAT_ID"
        );
    }
}
