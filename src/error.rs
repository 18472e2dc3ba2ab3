//! Error types for meta-yt
//!
//! One crate-wide error enum, split along the line that drives the fetch
//! loop: transient failures (worth another attempt) versus definitive
//! provider rejections (retrying cannot change the outcome). The split is
//! exposed through [`MetaYtError::is_retryable`].

use thiserror::Error;

/// Result type alias using our MetaYtError type
pub type Result<T> = std::result::Result<T, MetaYtError>;

/// Main error type for meta-yt
#[derive(Error, Debug)]
pub enum MetaYtError {
    // ===== Configuration errors =====
    // Checked before any network traffic; these always fail fast.

    /// Video id was empty
    #[error("video id must not be empty")]
    InvalidVideoId,

    /// Retry budget of zero; no attempt would ever run
    #[error("retries must be at least 1")]
    InvalidRetries,

    /// A proxy configuration could not be turned into a transport proxy
    #[error("invalid proxy configuration: {0}")]
    Proxy(String),

    // ===== Definitive provider responses =====

    /// The player API answered without `videoDetails`: the video cannot be
    /// served (geo-block, private video, bot check, quota). Retrying does
    /// not change this outcome.
    #[error(
        "videoId: {video_id}, status: {status}, message: {reason}\n\
         - YouTube may think you are a robot\n\
         - YouTube has banned your IP address\n\
         - YouTube detects your IP address is coming from a cloud datacenter"
    )]
    VideoFetch {
        video_id: String,
        /// Provider-reported `playabilityStatus.status`, empty when absent
        status: String,
        /// Provider-reported `playabilityStatus.reason`, empty when absent
        reason: String,
    },

    /// The video does not exist for the caller at all (invalid id, private,
    /// region locked)
    #[error(
        "video `{video_id}` is unavailable; the id may be invalid, the video \
         private, or region locked"
    )]
    VideoUnavailable { video_id: String },

    // ===== Transient failures =====
    // Each of these consumes one retry slot; the last attempt's error is
    // the one the caller sees.

    /// Transport failure (connect, TLS, timeout)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-200 answer whose body was not JSON
    #[error("server responded with status {status} and a non-JSON body")]
    Status { status: u16 },

    /// Body was not valid JSON, or had the wrong shape for a player response
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// A decoded payload lacked a field the record requires
    #[error("player response is missing `{0}`")]
    MissingField(&'static str),

    /// A field was present but its value could not be converted
    #[error("player response field `{field}` has unusable value `{value}`")]
    InvalidField { field: &'static str, value: String },
}

impl MetaYtError {
    /// Create a definitive fetch rejection from the provider's playability
    /// fields
    pub fn video_fetch(
        video_id: impl Into<String>,
        status: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        MetaYtError::VideoFetch {
            video_id: video_id.into(),
            status: status.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidField error for a failed conversion
    pub fn invalid_field(field: &'static str, value: impl Into<String>) -> Self {
        MetaYtError::InvalidField {
            field,
            value: value.into(),
        }
    }

    /// Check if the error might go away on a retry
    ///
    /// Transport, timeout and decode failures qualify; definitive provider
    /// rejections and configuration errors do not.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            MetaYtError::Network(_)
                | MetaYtError::Status { .. }
                | MetaYtError::Json(_)
                | MetaYtError::MissingField(_)
                | MetaYtError::InvalidField { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_errors_are_retryable() {
        assert!(MetaYtError::Status { status: 503 }.is_retryable());
        assert!(MetaYtError::MissingField("videoDetails.title").is_retryable());
        assert!(MetaYtError::invalid_field("videoDetails.viewCount", "NaN").is_retryable());

        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert!(MetaYtError::Json(json_err).is_retryable());
    }

    #[test]
    fn definitive_and_config_errors_are_not_retryable() {
        assert!(!MetaYtError::video_fetch("vid", "ERROR", "Video unavailable").is_retryable());
        assert!(!MetaYtError::VideoUnavailable {
            video_id: "vid".to_string()
        }
        .is_retryable());
        assert!(!MetaYtError::InvalidVideoId.is_retryable());
        assert!(!MetaYtError::InvalidRetries.is_retryable());
        assert!(!MetaYtError::Proxy("bad scheme".to_string()).is_retryable());
    }

    #[test]
    fn video_fetch_display_carries_provider_fields() {
        let err = MetaYtError::video_fetch("vid", "ERROR", "Video unavailable");
        let text = err.to_string();
        assert!(text.contains("vid"));
        assert!(text.contains("ERROR"));
        assert!(text.contains("Video unavailable"));
    }
}
