use thiserror::Error;

/// An error surfaced at the authorization boundary.
///
/// Denial itself is a normal outcome for the evaluator, not an error; this
/// taxonomy exists for callers that must turn a decision (or an upstream
/// failure) into a rejected request.
#[derive(Debug, Error)]
pub enum AccessError {
    /// The request was denied.
    ///
    /// The message is identical for every denial cause - wrong owner, forbidden
    /// action, or a row that does not exist - so a rejected caller cannot probe
    /// for row existence.
    #[error("Access denied")]
    AuthorizationDenied,

    /// The verified token payload could not be bound to a principal.
    ///
    /// Raised upstream of the evaluator, when the configured claim is missing
    /// from (or is not a string in) the payload.
    #[error("Identity verification failed: {0}")]
    IdentityVerification(String),

    /// An external collaborator (identity provider, federation broker, or data
    /// store) could not be reached.
    ///
    /// Never constructed by this crate itself; boundary callers wrap provider
    /// SDK outages in this variant.
    #[error("Upstream service unavailable: {0}")]
    UpstreamUnavailable(String),

    /// An argument which was provided was invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A policy document could not be serialized.
    #[error("Policy serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
