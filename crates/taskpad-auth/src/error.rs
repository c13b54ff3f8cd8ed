use thiserror::Error;

/// Failure taxonomy for token handling and request authorization.
///
/// Every variant maps to a 401 at the HTTP boundary, but they stay distinct
/// here so logs and tests can tell a stale token from a forged one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No `Authorization` header was present on the request.
    #[error("authorization header missing")]
    MissingAuth,

    /// The `Authorization` header is not exactly `bearer <token>`.
    #[error("authorization header is not a well-formed bearer scheme")]
    BadHeaderFormat,

    /// The token string was empty after trimming.
    #[error("empty token")]
    EmptyToken,

    /// The signature does not verify against the configured key.
    #[error("token signature mismatch")]
    InvalidSignature,

    /// The token is structurally corrupt or its claims do not decode.
    #[error("malformed token")]
    MalformedToken,

    /// The token was valid once, but its validity window has passed.
    #[error("token expired")]
    TokenExpired,

    /// Token serialization failed while issuing. Internal, not a 401.
    #[error("failed to encode token: {0}")]
    Encoding(String),
}

/// Failure taxonomy for credential hashing and verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    /// The plaintext does not match the stored hash. The expected outcome of
    /// a wrong password, not an internal fault.
    #[error("credential mismatch")]
    Mismatch,

    /// The stored string was not produced by this hashing scheme. A
    /// data-integrity signal, distinct from a plain mismatch.
    #[error("stored credential hash is malformed")]
    MalformedHash,

    /// The hash operation itself failed.
    #[error("hashing failed: {0}")]
    Hashing(String),
}
