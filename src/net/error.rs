#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failures surfaced by the REST layer.
///
/// A 401 on a protected endpoint is the uniform session-expiry signal and
/// always bubbles up to the shell logout; everything else is handled locally
/// by the page that issued the request. No request is ever retried.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server rejected the request; the message comes from the error
    /// body's `detail` field (or a generic fallback).
    #[error("{0}")]
    Rejected(String),
    /// 401 on a protected endpoint: the session is no longer valid.
    #[error("session expired")]
    Unauthorized,
    /// Other non-success status on a protected endpoint.
    #[error("request failed with status {0}")]
    Status(u16),
    /// Network or decode failure.
    #[error("connection failed")]
    Transport,
}
