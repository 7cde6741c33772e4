//! Directions client error types.

use std::fmt;

/// Errors from a directions lookup.
#[derive(Debug)]
pub enum MapsError {
    /// HTTP request failed (connection refused, TLS, etc.)
    Http(reqwest::Error),

    /// The request did not complete within the configured timeout
    Timeout,

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// The API answered but refused the query (body `status` field)
    Rejected {
        status: String,
        message: Option<String>,
    },

    /// Rate limited or over quota
    RateLimited,

    /// Invalid API key or unauthorized
    Unauthorized,

    /// Client not configured (e.g. no API key)
    NotConfigured(String),
}

impl fmt::Display for MapsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapsError::Http(e) => write!(f, "HTTP error: {e}"),
            MapsError::Timeout => write!(f, "directions request timed out"),
            MapsError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            MapsError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            MapsError::Rejected { status, message } => {
                write!(f, "directions query rejected: {status}")?;
                if let Some(message) = message {
                    write!(f, " ({message})")?;
                }
                Ok(())
            }
            MapsError::RateLimited => write!(f, "rate limited by directions API"),
            MapsError::Unauthorized => write!(f, "unauthorized (invalid API key)"),
            MapsError::NotConfigured(msg) => write!(f, "not configured: {msg}"),
        }
    }
}

impl std::error::Error for MapsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapsError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for MapsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            MapsError::Timeout
        } else {
            MapsError::Http(err)
        }
    }
}
