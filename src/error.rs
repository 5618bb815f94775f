//! Standard errors used by all functions in the crate.

use crate::pagination::PaginationParseError;
use std::{collections::HashMap, fmt};

/// Error collecting all possible failures of the Shopify payouts client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Transport-level failure reported by reqwest (connection refused, timeout, ...).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    /// Non-successful HTTP status returned by a Shopify API endpoint.
    #[error("{0}")]
    ApiError(#[from] ApiError),
    /// The response body is not valid JSON or does not have the expected shape.
    #[error("Error decoding response body: {0}")]
    DecodeError(#[from] serde_json::Error),
    /// The `Link` response header is present but malformed.
    #[error("Error parsing pagination: {0}")]
    PaginationError(#[from] PaginationParseError),
    /// The configured shop name or base URL cannot be turned into a valid URL.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

impl Error {
    /// Returns `true` if this error was caused by the server answering `404 Not Found`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::ApiError(api_error) if api_error.is_not_found())
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::HttpError(e),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Other)
            }
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

/// Shopify HTTP APIs error.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status returned by the server.
    pub status: u16,
    /// Human readable summary of the failure.
    ///
    /// Falls back to the canonical reason of the status code when the body carries no message.
    pub message: String,
    /// Per-field errors, keyed by field name.
    ///
    /// Errors that are not attached to a field are reported under the `base` key,
    /// the same way Shopify does.
    pub errors: HashMap<String, Vec<String>>,
    /// The `X-Request-Id` of the failed request, if the server returned one.
    pub request_id: Option<String>,
}

impl ApiError {
    /// Returns `true` if the server answered `404 Not Found`.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shopify HTTP error {}: {}", self.status, self.message)?;

        if let Some(ref request_id) = self.request_id {
            write!(f, "\nRequest ID: {}", request_id)?;
        }

        if !self.errors.is_empty() {
            let mut fields = self.errors.iter().collect::<Vec<_>>();
            fields.sort_by(|(a, _), (b, _)| a.cmp(b));

            write!(f, "\nAll errors:")?;
            for (k, v) in fields {
                write!(f, "\n- {}: {}", k, v.join(", "))?;
            }
        }

        Ok(())
    }
}
