// crates/geoexplorer-core/src/error.rs

use thiserror::Error;

/// Low-level failures: transport, payload decoding and asset I/O.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Outcome of a failed [`CountryResolver::resolve`](crate::resolver::CountryResolver::resolve).
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Nothing to search for. Callers show the placeholder, not an error.
    #[error("empty query")]
    EmptyQuery,

    /// Both the direct lookup and the fallback scan came back empty.
    #[error("no country matches {query:?}")]
    NotFound { query: String },

    /// The full dataset could not be fetched or decoded.
    #[error("country service unreachable: {0}")]
    Transport(#[source] GeoError),
}

impl ResolveError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::NotFound { .. })
    }
}

pub type Result<T, E = GeoError> = std::result::Result<T, E>;
