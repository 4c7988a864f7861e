use crate::region::Region;

/// Why a title search produced no usable candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoMatchReason {
    /// The catalog search returned nothing at all.
    EmptySearch,
    /// Candidates came back, but none scored above the similarity threshold.
    BelowThreshold,
}

impl std::fmt::Display for NoMatchReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySearch => write!(f, "no results in the catalog"),
            Self::BelowThreshold => write!(f, "no closely matching result in the catalog"),
        }
    }
}

/// Failure outcomes of a single resolution request.
///
/// Every variant is an expected, caller-recoverable outcome scoped to one
/// request. Kinds are never collapsed or retried; a transport layer maps
/// each one to its own message or status code.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("game '{query}' not found: {reason}")]
    GameNotFound { query: String, reason: NoMatchReason },

    #[error("no matching game for '{title}' is available on platform '{platform}'")]
    PlatformNotFound { title: String, platform: String },

    #[error("no release dates found for '{title}' on {platform}")]
    ReleaseDateNotFound { title: String, platform: String },

    #[error("'{title}' on {platform} has no release date for region {region}")]
    RegionNotFound {
        title: String,
        platform: String,
        region: Region,
    },

    #[error("unknown region '{input}'")]
    InvalidRegion { input: String },

    #[error("{field} must not be empty")]
    InvalidRequest { field: &'static str },

    #[error("catalog unavailable: {message}")]
    CatalogUnavailable { message: String },
}

impl ResolveError {
    /// Whether this failure derives from user input rather than
    /// infrastructure. Transport layers map user errors to the 4xx class
    /// and everything else to 5xx.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::CatalogUnavailable { .. })
    }
}
