use std::future::Future;

use serde::{Deserialize, Serialize};

pub mod error;
pub mod region;

pub use error::{NoMatchReason, ResolveError};
pub use region::Region;

/// A platform entry attached to a catalog candidate.
///
/// The catalog knows platforms under up to three spellings; any of them,
/// case-insensitively, may match a user's input, and all resolve to `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformAlias {
    /// Canonical platform name (e.g. "Xbox", "PlayStation 2")
    pub name: String,
    /// Alternative full name (e.g. "Microsoft Xbox")
    pub alternative_name: Option<String>,
    /// Short abbreviation (e.g. "XONE", "PS2")
    pub abbreviation: Option<String>,
}

impl PlatformAlias {
    /// Whether `input` matches this platform under any of its spellings.
    pub fn matches(&self, input: &str) -> bool {
        let wanted = input.trim().to_lowercase();
        let hit = |s: &str| s.trim().to_lowercase() == wanted;
        hit(&self.name)
            || self.alternative_name.as_deref().is_some_and(hit)
            || self.abbreviation.as_deref().is_some_and(hit)
    }
}

/// A catalog search result considered for matching against a user's title.
///
/// Owned transiently by the candidate matcher and discarded after a
/// resolution completes.
#[derive(Debug, Clone)]
pub struct GameCandidate {
    /// The catalog's preferred spelling of the title
    pub title: String,
    /// Alternate titles in catalog order
    pub alternate_titles: Vec<String>,
    /// Platforms this candidate was released on
    pub platforms: Vec<PlatformAlias>,
    /// Stable catalog identifier, carried into the resolved record
    pub slug: Option<String>,
    /// Catalog synopsis, carried into the resolved record
    pub summary: Option<String>,
}

/// One release-date entry for a (title, platform) pair, as returned by the
/// catalog. At most one entry per region is expected; duplicates are
/// resolved later by last-wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDateEntry {
    /// IGDB numeric region code (see [`Region::from_code`])
    pub region_code: u8,
    /// Human-readable date string, passed through unformatted
    pub human: String,
}

/// A validated resolution request: title, platform, optional region.
///
/// Region validation happens here, before any catalog call, so an unknown
/// region alias fails fast with [`ResolveError::InvalidRegion`].
#[derive(Debug, Clone)]
pub struct ResolutionRequest {
    title: String,
    platform: String,
    region: Option<Region>,
}

impl ResolutionRequest {
    pub fn new(
        title: impl Into<String>,
        platform: impl Into<String>,
        region: Option<&str>,
    ) -> Result<Self, ResolveError> {
        let title = title.into().trim().to_string();
        let platform = platform.into().trim().to_string();
        if title.is_empty() {
            return Err(ResolveError::InvalidRequest { field: "title" });
        }
        if platform.is_empty() {
            return Err(ResolveError::InvalidRequest { field: "platform" });
        }
        let region = match region {
            Some(input) => Some(Region::from_alias(input).ok_or_else(|| {
                ResolveError::InvalidRegion {
                    input: input.to_string(),
                }
            })?),
            None => None,
        };
        Ok(Self {
            title,
            platform,
            region,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn region(&self) -> Option<Region> {
        self.region
    }
}

/// The canonical game record produced by a successful resolution.
/// Immutable once constructed; persistence is a separate concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedGame {
    /// Corrected, canonical title
    pub title: String,
    /// Canonical platform name
    pub platform: String,
    /// Selected release region
    pub region: Region,
    /// Human-readable release date for that region
    pub release_date: String,
    /// Stable catalog identifier
    pub slug: Option<String>,
    /// Catalog synopsis
    pub summary: Option<String>,
}

/// Read-only access to the external game-metadata catalog.
///
/// The two query shapes the resolution pipeline needs, nothing more. The
/// IGDB client implements this for production; tests supply in-memory
/// fakes. Implementations own their credential and token lifecycle.
pub trait Catalog {
    /// Search for candidate games whose title loosely matches `query`.
    /// An empty result set is a valid outcome, not an error.
    fn search_titles(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<GameCandidate>, ResolveError>> + Send;

    /// Fetch all release-date entries for an exact (title, platform) pair.
    /// An empty result set is a valid outcome, not an error.
    fn release_dates(
        &self,
        title: &str,
        platform: &str,
    ) -> impl Future<Output = Result<Vec<ReleaseDateEntry>, ResolveError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_alias_matches_any_spelling() {
        let alias = PlatformAlias {
            name: "Xbox".to_string(),
            alternative_name: Some("Microsoft Xbox".to_string()),
            abbreviation: Some("XBX".to_string()),
        };
        assert!(alias.matches("xbox"));
        assert!(alias.matches(" XBOX "));
        assert!(alias.matches("microsoft xbox"));
        assert!(alias.matches("xbx"));
        assert!(!alias.matches("PS5"));
    }

    #[test]
    fn test_platform_alias_without_optional_names() {
        let alias = PlatformAlias {
            name: "Dreamcast".to_string(),
            alternative_name: None,
            abbreviation: None,
        };
        assert!(alias.matches("dreamcast"));
        assert!(!alias.matches("dc"));
    }

    #[test]
    fn test_request_requires_title_and_platform() {
        let err = ResolutionRequest::new("", "Xbox", None).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidRequest { field: "title" }));

        let err = ResolutionRequest::new("Halo", "  ", None).unwrap_err();
        assert!(matches!(
            err,
            ResolveError::InvalidRequest { field: "platform" }
        ));
    }

    #[test]
    fn test_request_canonicalizes_region() {
        let req = ResolutionRequest::new("Halo", "Xbox", Some(" jp ")).unwrap();
        assert_eq!(req.region(), Some(Region::Japan));

        let err = ResolutionRequest::new("Halo", "Xbox", Some("atlantis")).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidRegion { .. }));
    }

    #[test]
    fn test_request_trims_inputs() {
        let req = ResolutionRequest::new("  Halo  ", " Xbox ", None).unwrap();
        assert_eq!(req.title(), "Halo");
        assert_eq!(req.platform(), "Xbox");
    }
}
