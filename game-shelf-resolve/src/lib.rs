//! Game resolution pipeline.
//!
//! Turns a loosely-specified game reference (free-text title, platform
//! name or abbreviation, optional region) into a canonical record: the
//! candidate matcher picks a catalog game and platform, then the release
//! resolver picks a region-appropriate release date. Either stage fails
//! with a typed [`ResolveError`] and short-circuits the pipeline.

pub mod matcher;
pub mod release;

pub use matcher::{CanonicalMatch, SIMILARITY_THRESHOLD, match_candidate};
pub use release::{resolve_release, select_release};

use game_shelf_core::{Catalog, ResolutionRequest, ResolveError, ResolvedGame};

/// Resolve a game reference against the catalog.
///
/// The single entry point: runs the candidate matcher, feeds its output to
/// the release resolver, and assembles the immutable result record.
pub async fn resolve_game<C: Catalog>(
    catalog: &C,
    request: &ResolutionRequest,
) -> Result<ResolvedGame, ResolveError> {
    let matched = matcher::match_candidate(catalog, request.title(), request.platform()).await?;
    log::info!(
        "Resolved '{}' -> \"{}\" on {}",
        request.title(),
        matched.title,
        matched.platform,
    );

    let (region, release_date) =
        release::resolve_release(catalog, &matched.title, &matched.platform, request.region())
            .await?;
    log::info!(
        "Release date for \"{}\" ({}): {} [{}]",
        matched.title,
        matched.platform,
        release_date,
        region,
    );

    Ok(ResolvedGame {
        title: matched.title,
        platform: matched.platform,
        region,
        release_date,
        slug: matched.slug,
        summary: matched.summary,
    })
}
