use strsim::jaro_winkler;

use game_shelf_core::{Catalog, GameCandidate, NoMatchReason, ResolveError};

/// Similarity cutoff on the 0-100 scale. Candidates scoring at or below
/// this are discarded. Fixed behavioral constant.
pub const SIMILARITY_THRESHOLD: f64 = 70.0;

/// A candidate that matched the requested title and platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalMatch {
    /// The catalog's preferred spelling of the title
    pub title: String,
    /// Canonical name of the matched platform
    pub platform: String,
    pub slug: Option<String>,
    pub summary: Option<String>,
}

/// Find the best catalog candidate for a (title, platform) pair.
///
/// Candidates are scored by the best similarity across their canonical and
/// alternate titles, filtered by [`SIMILARITY_THRESHOLD`], and walked in
/// score order (catalog order breaks ties); the first one listing the
/// requested platform wins. Read-only and deterministic for identical
/// catalog responses.
pub async fn match_candidate<C: Catalog>(
    catalog: &C,
    title: &str,
    platform: &str,
) -> Result<CanonicalMatch, ResolveError> {
    let candidates = catalog.search_titles(title).await?;
    if candidates.is_empty() {
        return Err(ResolveError::GameNotFound {
            query: title.to_string(),
            reason: NoMatchReason::EmptySearch,
        });
    }
    let total = candidates.len();

    let mut scored: Vec<(f64, GameCandidate)> = candidates
        .into_iter()
        .map(|c| (similarity_score(title, &c), c))
        .filter(|(score, _)| passes_threshold(*score))
        .collect();

    if scored.is_empty() {
        log::debug!(
            "All {total} candidates for '{title}' scored at or below {SIMILARITY_THRESHOLD}"
        );
        return Err(ResolveError::GameNotFound {
            query: title.to_string(),
            reason: NoMatchReason::BelowThreshold,
        });
    }

    // Stable sort: equal scores keep catalog return order.
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    for (score, candidate) in &scored {
        if let Some(alias) = candidate.platforms.iter().find(|p| p.matches(platform)) {
            log::debug!(
                "Matched '{title}' -> \"{}\" (score {score:.1}) on {}",
                candidate.title,
                alias.name,
            );
            return Ok(CanonicalMatch {
                title: candidate.title.clone(),
                platform: alias.name.clone(),
                slug: candidate.slug.clone(),
                summary: candidate.summary.clone(),
            });
        }
    }

    Err(ResolveError::PlatformNotFound {
        title: title.to_string(),
        platform: platform.to_string(),
    })
}

/// Best similarity (0-100) between the query and any of the candidate's
/// names, case-insensitively.
fn similarity_score(query: &str, candidate: &GameCandidate) -> f64 {
    let query = query.trim().to_lowercase();
    std::iter::once(candidate.title.as_str())
        .chain(candidate.alternate_titles.iter().map(String::as_str))
        .map(|name| jaro_winkler(&query, &name.trim().to_lowercase()) * 100.0)
        .fold(0.0, f64::max)
}

fn passes_threshold(score: f64) -> bool {
    score > SIMILARITY_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_shelf_core::PlatformAlias;

    fn candidate(title: &str, alternates: &[&str]) -> GameCandidate {
        GameCandidate {
            title: title.to_string(),
            alternate_titles: alternates.iter().map(|s| s.to_string()).collect(),
            platforms: vec![PlatformAlias {
                name: "Xbox".to_string(),
                alternative_name: None,
                abbreviation: None,
            }],
            slug: None,
            summary: None,
        }
    }

    #[test]
    fn test_exact_match_scores_100() {
        let c = candidate("Halo", &[]);
        assert!((similarity_score("Halo", &c) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_is_case_insensitive() {
        let c = candidate("HALO: Combat Evolved", &[]);
        assert_eq!(
            similarity_score("halo: combat evolved", &c),
            similarity_score("Halo: Combat Evolved", &c),
        );
    }

    #[test]
    fn test_alternate_titles_raise_the_score() {
        let c = candidate("Biohazard", &["Resident Evil"]);
        let without = candidate("Biohazard", &[]);
        assert!(similarity_score("Resident Evil", &c) > similarity_score("Resident Evil", &without));
        assert!((similarity_score("Resident Evil", &c) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_threshold_boundary_is_exclusive() {
        assert!(!passes_threshold(70.0));
        assert!(!passes_threshold(69.9));
        assert!(passes_threshold(70.1));
    }

    #[test]
    fn test_unrelated_titles_score_low() {
        let c = candidate("Gran Turismo 4", &[]);
        assert!(similarity_score("Halo", &c) <= SIMILARITY_THRESHOLD);
    }
}
