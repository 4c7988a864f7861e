//! End-to-end pipeline tests against an in-memory catalog fake.

use game_shelf_core::{
    Catalog, GameCandidate, NoMatchReason, PlatformAlias, Region, ReleaseDateEntry,
    ResolutionRequest, ResolveError,
};
use game_shelf_resolve::resolve_game;

#[derive(Default)]
struct FakeCatalog {
    games: Vec<GameCandidate>,
    dates: Vec<ReleaseDateEntry>,
}

impl Catalog for FakeCatalog {
    async fn search_titles(&self, _query: &str) -> Result<Vec<GameCandidate>, ResolveError> {
        Ok(self.games.clone())
    }

    async fn release_dates(
        &self,
        _title: &str,
        _platform: &str,
    ) -> Result<Vec<ReleaseDateEntry>, ResolveError> {
        Ok(self.dates.clone())
    }
}

/// Catalog that always fails at the transport level.
struct DownCatalog;

impl Catalog for DownCatalog {
    async fn search_titles(&self, _query: &str) -> Result<Vec<GameCandidate>, ResolveError> {
        Err(ResolveError::CatalogUnavailable {
            message: "connection timed out".to_string(),
        })
    }

    async fn release_dates(
        &self,
        _title: &str,
        _platform: &str,
    ) -> Result<Vec<ReleaseDateEntry>, ResolveError> {
        Err(ResolveError::CatalogUnavailable {
            message: "connection timed out".to_string(),
        })
    }
}

fn platform(name: &str) -> PlatformAlias {
    PlatformAlias {
        name: name.to_string(),
        alternative_name: None,
        abbreviation: None,
    }
}

fn halo_candidate() -> GameCandidate {
    GameCandidate {
        title: "Halo: Combat Evolved".to_string(),
        alternate_titles: vec!["Halo".to_string()],
        platforms: vec![platform("Xbox"), platform("PC (Microsoft Windows)")],
        slug: Some("halo-combat-evolved".to_string()),
        summary: Some("A sci-fi shooter.".to_string()),
    }
}

fn entry(region: Region, date: &str) -> ReleaseDateEntry {
    ReleaseDateEntry {
        region_code: region.code(),
        human: date.to_string(),
    }
}

fn request(title: &str, platform: &str, region: Option<&str>) -> ResolutionRequest {
    ResolutionRequest::new(title, platform, region).unwrap()
}

#[tokio::test]
async fn alternate_name_match_resolves_canonical_title_and_platform() {
    // "Halo" matches via the alternate name at score 100.
    let catalog = FakeCatalog {
        games: vec![halo_candidate()],
        dates: vec![entry(Region::NorthAmerica, "Nov 15, 2001")],
    };

    let resolved = resolve_game(&catalog, &request("Halo", "Xbox", None))
        .await
        .unwrap();
    assert_eq!(resolved.title, "Halo: Combat Evolved");
    assert_eq!(resolved.platform, "Xbox");
    assert_eq!(resolved.region, Region::NorthAmerica);
    assert_eq!(resolved.release_date, "Nov 15, 2001");
    assert_eq!(resolved.slug.as_deref(), Some("halo-combat-evolved"));
}

#[tokio::test]
async fn missing_platform_fails_with_platform_not_found() {
    // The game exists but was never released on PS5.
    let catalog = FakeCatalog {
        games: vec![halo_candidate()],
        ..Default::default()
    };

    let err = resolve_game(&catalog, &request("Halo", "PS5", None))
        .await
        .unwrap_err();
    assert!(matches!(err, ResolveError::PlatformNotFound { .. }));
}

#[tokio::test]
async fn worldwide_wins_over_north_america_without_requested_region() {
    // Worldwide is first in priority order despite its higher numeric
    // code.
    let catalog = FakeCatalog {
        games: vec![halo_candidate()],
        dates: vec![
            entry(Region::NorthAmerica, "Nov 15, 2001"),
            entry(Region::Worldwide, "Dec 01, 2001"),
        ],
    };

    let resolved = resolve_game(&catalog, &request("Halo", "Xbox", None))
        .await
        .unwrap();
    assert_eq!(resolved.region, Region::Worldwide);
    assert_eq!(resolved.release_date, "Dec 01, 2001");
}

#[tokio::test]
async fn requested_region_without_entry_fails_with_region_not_found() {
    // "jp" is a valid alias, but Japan has no release-date entry.
    let catalog = FakeCatalog {
        games: vec![halo_candidate()],
        dates: vec![entry(Region::NorthAmerica, "Nov 15, 2001")],
    };

    let err = resolve_game(&catalog, &request("Halo", "Xbox", Some("jp")))
        .await
        .unwrap_err();
    let message = err.to_string();
    match err {
        ResolveError::RegionNotFound { region, .. } => {
            assert_eq!(region, Region::Japan);
            // The message carries the canonicalized region name.
            assert!(message.contains("Japan"), "message was: {message}");
        }
        other => panic!("expected RegionNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_region_alias_fails_before_any_catalog_call() {
    // Validation happens at request construction, so even a catalog that
    // always errors is never consulted.
    let err = ResolutionRequest::new("Halo", "Xbox", Some("atlantis")).unwrap_err();
    assert!(matches!(err, ResolveError::InvalidRegion { .. }));

    // Sanity check that the down catalog would have failed the pipeline.
    let err = resolve_game(&DownCatalog, &request("Halo", "Xbox", None))
        .await
        .unwrap_err();
    assert!(matches!(err, ResolveError::CatalogUnavailable { .. }));
}

#[tokio::test]
async fn empty_search_is_game_not_found_never_platform_not_found() {
    let catalog = FakeCatalog::default();

    let err = resolve_game(&catalog, &request("Halo", "PS5", None))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ResolveError::GameNotFound {
            reason: NoMatchReason::EmptySearch,
            ..
        }
    ));
}

#[tokio::test]
async fn below_threshold_candidates_are_game_not_found() {
    let catalog = FakeCatalog {
        games: vec![GameCandidate {
            title: "Gran Turismo 4".to_string(),
            alternate_titles: vec![],
            platforms: vec![platform("PlayStation 2")],
            slug: None,
            summary: None,
        }],
        ..Default::default()
    };

    let err = resolve_game(&catalog, &request("Halo", "PlayStation 2", None))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ResolveError::GameNotFound {
            reason: NoMatchReason::BelowThreshold,
            ..
        }
    ));
}

#[tokio::test]
async fn equal_scores_keep_catalog_order() {
    // Two candidates both carry the query as an alternate name, so both
    // score 100; the stable sort must keep the first one first.
    let first = GameCandidate {
        title: "Metroid Prime".to_string(),
        alternate_titles: vec!["Prime".to_string()],
        platforms: vec![platform("GameCube")],
        slug: Some("metroid-prime".to_string()),
        summary: None,
    };
    let second = GameCandidate {
        title: "Prime Mover".to_string(),
        alternate_titles: vec!["Prime".to_string()],
        platforms: vec![platform("GameCube")],
        slug: Some("prime-mover".to_string()),
        summary: None,
    };
    let catalog = FakeCatalog {
        games: vec![first, second],
        dates: vec![entry(Region::Worldwide, "Nov 17, 2002")],
    };

    let resolved = resolve_game(&catalog, &request("Prime", "GameCube", None))
        .await
        .unwrap();
    assert_eq!(resolved.title, "Metroid Prime");
}

#[tokio::test]
async fn lower_scored_candidate_supplies_missing_platform() {
    // The best-scoring candidate lacks the platform; the walk continues to
    // the next candidate above the threshold that has it.
    let exact = GameCandidate {
        title: "Doom".to_string(),
        alternate_titles: vec![],
        platforms: vec![platform("PC (Microsoft Windows)")],
        slug: Some("doom".to_string()),
        summary: None,
    };
    let port = GameCandidate {
        title: "Doom 64".to_string(),
        alternate_titles: vec![],
        platforms: vec![platform("Nintendo 64")],
        slug: Some("doom-64".to_string()),
        summary: None,
    };
    let catalog = FakeCatalog {
        games: vec![exact, port],
        dates: vec![entry(Region::NorthAmerica, "Mar 31, 1997")],
    };

    let resolved = resolve_game(&catalog, &request("Doom", "Nintendo 64", None))
        .await
        .unwrap();
    assert_eq!(resolved.title, "Doom 64");
    assert_eq!(resolved.platform, "Nintendo 64");
}

#[tokio::test]
async fn platform_matches_by_abbreviation() {
    let candidate = GameCandidate {
        title: "Halo: Combat Evolved".to_string(),
        alternate_titles: vec![],
        platforms: vec![PlatformAlias {
            name: "Xbox".to_string(),
            alternative_name: Some("Microsoft Xbox".to_string()),
            abbreviation: Some("XBX".to_string()),
        }],
        slug: None,
        summary: None,
    };
    let catalog = FakeCatalog {
        games: vec![candidate],
        dates: vec![entry(Region::NorthAmerica, "Nov 15, 2001")],
    };

    let resolved = resolve_game(
        &catalog,
        &request("Halo: Combat Evolved", "xbx", None),
    )
    .await
    .unwrap();
    // The abbreviation matched, but the canonical name comes out.
    assert_eq!(resolved.platform, "Xbox");
}

#[tokio::test]
async fn matched_game_without_release_dates_fails() {
    let catalog = FakeCatalog {
        games: vec![halo_candidate()],
        dates: vec![],
    };

    let err = resolve_game(&catalog, &request("Halo", "Xbox", None))
        .await
        .unwrap_err();
    assert!(matches!(err, ResolveError::ReleaseDateNotFound { .. }));
}
