use serde::Deserialize;

use game_shelf_core::{GameCandidate, PlatformAlias, ReleaseDateEntry};

/// Twitch OAuth token response.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: u64,
}

/// A game entry from the IGDB `/games` endpoint.
///
/// IGDB omits fields that have no value, so everything beyond the name is
/// optional-tolerant.
#[derive(Debug, Deserialize, Clone)]
pub struct IgdbGame {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub alternative_names: Vec<IgdbAltName>,
    #[serde(default)]
    pub platforms: Vec<IgdbPlatform>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct IgdbAltName {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct IgdbPlatform {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub alternative_name: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
}

/// An entry from the IGDB `/release_dates` endpoint.
#[derive(Debug, Deserialize, Clone)]
pub struct IgdbReleaseDate {
    #[serde(default)]
    pub region: Option<u8>,
    #[serde(default)]
    pub human: Option<String>,
}

impl From<IgdbGame> for GameCandidate {
    fn from(game: IgdbGame) -> Self {
        GameCandidate {
            title: game.name,
            alternate_titles: game
                .alternative_names
                .into_iter()
                .filter_map(|a| a.name)
                .collect(),
            platforms: game
                .platforms
                .into_iter()
                .filter(|p| !p.name.is_empty())
                .map(|p| PlatformAlias {
                    name: p.name,
                    alternative_name: p.alternative_name,
                    abbreviation: p.abbreviation,
                })
                .collect(),
            slug: game.slug,
            summary: game.summary,
        }
    }
}

impl IgdbReleaseDate {
    /// Convert to a domain entry, dropping dates without a region code or a
    /// human-readable string.
    pub fn into_entry(self) -> Option<ReleaseDateEntry> {
        Some(ReleaseDateEntry {
            region_code: self.region?,
            human: self.human?,
        })
    }
}
