use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

use game_shelf_core::{Catalog, GameCandidate, ReleaseDateEntry, ResolveError};

use crate::credentials::Credentials;
use crate::error::CatalogError;
use crate::types::{IgdbGame, IgdbReleaseDate, TokenResponse};

const TOKEN_URL: &str = "https://id.twitch.tv/oauth2/token";
const API_BASE: &str = "https://api.igdb.com/v4";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Re-acquire the OAuth token when it is this close to expiry.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// IGDB game categories treated as standalone entries: main game,
/// expansion, standalone expansion, remake, remaster, expanded game, port.
const GAME_CATEGORIES: &str = "0,2,4,8,9,10,11";
const SEARCH_LIMIT: u32 = 10;
const RELEASE_DATE_LIMIT: u32 = 50;

struct AccessToken {
    value: String,
    expires_at: Instant,
}

impl AccessToken {
    fn needs_refresh(&self) -> bool {
        Instant::now() + TOKEN_EXPIRY_MARGIN >= self.expires_at
    }
}

/// HTTP client for the IGDB API.
///
/// Owns the Twitch OAuth token lifecycle: the token is acquired on connect
/// and re-acquired before any call made near its expiry.
pub struct IgdbClient {
    http: reqwest::Client,
    creds: Credentials,
    token: Mutex<Option<AccessToken>>,
}

impl IgdbClient {
    /// Create a client and validate credentials by performing the Twitch
    /// `client_credentials` OAuth exchange.
    pub async fn connect(creds: Credentials) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let client = Self {
            http,
            creds,
            token: Mutex::new(None),
        };

        client.refresh_token().await?;
        Ok(client)
    }

    /// Acquire a fresh access token from Twitch and cache it.
    async fn refresh_token(&self) -> Result<String, CatalogError> {
        let resp = self
            .http
            .post(TOKEN_URL)
            .query(&[
                ("client_id", self.creds.client_id.as_str()),
                ("client_secret", self.creds.client_secret.as_str()),
                ("grant_type", "client_credentials"),
            ])
            .send()
            .await?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
            || status == reqwest::StatusCode::BAD_REQUEST
        {
            return Err(CatalogError::InvalidCredentials(
                "Twitch rejected the client id or secret".to_string(),
            ));
        }
        if !status.is_success() {
            return Err(CatalogError::ServerError {
                status: status.as_u16(),
                message: "token request failed".to_string(),
            });
        }

        let text = resp.text().await?;
        let token: TokenResponse = serde_json::from_str(&text).map_err(|e| {
            CatalogError::Api(format!(
                "Failed to parse token response: {e}. Response: {}",
                excerpt(&text)
            ))
        })?;

        log::debug!("Acquired Twitch access token (expires in {}s)", token.expires_in);

        let value = token.access_token;
        *self.token.lock().await = Some(AccessToken {
            value: value.clone(),
            expires_at: Instant::now() + Duration::from_secs(token.expires_in),
        });
        Ok(value)
    }

    /// Current bearer token, refreshed when close to expiry.
    async fn bearer_token(&self) -> Result<String, CatalogError> {
        {
            let guard = self.token.lock().await;
            if let Some(token) = guard.as_ref() {
                if !token.needs_refresh() {
                    return Ok(token.value.clone());
                }
            }
        }
        self.refresh_token().await
    }

    /// POST an APIcalypse query body to an IGDB endpoint, returning the
    /// raw response text after status triage.
    async fn query(&self, endpoint: &str, body: String) -> Result<String, CatalogError> {
        let token = self.bearer_token().await?;
        log::trace!("IGDB {endpoint} query: {body}");

        let resp = self
            .http
            .post(format!("{API_BASE}/{endpoint}"))
            .header("Client-ID", &self.creds.client_id)
            .header("Authorization", format!("Bearer {token}"))
            .header("Accept", "application/json")
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(CatalogError::InvalidCredentials(
                "IGDB rejected the access token".to_string(),
            ));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CatalogError::RateLimit);
        }
        if !status.is_success() {
            return Err(CatalogError::ServerError {
                status: status.as_u16(),
                message: excerpt(&text).to_string(),
            });
        }

        Ok(text)
    }

    /// Search for games whose title loosely matches `title`.
    pub async fn search_games(&self, title: &str) -> Result<Vec<GameCandidate>, CatalogError> {
        let body = format!(
            "fields name, alternative_names.name, platforms.name, \
             platforms.alternative_name, platforms.abbreviation, slug, summary; \
             where category = ({GAME_CATEGORIES}); search \"{}\"; limit {SEARCH_LIMIT};",
            escape(title),
        );
        let text = self.query("games", body).await?;

        let games: Vec<IgdbGame> = serde_json::from_str(&text).map_err(|e| {
            CatalogError::Api(format!(
                "Failed to parse game search response: {e}. Response: {}",
                excerpt(&text)
            ))
        })?;

        Ok(games
            .into_iter()
            .filter(|g| !g.name.is_empty())
            .map(GameCandidate::from)
            .collect())
    }

    /// Fetch all release-date entries for an exact (title, platform) pair.
    /// Region selection happens in the resolver, not here.
    pub async fn fetch_release_dates(
        &self,
        title: &str,
        platform: &str,
    ) -> Result<Vec<ReleaseDateEntry>, CatalogError> {
        let body = format!(
            "fields region, human; \
             where game.name = \"{}\" & platform.name = \"{}\"; limit {RELEASE_DATE_LIMIT};",
            escape(title),
            escape(platform),
        );
        let text = self.query("release_dates", body).await?;

        let dates: Vec<IgdbReleaseDate> = serde_json::from_str(&text).map_err(|e| {
            CatalogError::Api(format!(
                "Failed to parse release date response: {e}. Response: {}",
                excerpt(&text)
            ))
        })?;

        Ok(dates.into_iter().filter_map(IgdbReleaseDate::into_entry).collect())
    }
}

impl Catalog for IgdbClient {
    async fn search_titles(&self, query: &str) -> Result<Vec<GameCandidate>, ResolveError> {
        Ok(self.search_games(query).await?)
    }

    async fn release_dates(
        &self,
        title: &str,
        platform: &str,
    ) -> Result<Vec<ReleaseDateEntry>, ResolveError> {
        Ok(self.fetch_release_dates(title, platform).await?)
    }
}

/// Escape a string for interpolation into an APIcalypse query body.
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Leading slice of a response body for error messages, cut on a char
/// boundary so multibyte bodies never panic the formatter.
fn excerpt(text: &str) -> &str {
    let mut end = text.len().min(200);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_quotes_and_backslashes() {
        assert_eq!(escape(r#"Maniac "Mansion""#), r#"Maniac \"Mansion\""#);
        assert_eq!(escape(r"a\b"), r"a\\b");
        assert_eq!(escape("plain title"), "plain title");
    }

    #[test]
    fn test_excerpt_cuts_on_char_boundaries() {
        let short = "plain body";
        assert_eq!(excerpt(short), short);

        // Byte 200 lands inside a 3-byte character; the cut backs up to
        // the last full character instead of panicking.
        let mut body = "x".repeat(199);
        body.push_str("日本語の題名");
        let cut = excerpt(&body);
        assert_eq!(cut.len(), 199);
        assert!(cut.ends_with('x'));

        let exact: String = "y".repeat(300);
        assert_eq!(excerpt(&exact).len(), 200);
    }

    #[test]
    fn test_token_refresh_margin() {
        let fresh = AccessToken {
            value: "t".to_string(),
            expires_at: Instant::now() + Duration::from_secs(3600),
        };
        let stale = AccessToken {
            value: "t".to_string(),
            expires_at: Instant::now() + Duration::from_secs(30),
        };
        assert!(!fresh.needs_refresh());
        assert!(stale.needs_refresh());
    }
}
