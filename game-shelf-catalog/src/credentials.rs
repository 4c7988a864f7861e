use std::path::PathBuf;

use crate::error::CatalogError;

/// Twitch application credentials for authenticating with IGDB.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Where a credential field's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Not set anywhere.
    Missing,
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// Provenance of each credential field.
#[derive(Debug)]
pub struct CredentialSources {
    pub client_id: CredentialSource,
    pub client_secret: CredentialSource,
}

/// TOML config file format.
#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct ConfigFile {
    twitch: Option<TwitchConfig>,
}

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct TwitchConfig {
    client_id: Option<String>,
    client_secret: Option<String>,
}

impl Credentials {
    /// Load credentials from environment variables or the config file.
    ///
    /// Priority: env vars > config file. Both fields are required.
    pub fn load() -> Result<Self, CatalogError> {
        let config = load_config_file();

        let client_id = std::env::var("TWITCH_CLIENT_ID")
            .ok()
            .or_else(|| config.as_ref().and_then(|c| c.client_id.clone()))
            .ok_or_else(|| {
                CatalogError::Config(
                    "Missing client_id. Set TWITCH_CLIENT_ID env var or add to config file"
                        .to_string(),
                )
            })?;

        let client_secret = std::env::var("TWITCH_CLIENT_SECRET")
            .ok()
            .or_else(|| config.as_ref().and_then(|c| c.client_secret.clone()))
            .ok_or_else(|| {
                CatalogError::Config(
                    "Missing client_secret. Set TWITCH_CLIENT_SECRET env var or add to config file"
                        .to_string(),
                )
            })?;

        Ok(Self {
            client_id,
            client_secret,
        })
    }
}

/// Return the path to the credentials config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("game-shelf").join("credentials.toml"))
}

/// Save credentials to the config file, creating parent directories as
/// needed. Returns the path the file was written to.
pub fn save_to_file(creds: &Credentials) -> Result<PathBuf, CatalogError> {
    let path = config_path()
        .ok_or_else(|| CatalogError::Config("Could not determine config directory".to_string()))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let config = ConfigFile {
        twitch: Some(TwitchConfig {
            client_id: Some(creds.client_id.clone()),
            client_secret: Some(creds.client_secret.clone()),
        }),
    };

    let toml_str = toml::to_string_pretty(&config)
        .map_err(|e| CatalogError::Config(format!("Failed to serialize config: {}", e)))?;

    std::fs::write(&path, toml_str)?;
    Ok(path)
}

/// Determine where each credential field is coming from.
pub fn credential_sources() -> CredentialSources {
    let config = load_config_file();

    let client_id = if std::env::var("TWITCH_CLIENT_ID").is_ok() {
        CredentialSource::EnvVar("TWITCH_CLIENT_ID")
    } else if config.as_ref().and_then(|c| c.client_id.as_ref()).is_some() {
        CredentialSource::ConfigFile
    } else {
        CredentialSource::Missing
    };

    let client_secret = if std::env::var("TWITCH_CLIENT_SECRET").is_ok() {
        CredentialSource::EnvVar("TWITCH_CLIENT_SECRET")
    } else if config
        .as_ref()
        .and_then(|c| c.client_secret.as_ref())
        .is_some()
    {
        CredentialSource::ConfigFile
    } else {
        CredentialSource::Missing
    };

    CredentialSources {
        client_id,
        client_secret,
    }
}

fn load_config_file() -> Option<TwitchConfig> {
    let path = config_path()?;
    let content = std::fs::read_to_string(&path).ok()?;
    let config: ConfigFile = toml::from_str(&content).ok()?;
    config.twitch
}
