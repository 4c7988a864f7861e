use std::io::Write;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_shelf_catalog::{CredentialSource, Credentials};

use crate::error::CliError;

fn mask_value(s: &str) -> String {
    if s.chars().count() <= 2 {
        "****".to_string()
    } else {
        let prefix: String = s.chars().take(2).collect();
        format!("{}****", prefix)
    }
}

/// Show current credentials and their sources.
pub(crate) fn run_config_show() {
    let path = game_shelf_catalog::config_path();
    let sources = game_shelf_catalog::credential_sources();

    log::info!(
        "{}",
        "IGDB (Twitch) Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    match &path {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    log::info!("");

    // Resolve values per-field (Credentials::load() fails if either is missing)
    let creds = Credentials::load().ok();

    let get_value =
        |source: &CredentialSource, from_creds: Option<String>, is_secret: bool| -> Option<String> {
            match source {
                CredentialSource::Missing => None,
                CredentialSource::EnvVar(var) => {
                    let v = std::env::var(var).ok()?;
                    Some(if is_secret { mask_value(&v) } else { v })
                }
                CredentialSource::ConfigFile => {
                    from_creds.map(|v| if is_secret { mask_value(&v) } else { v })
                }
            }
        };

    let fields: &[(&str, &CredentialSource, Option<String>)] = &[
        (
            "client_id",
            &sources.client_id,
            get_value(
                &sources.client_id,
                creds.as_ref().map(|c| c.client_id.clone()),
                false,
            ),
        ),
        (
            "client_secret",
            &sources.client_secret,
            get_value(
                &sources.client_secret,
                creds.as_ref().map(|c| c.client_secret.clone()),
                true,
            ),
        ),
    ];

    for (name, source, value) in fields {
        let source_str = format!("({})", source);
        match value {
            Some(v) => {
                log::info!(
                    "  {} {} {}",
                    format!("{}:", name).if_supports_color(Stdout, |t| t.cyan()),
                    v,
                    source_str.if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
            None => {
                log::info!(
                    "  {} {} {}",
                    format!("{}:", name).if_supports_color(Stdout, |t| t.cyan()),
                    "not set".if_supports_color(Stdout, |t| t.yellow()),
                    source_str.if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
        }
    }
}

/// Interactively set up credentials.
pub(crate) fn run_config_setup() -> Result<(), CliError> {
    println!(
        "{}",
        "IGDB Credential Setup".if_supports_color(Stdout, |t| t.bold()),
    );
    println!();
    println!(
        "  {}",
        "Register an application at https://dev.twitch.tv/console to get these."
            .if_supports_color(Stdout, |t| t.dimmed()),
    );
    println!();

    // Load existing config as defaults
    let existing = Credentials::load().ok();

    let read_line = |prompt: &str, default: Option<&str>| -> Result<String, CliError> {
        loop {
            if let Some(def) = default {
                print!("  {} [{}]: ", prompt, mask_value(def));
            } else {
                print!("  {}: ", prompt);
            }
            std::io::stdout().flush()?;

            let mut input = String::new();
            std::io::stdin().read_line(&mut input)?;
            let trimmed = input.trim().to_string();

            if trimmed.is_empty() {
                if let Some(def) = default {
                    return Ok(def.to_string());
                }
                println!(
                    "    {}",
                    "This field is required.".if_supports_color(Stdout, |t| t.yellow()),
                );
                continue;
            }
            return Ok(trimmed);
        }
    };

    let client_id = read_line(
        "client_id",
        existing.as_ref().map(|c| c.client_id.as_str()),
    )?;
    let client_secret = read_line(
        "client_secret",
        existing.as_ref().map(|c| c.client_secret.as_str()),
    )?;

    let creds = Credentials {
        client_id,
        client_secret,
    };

    let path = game_shelf_catalog::save_to_file(&creds)?;
    println!();
    println!(
        "{} Credentials saved to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

/// Print the config file path.
pub(crate) fn run_config_path() {
    match game_shelf_catalog::config_path() {
        Some(p) => println!("{}", p.display()),
        None => {
            log::warn!(
                "{}",
                "Could not determine config directory".if_supports_color(Stdout, |t| t.yellow()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_value_keeps_a_short_prefix() {
        assert_eq!(mask_value("abcdef123"), "ab****");
        assert_eq!(mask_value("ab"), "****");
        assert_eq!(mask_value(""), "****");
    }

    #[test]
    fn test_mask_value_handles_multibyte_secrets() {
        assert_eq!(mask_value("日本語トークン"), "日本****");
        assert_eq!(mask_value("日本"), "****");
    }
}
