//! Server configuration parsed from environment variables.

use std::path::PathBuf;

use imago_client::util::assets::{FIGURES_DIR, base_path, normalize_base_path};

use crate::error::ConfigError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    pub figures_dir: PathBuf,
    /// The base path the client was built with; always ends with `/`.
    pub base_path: String,
}

impl SiteConfig {
    /// Build typed site config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `FIGURES_DIR`: default `public/figures` next to this crate
    /// - `SITE_BASE_PATH`: must match the value the client was built with;
    ///   figure URLs are baked into the page at build time
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SiteConfig::from_env`] but reads through `get`, so tests do
    /// not have to mutate the process environment.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_port(get("PORT").as_deref())?;
        let figures_dir = get("FIGURES_DIR")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(default_figures_dir, PathBuf::from);
        let base_path = check_base_path(get("SITE_BASE_PATH").as_deref(), base_path())?;

        Ok(Self { port, figures_dir, base_path })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|source| ConfigError::InvalidPort { value: value.to_owned(), source }),
    }
}

/// The page emits figure URLs under the compiled-in base path, so that is
/// the only mount that resolves. A runtime value is accepted only if it
/// agrees with it.
fn check_base_path(runtime: Option<&str>, compiled: String) -> Result<String, ConfigError> {
    match runtime.filter(|raw| !raw.trim().is_empty()) {
        None => Ok(compiled),
        Some(raw) => {
            let runtime = normalize_base_path(raw);
            if runtime == compiled {
                Ok(compiled)
            } else {
                Err(ConfigError::BasePathMismatch { runtime, compiled })
            }
        }
    }
}

fn default_figures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("public")
        .join(FIGURES_DIR)
}
