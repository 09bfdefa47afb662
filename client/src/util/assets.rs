//! Static asset URLs under the deployment base path.
//!
//! The base path is baked in at build time from `SITE_BASE_PATH` so the
//! server render and the hydrated WASM bundle always agree on figure URLs.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

/// Directory under the base path that holds every page figure.
pub const FIGURES_DIR: &str = "figures";

/// Configured base path, normalized (defaults to `/`).
pub fn base_path() -> String {
    normalize_base_path(option_env!("SITE_BASE_PATH").unwrap_or("/"))
}

/// Normalize a base path so it can be joined with a relative asset path.
///
/// Relative prefixes gain a leading and trailing `/`; absolute URLs only gain
/// the trailing `/`. Blank input collapses to `/`.
pub fn normalize_base_path(raw: &str) -> String {
    let raw = raw.trim();
    if raw.contains("://") {
        let url = raw.trim_end_matches('/');
        return format!("{url}/");
    }
    let trimmed = raw.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else {
        format!("/{trimmed}/")
    }
}

/// URL of a figure file. `base` must already be normalized.
pub fn figure_url(base: &str, file: &str) -> String {
    format!("{base}{FIGURES_DIR}/{file}")
}
