//! Deployment base path handling.
//!
//! `PUBLIC_URL` is read at compile time (for example `/shop` when the site is
//! served from a subdirectory). Without it everything is root-anchored.

const PUBLIC_URL: Option<&str> = option_env!("PUBLIC_URL");

/// Base path for the router, `None` when served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    normalize_base(PUBLIC_URL.unwrap_or_default())
}

/// Absolute href for an in-app path, honouring the base path.
#[must_use]
pub fn href(path: &str) -> String {
    join(PUBLIC_URL.unwrap_or_default(), path)
}

fn normalize_base(base: &str) -> Option<String> {
    let trimmed = base.trim().trim_end_matches('/');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn join(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    match normalize_base(base) {
        Some(base) => format!("{base}/{path}"),
        None => format!("/{path}"),
    }
}
