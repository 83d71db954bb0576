//! Helpers for constructing URLs to static assets that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/shindan` for GitHub Pages),
/// generated URLs are prefixed accordingly. Local builds without `PUBLIC_URL`
/// fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Location of the quiz document fetched by the quiz and result screens.
#[must_use]
pub fn data_url() -> String {
    asset_path(DATA_FILE)
}

pub const DATA_FILE: &str = "quiz-data.json";

/// Base path for the router (e.g., `/shindan` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{data_url, router_base};

    #[test]
    fn data_url_is_root_anchored_without_base() {
        assert_eq!(data_url(), "/quiz-data.json");
    }

    #[test]
    fn builds_paths_with_public_base() {
        assert_eq!(
            super::asset_path_with_base("quiz-data.json", "/shindan"),
            "/shindan/quiz-data.json"
        );
        assert_eq!(
            super::asset_path_with_base("/quiz-data.json", "/shindan/"),
            "/shindan/quiz-data.json"
        );
    }

    #[test]
    fn router_base_is_none_by_default() {
        assert_eq!(router_base(), None);
        assert_eq!(
            super::router_base_with_base("/shindan/"),
            Some(String::from("/shindan"))
        );
    }
}
