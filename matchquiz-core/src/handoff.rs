//! The `site=<key>` query value carried from the quiz to the result screen.
use serde::{Deserialize, Serialize};

pub const SITE_PARAM: &str = "site";

/// Query parameters of the result route. The value is untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HandoffQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
}

impl HandoffQuery {
    #[must_use]
    pub fn for_winner(key: &str) -> Self {
        Self {
            site: Some(key.to_string()),
        }
    }

    /// Read `site` out of a raw query string such as `?site=pairs&utm=x`.
    ///
    /// Values are form-decoded, the inverse of what `Navigator::push_with_query`
    /// writes. The first `site` wins and empty values count as absent.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str(query.trim_start_matches('?')).unwrap_or_default();
        let site = pairs
            .into_iter()
            .find(|(name, _)| name == SITE_PARAM)
            .map(|(_, value)| value)
            .filter(|value| !value.is_empty());
        Self { site }
    }

    /// Form-encoded query string, without the leading `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(self).unwrap_or_default()
    }

    #[must_use]
    pub fn site(&self) -> Option<&str> {
        self.site.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_site_among_other_params() {
        assert_eq!(
            HandoffQuery::parse("?utm_source=x&site=pairs&site=other").site(),
            Some("pairs")
        );
        assert_eq!(HandoffQuery::parse("site=omiai").site(), Some("omiai"));
    }

    #[test]
    fn missing_or_empty_site_is_absent() {
        assert_eq!(HandoffQuery::parse("").site(), None);
        assert_eq!(HandoffQuery::parse("?site=").site(), None);
        assert_eq!(HandoffQuery::parse("?site").site(), None);
        assert_eq!(HandoffQuery::parse("?sites=pairs").site(), None);
    }

    #[test]
    fn winner_query_string() {
        assert_eq!(HandoffQuery::for_winner("pairs").to_query_string(), "site=pairs");
        assert_eq!(HandoffQuery::default().to_query_string(), "");
    }

    #[test]
    fn encoded_keys_survive_the_hand_off() {
        for key in ["a b", "x&site=y", "50%off", "サイト", "a+b/c"] {
            let encoded = HandoffQuery::for_winner(key).to_query_string();
            assert!(!encoded.contains('&'), "{encoded}");
            assert_eq!(HandoffQuery::parse(&encoded).site(), Some(key));
        }
        assert_eq!(
            HandoffQuery::parse("?site=%E3%82%B5%E3%82%A4%E3%83%88").site(),
            Some("サイト")
        );
        assert_eq!(HandoffQuery::parse("site=a+b").site(), Some("a b"));
    }
}
