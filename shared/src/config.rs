use tracing::warn;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub http_server: String,
    pub page_size: usize,
    pub csrf_token: Option<String>,
}

impl Config {
    pub const DEFAULT_HTTP_SERVER: &str = "http://localhost:11000";
    pub const DEFAULT_PAGE_SIZE: usize = 12;

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let http_server = lookup("ACCESS_CONSOLE_HTTP_SERVER")
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or_else(|| Self::DEFAULT_HTTP_SERVER.to_string());

        let page_size = match lookup("ACCESS_CONSOLE_PAGE_SIZE") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    warn!(
                        "ACCESS_CONSOLE_PAGE_SIZE={} is not a positive integer, using {}",
                        raw,
                        Self::DEFAULT_PAGE_SIZE
                    );
                    Self::DEFAULT_PAGE_SIZE
                }
            },
            None => Self::DEFAULT_PAGE_SIZE,
        };

        Self {
            http_server,
            page_size,
            csrf_token: lookup("ACCESS_CONSOLE_CSRF_TOKEN").filter(|t| !t.is_empty()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.http_server, "http://localhost:11000");
        assert_eq!(config.page_size, 12);
        assert!(config.csrf_token.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("ACCESS_CONSOLE_HTTP_SERVER", "https://groups.example.com/"),
            ("ACCESS_CONSOLE_PAGE_SIZE", "20"),
            ("ACCESS_CONSOLE_CSRF_TOKEN", "abc"),
        ]));
        assert_eq!(config.http_server, "https://groups.example.com");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.csrf_token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_invalid_page_size_falls_back() {
        for raw in ["zero", "0", "-3"] {
            let config = Config::from_lookup(lookup_from(&[("ACCESS_CONSOLE_PAGE_SIZE", raw)]));
            assert_eq!(config.page_size, Config::DEFAULT_PAGE_SIZE);
        }
    }

    #[test]
    fn test_empty_csrf_token_is_ignored() {
        let config = Config::from_lookup(lookup_from(&[("ACCESS_CONSOLE_CSRF_TOKEN", "")]));
        assert!(config.csrf_token.is_none());
    }
}
