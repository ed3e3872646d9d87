use std::path::PathBuf;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CONTENT_DIR: &str = "content";
const DEFAULT_LOG_FILTER: &str = "info";

/// Process settings taken from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub is_development: bool,
    pub port: u16,
    pub content_dir: PathBuf,
    pub log_filter: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            is_development: lookup("RUST_ENV").is_some_and(|v| v == "development"),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            content_dir: lookup("CONTENT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_DIR)),
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<_, _> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config(&[]);
        assert!(!config.is_development);
        assert_eq!(config.port, 8080);
        assert_eq!(config.content_dir, PathBuf::from("content"));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("RUST_ENV", "development"),
            ("PORT", "3000"),
            ("CONTENT_DIR", "/srv/blog"),
            ("RUST_LOG", "debug"),
        ]);
        assert!(config.is_development);
        assert_eq!(config.port, 3000);
        assert_eq!(config.content_dir, PathBuf::from("/srv/blog"));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn bad_port_falls_back() {
        assert_eq!(config(&[("PORT", "http")]).port, 8080);
    }

    #[test]
    fn only_development_enables_dev_mode() {
        assert!(!config(&[("RUST_ENV", "production")]).is_development);
    }
}
