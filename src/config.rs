use crate::types::PackSize;

pub const DEFAULT_PACK_SIZES: [PackSize; 5] = [250, 500, 1000, 2000, 5000];
pub const DEFAULT_PORT: &str = "8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub pack_sizes: Vec<PackSize>,
    pub port: String,
    pub sentry_dsn: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pack_sizes: DEFAULT_PACK_SIZES.to_vec(),
            port: DEFAULT_PORT.to_string(),
            sentry_dsn: None,
        }
    }
}

impl Config {
    /// Reads `PACK_SIZES`, `PORT` and `SENTRY_DSN`.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| get(key).filter(|v| !v.trim().is_empty());

        Self {
            pack_sizes: non_empty("PACK_SIZES")
                .map(|v| parse_pack_sizes(&v))
                .filter(|sizes| !sizes.is_empty())
                .unwrap_or_else(|| DEFAULT_PACK_SIZES.to_vec()),
            port: non_empty("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string()),
            sentry_dsn: non_empty("SENTRY_DSN"),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

/// Comma separated sizes; entries that are not positive integers are skipped.
fn parse_pack_sizes(s: &str) -> Vec<PackSize> {
    s.split(',')
        .filter_map(|part| part.trim().parse::<PackSize>().ok())
        .filter(|&size| size > 0)
        .collect()
}
