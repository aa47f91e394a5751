use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub markets_path: PathBuf,
    /// Keyword-data provider API key. Optional at startup; commands that hit
    /// the provider fail with a clear error when it is absent.
    pub keyword_api_key: Option<String>,
    pub provider_timeout_secs: u64,
    pub provider_max_retries: u32,
    pub provider_retry_backoff_ms: u64,
    /// How many ranked keywords to request per domain.
    pub ranked_keywords_limit: u32,
    /// Concurrency cap when reporting on several markets at once.
    pub max_concurrent_markets: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("markets_path", &self.markets_path)
            .field(
                "keyword_api_key",
                &self.keyword_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("provider_timeout_secs", &self.provider_timeout_secs)
            .field("provider_max_retries", &self.provider_max_retries)
            .field("provider_retry_backoff_ms", &self.provider_retry_backoff_ms)
            .field("ranked_keywords_limit", &self.ranked_keywords_limit)
            .field("max_concurrent_markets", &self.max_concurrent_markets)
            .finish()
    }
}
