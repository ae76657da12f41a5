use std::net::SocketAddr;
use std::path::PathBuf;

use crate::pricing::Locale;

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
    pub catalog_path: PathBuf,
    /// Project number of the upstream prediction service.
    pub recommend_project_number: String,
    /// Upstream API key. Only ever sent server-side; never logged.
    pub recommend_api_key: String,
    pub recommend_base_url: String,
    /// Host prefix stripped from `canonicalProductUri` to get a storefront path.
    pub recommend_canonical_host: String,
    pub recommend_user_agent: String,
    pub locale: Locale,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("catalog_path", &self.catalog_path)
            .field("recommend_project_number", &self.recommend_project_number)
            .field("recommend_api_key", &"[redacted]")
            .field("recommend_base_url", &self.recommend_base_url)
            .field("recommend_canonical_host", &self.recommend_canonical_host)
            .field("recommend_user_agent", &self.recommend_user_agent)
            .field("locale", &self.locale)
            .finish()
    }
}
