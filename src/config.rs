use crate::error::{Error, Result};
use std::env;
use std::num::NonZeroU32;
use std::path::Path;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// Items requested per page, for both the REST and the GraphQL listings.
pub const PAGE_SIZE: NonZeroU32 = match NonZeroU32::new(100) {
    Some(size) => size,
    None => unreachable!(),
};

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: String,
    pub api_url: String,
    pub graphql_url: String,
    pub page_size: NonZeroU32,
}

impl Config {
    /// Reads the personal access token verbatim from `path`.
    ///
    /// Trailing whitespace is kept: the file contents are sent as-is in the
    /// `authorization` header. Endpoints default to github.com and can be
    /// overridden with `GITHUB_API_URL` and `GITHUB_GRAPHQL_URL`.
    pub fn from_token_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let github_token = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read token file {}: {}", path.display(), e))
        })?;

        if github_token.is_empty() {
            return Err(Error::Config(format!(
                "Token file {} is empty",
                path.display()
            )));
        }

        Ok(Self::new(github_token).with_env_overrides())
    }

    pub fn new(github_token: impl Into<String>) -> Self {
        Self {
            github_token: github_token.into(),
            api_url: DEFAULT_API_URL.to_string(),
            graphql_url: DEFAULT_GRAPHQL_URL.to_string(),
            page_size: PAGE_SIZE,
        }
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(api_url) = env::var("GITHUB_API_URL") {
            self.api_url = api_url;
        }
        if let Ok(graphql_url) = env::var("GITHUB_GRAPHQL_URL") {
            self.graphql_url = graphql_url;
        }
        self
    }

    /// Points both endpoints at `base_url`, with GraphQL served from `/graphql`.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        self.api_url = base_url.to_string();
        self.graphql_url = format!("{}/graphql", base_url);
        self
    }
}

#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub page_size: NonZeroU32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
        }
    }
}

impl From<&Config> for ExportConfig {
    fn from(config: &Config) -> Self {
        Self {
            page_size: config.page_size,
        }
    }
}
