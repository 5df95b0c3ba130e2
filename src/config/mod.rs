use crate::error::{Error, Result};
use crate::utils::parse_allergen_list;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub catalog: CatalogConfig,
    pub ranker: RankerConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankerConfig {
    pub max_vocab_size: usize,
    pub default_top_n: usize,
    pub max_top_n: usize,
    /// Allergens offered to users as exclusion choices
    pub allergen_options: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_rate_limit: u64,
    pub max_request_body_size: usize,
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let catalog_path = std::env::var("CATALOG_PATH")
            .unwrap_or_else(|_| "./data/recipes.csv".to_string())
            .into();

        let max_vocab_size = std::env::var("MAX_VOCAB_SIZE")
            .unwrap_or_else(|_| "500".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid MAX_VOCAB_SIZE value".to_string()))?;

        let default_top_n = std::env::var("DEFAULT_TOP_N")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid DEFAULT_TOP_N value".to_string()))?;

        let max_top_n = std::env::var("MAX_TOP_N")
            .unwrap_or_else(|_| "20".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid MAX_TOP_N value".to_string()))?;

        let allergen_options = parse_allergen_list(
            &std::env::var("ALLERGEN_OPTIONS").unwrap_or_else(|_| "eggs,dairy,nuts,soy".to_string()),
        );

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid PORT value".to_string()))?;

        let api_rate_limit = std::env::var("API_RATE_LIMIT")
            .unwrap_or_else(|_| "100".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid API_RATE_LIMIT value".to_string()))?;

        let max_request_body_size = std::env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| "1048576".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid MAX_REQUEST_BODY_SIZE value".to_string()))?;

        Ok(Settings {
            catalog: CatalogConfig { path: catalog_path },
            ranker: RankerConfig {
                max_vocab_size,
                default_top_n,
                max_top_n,
                allergen_options,
            },
            server: ServerConfig {
                host,
                port,
                api_rate_limit,
                max_request_body_size,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::Config("Port must be non-zero".to_string()));
        }

        if self.server.api_rate_limit == 0 {
            return Err(Error::Config("API rate limit must be non-zero".to_string()));
        }

        if self.ranker.default_top_n == 0 {
            return Err(Error::Config("DEFAULT_TOP_N must be at least 1".to_string()));
        }

        if self.ranker.default_top_n > self.ranker.max_top_n {
            return Err(Error::Config(format!(
                "DEFAULT_TOP_N ({}) exceeds MAX_TOP_N ({})",
                self.ranker.default_top_n, self.ranker.max_top_n
            )));
        }

        Ok(())
    }

    /// Requested result count, defaulted and clamped to the configured range
    pub fn resolve_top_n(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.ranker.default_top_n)
            .clamp(1, self.ranker.max_top_n.max(1))
    }
}

#[cfg(test)]
pub(crate) fn test_settings() -> Settings {
    Settings {
        catalog: CatalogConfig {
            path: "/tmp/recipes.csv".into(),
        },
        ranker: RankerConfig {
            max_vocab_size: 500,
            default_top_n: 5,
            max_top_n: 20,
            allergen_options: vec![
                "eggs".to_string(),
                "dairy".to_string(),
                "nuts".to_string(),
                "soy".to_string(),
            ],
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            api_rate_limit: 100,
            max_request_body_size: 1048576,
        },
    }
}
