use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One tracked market: the subject brand, its domain, and the keyword sets
/// the visibility report is computed over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    pub name: String,
    /// Domain whose organic rankings feed the SOV side of the report.
    pub domain: String,
    /// Own-brand search terms (brand name plus variants).
    pub brand_terms: Vec<String>,
    /// Competitor brand terms completing the share-of-search comparison set.
    #[serde(default)]
    pub competitor_terms: Vec<String>,
    pub notes: Option<String>,
}

impl MarketConfig {
    /// Generate a URL-safe slug from the market name.
    #[must_use]
    pub fn slug(&self) -> String {
        self.name
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' {
                    c
                } else if c == ' ' {
                    '-'
                } else {
                    '\0'
                }
            })
            .filter(|&c| c != '\0')
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[derive(Debug, Deserialize)]
pub struct MarketsFile {
    pub markets: Vec<MarketConfig>,
}

/// Load and validate the markets configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_markets(path: &Path) -> Result<MarketsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::MarketsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let markets_file: MarketsFile =
        serde_yaml::from_str(&content).map_err(ConfigError::MarketsFileParse)?;

    validate_markets(&markets_file)?;

    Ok(markets_file)
}

fn validate_markets(markets_file: &MarketsFile) -> Result<(), ConfigError> {
    let mut seen_slugs = HashSet::new();

    for market in &markets_file.markets {
        if market.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "market name must be non-empty".to_string(),
            ));
        }

        if market.domain.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "market '{}' has an empty domain",
                market.name
            )));
        }

        if market.brand_terms.iter().all(|t| t.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "market '{}' needs at least one brand term",
                market.name
            )));
        }

        let slug = market.slug();
        if !seen_slugs.insert(slug.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate market slug: '{}' (from market '{}')",
                slug, market.name
            )));
        }
    }

    Ok(())
}
