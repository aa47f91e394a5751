//! The `report` command: fetch keyword data for configured markets, run the
//! metrics engine, and print the results.

use anyhow::Context;
use brandlens_core::{AppConfig, MarketConfig};
use brandlens_metrics::{compute_visibility_report, VisibilityReport};
use brandlens_providers::{
    normalize_brand_keywords, normalize_ranked_keywords, KeywordApiClient,
};
use futures::stream::{self, StreamExt};

pub(crate) async fn run(market_filter: Option<&str>, as_json: bool) -> anyhow::Result<()> {
    let config = brandlens_core::load_app_config()?;
    let markets_file = brandlens_core::load_markets(&config.markets_path)
        .with_context(|| format!("loading markets from {}", config.markets_path.display()))?;

    let selected: Vec<MarketConfig> = match market_filter {
        Some(slug) => {
            let market = markets_file
                .markets
                .into_iter()
                .find(|m| m.slug() == slug)
                .with_context(|| format!("market '{slug}' not found in markets.yaml"))?;
            vec![market]
        }
        None => markets_file.markets,
    };

    let api_key = config
        .keyword_api_key
        .as_deref()
        .context("KEYWORD_API_KEY must be set for the report command")?;

    let client = KeywordApiClient::new(api_key, config.provider_timeout_secs)?
        .with_retry_policy(config.provider_max_retries, config.provider_retry_backoff_ms);

    let concurrency = config.max_concurrent_markets.max(1);
    let results: Vec<(String, anyhow::Result<VisibilityReport>)> = stream::iter(selected.iter())
        .map(|market| {
            let client = &client;
            let config = &config;
            async move { (market.slug(), report_market(client, config, market).await) }
        })
        .buffer_unordered(concurrency)
        .collect()
        .await;

    let mut failed = 0usize;
    for (slug, result) in &results {
        match result {
            Ok(report) => {
                if as_json {
                    println!("{}", serde_json::to_string_pretty(report)?);
                } else {
                    print_summary(slug, report);
                }
            }
            Err(e) => {
                tracing::error!(market = %slug, error = %e, "visibility report failed");
                failed += 1;
            }
        }
    }

    if failed == results.len() && !results.is_empty() {
        anyhow::bail!("all {failed} markets failed");
    }
    Ok(())
}

/// Fetch both keyword sets for one market concurrently, normalize them, and
/// run the engine.
async fn report_market(
    client: &KeywordApiClient,
    config: &AppConfig,
    market: &MarketConfig,
) -> anyhow::Result<VisibilityReport> {
    let mut terms = market.brand_terms.clone();
    terms.extend(market.competitor_terms.iter().cloned());

    let (volumes, rankings) = tokio::try_join!(
        client.search_volume(&terms),
        client.ranked_keywords(&market.domain, config.ranked_keywords_limit),
    )?;

    let brand_keywords = normalize_brand_keywords(&volumes, &market.brand_terms)?;
    let ranked_keywords = normalize_ranked_keywords(&rankings)?;

    tracing::info!(
        market = %market.slug(),
        brand_keywords = brand_keywords.len(),
        ranked_keywords = ranked_keywords.len(),
        "keyword data fetched"
    );

    Ok(compute_visibility_report(&brand_keywords, &ranked_keywords))
}

pub(crate) fn print_summary(label: &str, report: &VisibilityReport) {
    println!("{label}");
    println!(
        "  share of search: {:.1}%  ({} of {} branded searches)",
        report.sos.share_of_search, report.sos.brand_volume, report.sos.total_brand_volume
    );
    println!(
        "  share of voice:  {:.1}%  ({} of {} market searches)",
        report.sov.share_of_voice, report.sov.visible_volume, report.sov.total_market_volume
    );
    println!(
        "  growth gap:      {:+.1}  ({})",
        report.gap.gap, report.gap.interpretation
    );
}
