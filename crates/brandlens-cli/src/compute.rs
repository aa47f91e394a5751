//! The `compute` command: run the metrics engine over keyword collections
//! read from a local JSON file, no provider credentials needed.

use std::path::Path;

use anyhow::Context;
use brandlens_metrics::{compute_visibility_report, BrandKeyword, RankedKeyword};
use serde::Deserialize;

use crate::report::print_summary;

/// Offline input document: the same shapes the HTTP API accepts.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ComputeInput {
    #[serde(default)]
    brand_keywords: Vec<BrandKeyword>,
    #[serde(default)]
    ranked_keywords: Vec<RankedKeyword>,
}

pub(crate) fn run(input: &Path, as_json: bool) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("reading input file {}", input.display()))?;
    let parsed: ComputeInput = serde_json::from_str(&content)
        .with_context(|| format!("parsing input file {}", input.display()))?;

    let report = compute_visibility_report(&parsed.brand_keywords, &parsed.ranked_keywords);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&input.display().to_string(), &report);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_parses_wire_field_names() {
        let parsed: ComputeInput = serde_json::from_str(
            r#"{
                "brandKeywords": [
                    { "keyword": "lavera", "searchVolume": 12100, "isOwnBrand": true }
                ],
                "rankedKeywords": [
                    { "keyword": "kw1", "searchVolume": 22200, "position": 4 }
                ]
            }"#,
        )
        .expect("parse");
        assert_eq!(parsed.brand_keywords.len(), 1);
        assert_eq!(parsed.ranked_keywords[0].position, 4);
    }

    #[test]
    fn input_tolerates_missing_collections() {
        let parsed: ComputeInput = serde_json::from_str("{}").expect("parse");
        assert!(parsed.brand_keywords.is_empty());
        assert!(parsed.ranked_keywords.is_empty());
    }

    #[test]
    fn parsed_input_feeds_the_engine() {
        let parsed: ComputeInput = serde_json::from_str(
            r#"{
                "brandKeywords": [
                    { "keyword": "lavera", "searchVolume": 12100, "isOwnBrand": true },
                    { "keyword": "weleda", "searchVolume": 18100, "isOwnBrand": false }
                ]
            }"#,
        )
        .expect("parse");
        let report = compute_visibility_report(&parsed.brand_keywords, &parsed.ranked_keywords);
        assert_eq!(report.sos.share_of_search, 40.1);
    }
}
