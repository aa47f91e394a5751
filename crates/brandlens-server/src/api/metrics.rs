//! Request shapes and handlers for the metrics endpoints.
//!
//! The handlers deserialize the caller's keyword collections, hand them to
//! the pure calculators in `brandlens-metrics`, and wrap the result in the
//! standard response envelope. The calculators are total, so none of these
//! handlers has a failure path of its own — malformed bodies are rejected by
//! the JSON extractor before they get here.

use axum::{Extension, Json};
use brandlens_metrics::{
    BrandKeyword, GrowthGapResult, RankedKeyword, SosResult, SovResult, VisibilityReport,
};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiResponse, ResponseMeta};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SosRequest {
    pub brand_keywords: Vec<BrandKeyword>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SovRequest {
    pub ranked_keywords: Vec<RankedKeyword>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GrowthGapRequest {
    pub share_of_search: f64,
    pub share_of_voice: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct VisibilityRequest {
    #[serde(default)]
    pub brand_keywords: Vec<BrandKeyword>,
    #[serde(default)]
    pub ranked_keywords: Vec<RankedKeyword>,
}

pub(super) async fn compute_sos(
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<SosRequest>,
) -> Json<ApiResponse<SosResult>> {
    Json(ApiResponse {
        data: brandlens_metrics::compute_sos(&request.brand_keywords),
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn compute_sov(
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<SovRequest>,
) -> Json<ApiResponse<SovResult>> {
    Json(ApiResponse {
        data: brandlens_metrics::compute_sov(&request.ranked_keywords),
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn compute_growth_gap(
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<GrowthGapRequest>,
) -> Json<ApiResponse<GrowthGapResult>> {
    Json(ApiResponse {
        data: brandlens_metrics::compute_growth_gap(
            request.share_of_search,
            request.share_of_voice,
        ),
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn compute_visibility(
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<VisibilityRequest>,
) -> Json<ApiResponse<VisibilityReport>> {
    Json(ApiResponse {
        data: brandlens_metrics::compute_visibility_report(
            &request.brand_keywords,
            &request.ranked_keywords,
        ),
        meta: ResponseMeta::new(req_id.0),
    })
}
