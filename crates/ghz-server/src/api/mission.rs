//! Mission planning endpoints.

use axum::{extract::State, Extension, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tower_http::request_id::RequestId;

use ghz_core::hazard::{hazard_table, HazardEntry};
use ghz_core::{MissionRecommendation, MissionRequest, SensorKind, SensorProfile, SensorRecord};

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MissionResponse {
    /// `x-request-id` of the request that produced this plan
    pub request_id: Option<String>,
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub recommendation: MissionRecommendation,
}

/// Recommend sensor/drone combinations for a site.
pub async fn plan_mission(
    State(state): State<Arc<AppState>>,
    request_id: Option<Extension<RequestId>>,
    Json(request): Json<MissionRequest>,
) -> Json<MissionResponse> {
    let request_id = request_id.and_then(|Extension(id)| {
        id.header_value().to_str().ok().map(str::to_string)
    });
    let recommendation = state.recommend(&request);

    tracing::info!(
        request_id = request_id.as_deref().unwrap_or("-"),
        hazard = %request.geohazard_type,
        stage = %request.hazard_stage,
        sensors = recommendation.top3_sensors.len(),
        best = recommendation
            .best_combo
            .as_ref()
            .map(|combo| combo.drone.mfc_model.as_str())
            .unwrap_or("none"),
        "Planned mission"
    );

    Json(MissionResponse {
        request_id,
        generated_at: Utc::now(),
        recommendation,
    })
}

#[derive(Debug, Serialize)]
pub struct SensorInfo {
    pub sensor: SensorKind,
    pub profile: SensorProfile,
    /// Catalog entry, when the loaded catalog has one
    pub catalog: Option<SensorRecord>,
}

/// Known sensors with their flight profiles.
pub async fn list_sensors(State(state): State<Arc<AppState>>) -> Json<Vec<SensorInfo>> {
    let catalog = state.planner().sensors();
    let sensors = SensorKind::all()
        .map(|kind| SensorInfo {
            sensor: kind,
            profile: kind.profile(),
            catalog: catalog.get(&kind.into()).cloned(),
        })
        .collect();
    Json(sensors)
}

/// The hazard/stage recommendation table.
pub async fn list_hazards() -> Json<Vec<HazardEntry>> {
    Json(hazard_table())
}
