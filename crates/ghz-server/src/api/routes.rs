//! REST API routes.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

use crate::api::mission;
use crate::state::AppState;

/// Create the API router.
///
/// Every request carries an `x-request-id`: the caller's, or a fresh UUID.
/// It is echoed on the response and recorded on mission plans.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/v1/mission", post(mission::plan_mission))
        // Path used by the original web form
        .route("/mission", post(mission::plan_mission))
        .route("/v1/sensors", get(mission::list_sensors))
        .route("/v1/hazards", get(mission::list_hazards))
        // Outermost layer runs first: the id must be set before it is propagated.
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
