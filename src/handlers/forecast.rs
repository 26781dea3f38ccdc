// src/handlers/forecast.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{error, info};
use serde::Serialize;
use warp::reply::Json;
use warp::Rejection;

use super::error::ApiError;
use crate::models::{
    ProjectionRequest, ProjectionResult, SummaryMetrics, DEFAULT_HORIZON_YEARS,
    DEFAULT_START_YEAR,
};
use crate::services::projection;
use crate::services::session::SessionStore;

#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub request: ProjectionRequest,
    pub result: ProjectionResult,
    pub summary: SummaryMetrics,
    pub generated_at: DateTime<Utc>,
}

fn run_projection(request: ProjectionRequest) -> Result<Json, Rejection> {
    match projection::project(&request) {
        Ok((result, summary)) => {
            info!(
                "Projected {} years for scenario '{}', industry '{}'",
                request.horizon_years, request.scenario, request.industry
            );
            Ok(warp::reply::json(&ForecastResponse {
                request,
                result,
                summary,
                generated_at: Utc::now(),
            }))
        }
        Err(e) => {
            error!("Forecast request rejected: {}", e);
            Err(warp::reject::custom(ApiError::from(e)))
        }
    }
}

pub async fn post_forecast(request: ProjectionRequest) -> Result<Json, Rejection> {
    info!(
        "Handling forecast request for scenario '{}', industry '{}'",
        request.scenario, request.industry
    );
    run_projection(request)
}

/// Build a request from the session selections and run the engine over the
/// default preview horizon.
pub async fn get_session_forecast(store: Arc<SessionStore>) -> Result<Json, Rejection> {
    info!("Handling forecast request from session context");

    let context = store.context().await;
    let business = context.business.ok_or_else(|| {
        error!("Session forecast requested before a business profile was submitted");
        warp::reject::custom(ApiError::invalid_input(
            "no business profile submitted for this session",
        ))
    })?;

    run_projection(ProjectionRequest {
        starting_revenue: business.annual_revenue,
        scenario: context.current_scenario,
        industry: business.industry,
        horizon_years: DEFAULT_HORIZON_YEARS,
        start_year: DEFAULT_START_YEAR,
    })
}
