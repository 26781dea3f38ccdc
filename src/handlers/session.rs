// src/handlers/session.rs
use std::sync::Arc;

use log::{error, info};
use serde::{Deserialize, Serialize};
use warp::reply::Json;
use warp::Rejection;

use super::error::ApiError;
use crate::models::{BusinessProfile, SessionContext};
use crate::services::session::SessionStore;

#[derive(Debug, Deserialize)]
pub struct ScenarioSelection {
    pub scenario: String,
}

#[derive(Debug, Serialize)]
struct BusinessSubmissionResponse {
    context: SessionContext,
    profit_margin_pct: f64,
}

pub async fn get_session(store: Arc<SessionStore>) -> Result<Json, Rejection> {
    info!("Handling request to get session context");
    Ok(warp::reply::json(&store.context().await))
}

pub async fn put_scenario(
    selection: ScenarioSelection,
    store: Arc<SessionStore>,
) -> Result<Json, Rejection> {
    info!("Handling scenario selection: '{}'", selection.scenario);
    match store.select_scenario(&selection.scenario).await {
        Ok(context) => Ok(warp::reply::json(&context)),
        Err(e) => {
            error!("Scenario selection rejected: {}", e);
            Err(warp::reject::custom(ApiError::from(e)))
        }
    }
}

pub async fn put_business(
    profile: BusinessProfile,
    store: Arc<SessionStore>,
) -> Result<Json, Rejection> {
    info!(
        "Handling business profile submission for '{}'",
        profile.business_name
    );
    let profit_margin_pct = profile.profit_margin_pct();
    match store.submit_business_profile(profile).await {
        Ok(context) => Ok(warp::reply::json(&BusinessSubmissionResponse {
            context,
            profit_margin_pct,
        })),
        Err(e) => {
            error!("Business profile rejected: {}", e);
            Err(warp::reject::custom(ApiError::from(e)))
        }
    }
}
