// src/handlers/scenarios.rs
use log::info;
use warp::reply::Json;
use warp::Rejection;

use crate::services::registry;

pub async fn get_scenarios() -> Result<Json, Rejection> {
    info!("Handling request to list economic scenarios");
    Ok(warp::reply::json(&registry::list_scenarios()))
}
