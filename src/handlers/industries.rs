// src/handlers/industries.rs
use log::info;
use warp::reply::Json;
use warp::Rejection;

use crate::services::registry;

pub async fn get_industries() -> Result<Json, Rejection> {
    info!("Handling request to list industry profiles");
    Ok(warp::reply::json(&registry::list_industries()))
}
