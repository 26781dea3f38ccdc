// src/routes.rs
use std::convert::Infallible;
use std::sync::Arc;

use log::info;
use warp::reject::Rejection;
use warp::{Filter, Reply};

use crate::handlers::error::{ApiError, ApiErrorKind};
use crate::handlers::forecast::{get_session_forecast, post_forecast};
use crate::handlers::industries::get_industries;
use crate::handlers::scenarios::get_scenarios;
use crate::handlers::session::{get_session, put_business, put_scenario};
use crate::services::session::SessionStore;

// Add recovery handling for our custom errors
async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let code;
    let message;

    if err.is_not_found() {
        code = warp::http::StatusCode::NOT_FOUND;
        message = "Not Found".to_string();
    } else if let Some(api_error) = err.find::<ApiError>() {
        code = match api_error.kind {
            ApiErrorKind::InvalidInput | ApiErrorKind::UnknownIdentifier => {
                warp::http::StatusCode::BAD_REQUEST
            }
            ApiErrorKind::Internal => warp::http::StatusCode::INTERNAL_SERVER_ERROR,
        };
        message = api_error.message.clone();
    } else if err
        .find::<warp::filters::body::BodyDeserializeError>()
        .is_some()
    {
        code = warp::http::StatusCode::BAD_REQUEST;
        message = "Invalid request body".to_string();
    } else {
        code = warp::http::StatusCode::INTERNAL_SERVER_ERROR;
        message = "Internal Server Error".to_string();
    }

    Ok(warp::reply::with_status(
        warp::reply::json(&serde_json::json!({
            "error": message,
        })),
        code,
    ))
}

pub fn routes(
    store: Arc<SessionStore>,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    info!("Configuring routes...");

    let store_filter = warp::any().map(move || store.clone());

    let scenarios_route = warp::path!("api" / "v1" / "scenarios")
        .and(warp::get())
        .and_then(get_scenarios);

    let industries_route = warp::path!("api" / "v1" / "industries")
        .and(warp::get())
        .and_then(get_industries);

    let forecast_route = warp::path!("api" / "v1" / "forecast")
        .and(warp::post())
        .and(warp::body::json())
        .and_then(post_forecast);

    let session_route = warp::path!("api" / "v1" / "session")
        .and(warp::get())
        .and(store_filter.clone())
        .and_then(get_session);

    let session_scenario_route = warp::path!("api" / "v1" / "session" / "scenario")
        .and(warp::put())
        .and(warp::body::json())
        .and(store_filter.clone())
        .and_then(put_scenario);

    let session_business_route = warp::path!("api" / "v1" / "session" / "business")
        .and(warp::put())
        .and(warp::body::json())
        .and(store_filter.clone())
        .and_then(put_business);

    let session_forecast_route = warp::path!("api" / "v1" / "session" / "forecast")
        .and(warp::get())
        .and(store_filter.clone())
        .and_then(get_session_forecast);

    info!("All routes configured successfully.");

    scenarios_route
        .or(industries_route)
        .or(forecast_route)
        .or(session_route)
        .or(session_scenario_route)
        .or(session_business_route)
        .or(session_forecast_route)
        .recover(handle_rejection)
}
