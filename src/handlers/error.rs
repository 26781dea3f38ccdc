// src/handlers/error.rs
use std::fmt;
use warp::reject::Reject;

use crate::models::ForecastError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    InvalidInput,
    UnknownIdentifier,
    Internal,
}

#[derive(Debug, Clone)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ApiError {
            kind: ApiErrorKind::InvalidInput,
            message: message.into(),
        }
    }

    pub fn unknown_identifier(message: impl Into<String>) -> Self {
        ApiError {
            kind: ApiErrorKind::UnknownIdentifier,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError {
            kind: ApiErrorKind::Internal,
            message: message.into(),
        }
    }
}

impl From<ForecastError> for ApiError {
    fn from(err: ForecastError) -> Self {
        match err {
            ForecastError::InvalidInput(_) => ApiError::invalid_input(err.to_string()),
            ForecastError::UnknownIdentifier(_) => ApiError::unknown_identifier(err.to_string()),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}
impl Reject for ApiError {}
