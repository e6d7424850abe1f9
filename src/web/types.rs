// src/web/types.rs
//! Response envelopes shared by every endpoint

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::serde::Serialize;

use crate::types::Pagination;
use crate::validation::ValidationFailure;

/// Error half of every handler result
pub type ApiError = (Status, Json<StandardErrorResponse>);
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DataResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct PagedResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Vec<T>,
    pub pagination: Pagination,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct SearchResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Vec<T>,
    pub count: usize,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct AgingResponse {
    pub success: bool,
    pub message: String,
    pub updated_count: u64,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub database: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

impl<T> DataResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

impl<T> PagedResponse<T> {
    pub fn success(message: impl Into<String>, data: Vec<T>, pagination: Pagination) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
            pagination,
        }
    }
}

impl<T> SearchResponse<T> {
    pub fn success(message: impl Into<String>, data: Vec<T>) -> Self {
        Self {
            success: true,
            message: message.into(),
            count: data.len(),
            data,
        }
    }
}

impl StandardErrorResponse {
    pub fn new(error: String, error_code: String, suggestions: Vec<String>) -> Self {
        Self {
            success: false,
            error,
            error_code,
            suggestions,
        }
    }
}

pub fn api_error(
    status: Status,
    error: impl Into<String>,
    error_code: &str,
    suggestions: Vec<String>,
) -> ApiError {
    (
        status,
        Json(StandardErrorResponse::new(
            error.into(),
            error_code.to_string(),
            suggestions,
        )),
    )
}

pub fn not_found_error() -> ApiError {
    api_error(
        Status::NotFound,
        "Job description not found",
        "NOT_FOUND",
        vec!["Check the job description id".to_string()],
    )
}

/// Unexpected failure while performing `action`, e.g. "retrieve JDs"
pub fn internal_error(action: &str, err: &anyhow::Error) -> ApiError {
    api_error(
        Status::InternalServerError,
        format!("Failed to {}: {}", action, err),
        "INTERNAL_ERROR",
        vec!["Try again in a few moments".to_string()],
    )
}

impl From<ValidationFailure> for ApiError {
    fn from(failure: ValidationFailure) -> Self {
        let error_code = match failure {
            ValidationFailure::MissingField(_) => "MISSING_FIELD",
            ValidationFailure::NoData => "NO_DATA",
            ValidationFailure::Invalid(_) => "VALIDATION_ERROR",
        };
        api_error(
            Status::BadRequest,
            failure.to_string(),
            error_code,
            failure.errors(),
        )
    }
}
