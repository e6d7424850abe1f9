// src/web/handlers/reference_handlers.rs
use rocket::serde::json::Json;
use tracing::error;

use crate::core::Database;
use crate::repository::{Customer, ReferenceRepository, User};
use crate::types::{self, CategoryInfo, CurrencyInfo, ModeInfo, StatusInfo};
use crate::web::types::*;

pub async fn categories_handler() -> Json<DataResponse<Vec<CategoryInfo>>> {
    Json(DataResponse::success(
        "Categories retrieved successfully",
        types::categories(),
    ))
}

pub async fn modes_handler() -> Json<DataResponse<Vec<ModeInfo>>> {
    Json(DataResponse::success(
        "Modes retrieved successfully",
        types::modes(),
    ))
}

pub async fn statuses_handler() -> Json<DataResponse<Vec<StatusInfo>>> {
    Json(DataResponse::success(
        "Statuses retrieved successfully",
        types::statuses(),
    ))
}

pub async fn currencies_handler() -> Json<DataResponse<Vec<CurrencyInfo>>> {
    Json(DataResponse::success(
        "Currencies retrieved successfully",
        types::currencies(),
    ))
}

pub async fn users_handler(db: &Database) -> ApiResult<Json<DataResponse<Vec<User>>>> {
    match ReferenceRepository::new(db.pool()).users().await {
        Ok(users) => Ok(Json(DataResponse::success(
            "Users retrieved successfully",
            users,
        ))),
        Err(e) => {
            error!("Failed to load users: {:#}", e);
            Err(internal_error("retrieve users", &e))
        }
    }
}

pub async fn customers_handler(db: &Database) -> ApiResult<Json<DataResponse<Vec<Customer>>>> {
    match ReferenceRepository::new(db.pool()).customers().await {
        Ok(customers) => Ok(Json(DataResponse::success(
            "Customers retrieved successfully",
            customers,
        ))),
        Err(e) => {
            error!("Failed to load customers: {:#}", e);
            Err(internal_error("retrieve customers", &e))
        }
    }
}
