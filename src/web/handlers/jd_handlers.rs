// src/web/handlers/jd_handlers.rs
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::FromForm;
use tracing::{error, info, warn};

use crate::core::Database;
use crate::repository::JobDescriptionRepository;
use crate::scanner::{self, ScanResult};
use crate::types::{
    CreatedJd, JdPayload, JdStatistics, JobDescription, ReferenceCode, ScanRequest, SearchFilters,
};
use crate::utils::{non_blank, normalize_pagination};
use crate::validation::{validate_create, validate_update, ValidationFailure};
use crate::web::types::*;

/// Raw query parameters of the filtered search
#[derive(Debug, Default, FromForm)]
pub struct SearchQuery {
    pub mode: Option<i64>,
    pub category: Option<i64>,
    pub status: Option<i64>,
    pub skill: Option<String>,
    pub experience_min: Option<f64>,
    pub experience_max: Option<f64>,
    pub budget_min: Option<f64>,
    pub budget_max: Option<f64>,
    pub tenure_min: Option<i64>,
    pub tenure_max: Option<i64>,
    pub search_text: Option<String>,
}

pub async fn scan_handler(
    request: Option<Json<ScanRequest>>,
) -> ApiResult<Json<DataResponse<ScanResult>>> {
    let text = request
        .and_then(|r| r.into_inner().jd_text)
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| {
            api_error(
                Status::BadRequest,
                "JD text is required",
                "MISSING_FIELD",
                vec!["Send the posting text as jd_text".to_string()],
            )
        })?;

    let result = scanner::scan(&text);
    info!(
        "Scanned JD text ({} chars): {} skills, {} keywords",
        text.len(),
        result.jd_skillset.len(),
        result.jd_keywords.len()
    );

    Ok(Json(DataResponse::success(
        "JD information extracted successfully",
        result,
    )))
}

pub async fn create_jd_handler(
    request: Option<Json<JdPayload>>,
    db: &Database,
) -> ApiResult<(Status, Json<DataResponse<CreatedJd>>)> {
    let payload = request.ok_or(ValidationFailure::NoData)?.into_inner();
    let fields = validate_create(payload).map_err(|failure| {
        warn!("Rejected job description: {}", failure);
        ApiError::from(failure)
    })?;

    let repo = JobDescriptionRepository::new(db.pool());
    match repo.create(&fields).await {
        Ok(id) => Ok((
            Status::Created,
            Json(DataResponse::success(
                "Job Description created successfully!",
                CreatedJd { id },
            )),
        )),
        Err(e) => {
            error!("Failed to create JD: {:#}", e);
            Err(internal_error("create JD", &e))
        }
    }
}

pub async fn list_jds_handler(
    page: Option<i64>,
    per_page: Option<i64>,
    search: Option<String>,
    db: &Database,
) -> ApiResult<Json<PagedResponse<JobDescription>>> {
    let (page, per_page) = normalize_pagination(page, per_page);
    let search = non_blank(search);

    let repo = JobDescriptionRepository::new(db.pool());
    match repo.list(page, per_page, search.as_deref()).await {
        Ok(result) => Ok(Json(PagedResponse::success(
            "Job descriptions retrieved successfully",
            result.items,
            result.pagination,
        ))),
        Err(e) => {
            error!("Failed to retrieve JDs: {:#}", e);
            Err(internal_error("retrieve JDs", &e))
        }
    }
}

pub async fn get_jd_handler(
    jd_id: i64,
    db: &Database,
) -> ApiResult<Json<DataResponse<JobDescription>>> {
    let repo = JobDescriptionRepository::new(db.pool());
    match repo.find_by_id(jd_id).await {
        Ok(Some(jd)) => Ok(Json(DataResponse::success(
            "Job description retrieved successfully",
            jd,
        ))),
        Ok(None) => Err(not_found_error()),
        Err(e) => {
            error!("Failed to retrieve JD {}: {:#}", jd_id, e);
            Err(internal_error("retrieve JD", &e))
        }
    }
}

pub async fn update_jd_handler(
    jd_id: i64,
    request: Option<Json<JdPayload>>,
    db: &Database,
) -> ApiResult<Json<DataResponse<JobDescription>>> {
    let payload = request.ok_or(ValidationFailure::NoData)?.into_inner();
    let repo = JobDescriptionRepository::new(db.pool());

    let existing = repo
        .find_by_id(jd_id)
        .await
        .map_err(|e| internal_error("update JD", &e))?
        .ok_or_else(not_found_error)?;

    let fields = validate_update(payload, &existing).map_err(|failure| {
        warn!("Rejected update of job description {}: {}", jd_id, failure);
        ApiError::from(failure)
    })?;

    let updated = repo
        .update(jd_id, &fields)
        .await
        .map_err(|e| internal_error("update JD", &e))?;
    if !updated {
        return Err(not_found_error());
    }

    match repo.find_by_id(jd_id).await {
        Ok(Some(jd)) => Ok(Json(DataResponse::success(
            "Job description updated successfully",
            jd,
        ))),
        Ok(None) => Err(not_found_error()),
        Err(e) => Err(internal_error("update JD", &e)),
    }
}

pub async fn delete_jd_handler(
    jd_id: i64,
    db: &Database,
) -> ApiResult<Json<DataResponse<CreatedJd>>> {
    let repo = JobDescriptionRepository::new(db.pool());
    match repo.soft_delete(jd_id).await {
        Ok(true) => Ok(Json(DataResponse::success(
            "Job description deleted successfully",
            CreatedJd { id: jd_id },
        ))),
        Ok(false) => Err(not_found_error()),
        Err(e) => {
            error!("Failed to delete JD {}: {:#}", jd_id, e);
            Err(internal_error("delete JD", &e))
        }
    }
}

pub async fn search_jds_handler(
    query: SearchQuery,
    db: &Database,
) -> ApiResult<Json<SearchResponse<JobDescription>>> {
    let filters = search_filters(query)?;

    let repo = JobDescriptionRepository::new(db.pool());
    match repo.search(&filters).await {
        Ok(items) => Ok(Json(SearchResponse::success(
            "Search completed successfully",
            items,
        ))),
        Err(e) => {
            error!("Failed to search JDs: {:#}", e);
            Err(internal_error("search JDs", &e))
        }
    }
}

pub async fn statistics_handler(db: &Database) -> ApiResult<Json<DataResponse<JdStatistics>>> {
    let repo = JobDescriptionRepository::new(db.pool());
    match repo.statistics().await {
        Ok(stats) => Ok(Json(DataResponse::success(
            "Statistics retrieved successfully",
            stats,
        ))),
        Err(e) => {
            error!("Failed to compute statistics: {:#}", e);
            Err(internal_error("retrieve statistics", &e))
        }
    }
}

pub async fn update_aging_handler(db: &Database) -> ApiResult<Json<AgingResponse>> {
    let repo = JobDescriptionRepository::new(db.pool());
    match repo.update_aging().await {
        Ok(updated_count) => Ok(Json(AgingResponse {
            success: true,
            message: format!("Aging updated for {} job descriptions", updated_count),
            updated_count,
        })),
        Err(e) => {
            error!("Failed to update aging: {:#}", e);
            Err(internal_error("update aging", &e))
        }
    }
}

fn search_filters(query: SearchQuery) -> ApiResult<SearchFilters> {
    let mut errors = Vec::new();

    let mode = lookup_code(query.mode, "mode", &mut errors);
    let category = lookup_code(query.category, "category", &mut errors);
    let status = lookup_code(query.status, "status", &mut errors);

    if !errors.is_empty() {
        return Err(api_error(
            Status::BadRequest,
            "Invalid search parameters",
            "VALIDATION_ERROR",
            errors,
        ));
    }

    Ok(SearchFilters {
        mode,
        category,
        status,
        skill: non_blank(query.skill),
        experience_min: query.experience_min,
        experience_max: query.experience_max,
        budget_min: query.budget_min,
        budget_max: query.budget_max,
        tenure_min: query.tenure_min,
        tenure_max: query.tenure_max,
        search_text: non_blank(query.search_text),
    })
}

fn lookup_code<T: ReferenceCode>(
    code: Option<i64>,
    name: &str,
    errors: &mut Vec<String>,
) -> Option<T> {
    let code = code?;
    let value = T::from_code(code);
    if value.is_none() {
        errors.push(format!("Unknown {} code: {}", name, code));
    }
    value
}
