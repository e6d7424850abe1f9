// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use handlers::*;
pub use types::*;

use crate::core::{ConfigManager, Database, ServerSettings};
use crate::repository::{Customer, User};
use crate::scanner::ScanResult;
use crate::types::{
    CategoryInfo, CreatedJd, CurrencyInfo, JdPayload, JdStatistics, JobDescription, ModeInfo,
    ScanRequest, StatusInfo,
};
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::{Json, Value};
use rocket::{catchers, delete, get, options, post, put, routes, Build, Request, Response, Rocket, State};
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET, POST, PUT, DELETE, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

// ===== System routes =====

#[get("/")]
pub async fn root() -> Json<Value> {
    handlers::root_handler().await
}

#[get("/health")]
pub async fn health(db: &State<Database>) -> Json<HealthResponse> {
    handlers::health_handler(db).await
}

#[get("/help")]
pub async fn help_page() -> Json<Value> {
    handlers::help_page_handler().await
}

#[get("/help")]
pub async fn api_help() -> Json<Value> {
    handlers::api_help_handler().await
}

// ===== Job description routes =====

#[post("/jd/scan", data = "<request>")]
pub async fn scan_jd(
    request: Option<Json<ScanRequest>>,
) -> ApiResult<Json<DataResponse<ScanResult>>> {
    handlers::scan_handler(request).await
}

#[post("/jd", data = "<request>")]
pub async fn create_jd(
    request: Option<Json<JdPayload>>,
    db: &State<Database>,
) -> ApiResult<(Status, Json<DataResponse<CreatedJd>>)> {
    handlers::create_jd_handler(request, db).await
}

#[get("/jd?<page>&<per_page>&<search>")]
pub async fn list_jds(
    page: Option<i64>,
    per_page: Option<i64>,
    search: Option<String>,
    db: &State<Database>,
) -> ApiResult<Json<PagedResponse<JobDescription>>> {
    handlers::list_jds_handler(page, per_page, search, db).await
}

#[get("/jd/search?<query..>")]
pub async fn search_jds(
    query: SearchQuery,
    db: &State<Database>,
) -> ApiResult<Json<SearchResponse<JobDescription>>> {
    handlers::search_jds_handler(query, db).await
}

#[get("/jd/statistics")]
pub async fn jd_statistics(db: &State<Database>) -> ApiResult<Json<DataResponse<JdStatistics>>> {
    handlers::statistics_handler(db).await
}

#[post("/jd/update-aging")]
pub async fn update_aging(db: &State<Database>) -> ApiResult<Json<AgingResponse>> {
    handlers::update_aging_handler(db).await
}

#[get("/jd/<jd_id>")]
pub async fn get_jd(
    jd_id: i64,
    db: &State<Database>,
) -> ApiResult<Json<DataResponse<JobDescription>>> {
    handlers::get_jd_handler(jd_id, db).await
}

#[put("/jd/<jd_id>", data = "<request>")]
pub async fn update_jd(
    jd_id: i64,
    request: Option<Json<JdPayload>>,
    db: &State<Database>,
) -> ApiResult<Json<DataResponse<JobDescription>>> {
    handlers::update_jd_handler(jd_id, request, db).await
}

#[delete("/jd/<jd_id>")]
pub async fn delete_jd(
    jd_id: i64,
    db: &State<Database>,
) -> ApiResult<Json<DataResponse<CreatedJd>>> {
    handlers::delete_jd_handler(jd_id, db).await
}

// ===== Reference data routes =====

#[get("/categories")]
pub async fn categories() -> Json<DataResponse<Vec<CategoryInfo>>> {
    handlers::categories_handler().await
}

#[get("/modes")]
pub async fn modes() -> Json<DataResponse<Vec<ModeInfo>>> {
    handlers::modes_handler().await
}

#[get("/statuses")]
pub async fn statuses() -> Json<DataResponse<Vec<StatusInfo>>> {
    handlers::statuses_handler().await
}

#[get("/currencies")]
pub async fn currencies() -> Json<DataResponse<Vec<CurrencyInfo>>> {
    handlers::currencies_handler().await
}

#[get("/users")]
pub async fn users(db: &State<Database>) -> ApiResult<Json<DataResponse<Vec<User>>>> {
    handlers::users_handler(db).await
}

#[get("/customers")]
pub async fn customers(db: &State<Database>) -> ApiResult<Json<DataResponse<Vec<Customer>>>> {
    handlers::customers_handler(db).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Verify all required fields are present".to_string(),
        ],
    ))
}

#[rocket::catch(404)]
pub fn not_found(request: &Request<'_>) -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        format!("No endpoint matches {} {}", request.method(), request.uri().path()),
        "NOT_FOUND".to_string(),
        vec!["See GET / for the list of endpoints".to_string()],
    ))
}

#[rocket::catch(422)]
pub fn unprocessable_entity() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Request body could not be processed".to_string(),
        "UNPROCESSABLE_ENTITY".to_string(),
        vec!["Check field types against the API documentation".to_string()],
    ))
}

#[rocket::catch(500)]
pub fn internal_server_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
    ))
}

/// Assemble the application around an opened database
pub fn build_rocket(db: Database, settings: &ServerSettings) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", settings.address.clone()))
        .merge(("port", settings.port))
        .merge(("log_level", "critical"));

    rocket::custom(figment)
        .attach(Cors)
        .manage(db)
        .register(
            "/",
            catchers![bad_request, not_found, unprocessable_entity, internal_server_error],
        )
        .mount("/", routes![root, health, help_page, options])
        .mount(
            "/api",
            routes![
                api_help,
                scan_jd,
                create_jd,
                list_jds,
                search_jds,
                jd_statistics,
                update_aging,
                get_jd,
                update_jd,
                delete_jd,
                categories,
                modes,
                statuses,
                currencies,
                users,
                customers,
            ],
        )
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    config.ensure_directories().await?;
    let db = Database::new(&config.server.database_path).await?;

    info!("Starting JD Management API server");
    info!("Environment: {}", config.environment);
    info!("Database: {}", config.server.database_path.display());
    info!(
        "Server: http://{}:{}",
        config.server.address, config.server.port
    );

    build_rocket(db, &config.server)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Rocket server failed: {}", e))?;

    Ok(())
}
