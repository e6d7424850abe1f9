// src/web/handlers/system_handlers.rs
use chrono::Utc;
use rocket::serde::json::{json, Json, Value};
use tracing::{info, warn};

use crate::core::Database;
use crate::web::types::HealthResponse;

pub const SERVICE_NAME: &str = "jd-management-api";

pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Job Description Management API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "working",
        "endpoints": {
            "POST /api/jd/scan": "Scan and extract JD information",
            "POST /api/jd": "Create new job description",
            "GET /api/jd": "List job descriptions (page, per_page, search)",
            "GET /api/jd/<id>": "Get job description by ID",
            "PUT /api/jd/<id>": "Update job description",
            "DELETE /api/jd/<id>": "Delete job description",
            "GET /api/jd/search": "Filtered search of job descriptions",
            "GET /api/jd/statistics": "Job description statistics",
            "POST /api/jd/update-aging": "Update aging for all job descriptions",
            "GET /api/categories": "Get all skillset categories",
            "GET /api/modes": "Get all job modes",
            "GET /api/statuses": "Get all job statuses",
            "GET /api/users": "Get all users",
            "GET /api/customers": "Get all customers",
            "GET /api/currencies": "Get all available currencies",
            "GET /api/help": "Get help and support information",
            "GET /help": "Help page with contact details",
            "GET /health": "Health check"
        }
    }))
}

pub async fn health_handler(db: &Database) -> Json<HealthResponse> {
    let database = match db.health_check().await {
        Ok(()) => "connected".to_string(),
        Err(e) => {
            warn!("Health check found database unavailable: {:#}", e);
            format!("disconnected: {}", e)
        }
    };
    info!("Health check: database {}", database);

    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        database,
        timestamp: Utc::now().to_rfc3339(),
    })
}

pub async fn help_page_handler() -> Json<Value> {
    Json(json!({
        "title": "Need Help?",
        "message": "We're here to help you with the Job Description Management System",
        "contact": {
            "website": "www.ankyahnexus.com",
            "description": "Visit our website for support and more information",
            "support": "For technical support or questions, please contact us through our website."
        },
        "features": [
            "Scan and extract job description information automatically",
            "Manage job descriptions with comprehensive details",
            "Track skills, experience, and budget requirements",
            "Generate reports and analytics"
        ]
    }))
}

pub async fn api_help_handler() -> Json<Value> {
    Json(json!({
        "title": "Help & Support",
        "contact": {
            "website": "www.ankyahnexus.com",
            "email": "support@ankyahnexus.com",
            "phone": "+1 (555) 123-4567"
        },
        "message": "For assistance with the Job Description Management System, please visit our website or contact our support team.",
        "quick_links": ["User Guide", "FAQ", "Contact Support", "System Status"]
    }))
}
