// src/types/job_description.rs
//! Job description entity, its storage row and the request payload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::reference::{
    Currency, EngagementMode, JdStatus, ReferenceCode, RevenuePotential, SkillsetCategory,
};

// ===== Stored entity =====

#[derive(Debug, Clone, Serialize)]
pub struct JobDescription {
    pub jd_id: i64,
    pub jd_title: String,
    pub jd_customer_id: Option<i64>,
    pub jd_consumer: Option<String>,
    pub jd_original: String,
    pub jd_skillset_cat: Option<SkillsetCategory>,
    pub jd_skillset: Vec<String>,
    pub jd_mode: Option<EngagementMode>,
    pub jd_tenure: Option<i64>,
    pub jd_op_exp_min: Option<f64>,
    pub jd_op_exp_max: Option<f64>,
    pub jd_op_budget_min: Option<f64>,
    pub jd_op_budget_max: Option<f64>,
    pub jd_open_position: Option<i64>,
    pub jd_available_pos: Option<i64>,
    pub jd_revenue_potential: Option<RevenuePotential>,
    pub jd_currency: Currency,
    pub jd_keywords: Vec<String>,
    pub jd_source: Option<String>,
    pub jd_special_instruction: Option<String>,
    pub jd_created_by: Option<String>,
    pub jd_status: JdStatus,
    pub jd_aging: i64,
    pub jd_created_date: DateTime<Utc>,
    pub jd_updated_date: DateTime<Utc>,
    // Display names resolved from codes and the customers table
    pub customer_name: Option<String>,
    pub skillset_category_name: Option<&'static str>,
    pub job_mode_name: Option<&'static str>,
    pub job_status_name: &'static str,
}

/// Raw `job_descriptions` row joined with the customer name
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct JobDescriptionRow {
    pub jd_id: i64,
    pub jd_title: String,
    pub jd_customer_id: Option<i64>,
    pub jd_consumer: Option<String>,
    pub jd_original: String,
    pub jd_skillset_cat: Option<i64>,
    pub jd_skillset: Option<String>,
    pub jd_mode: Option<i64>,
    pub jd_tenure: Option<i64>,
    pub jd_op_exp_min: Option<f64>,
    pub jd_op_exp_max: Option<f64>,
    pub jd_op_budget_min: Option<f64>,
    pub jd_op_budget_max: Option<f64>,
    pub jd_open_position: Option<i64>,
    pub jd_available_pos: Option<i64>,
    pub jd_revenue_potential: Option<String>,
    pub jd_currency: Option<String>,
    pub jd_keywords: Option<String>,
    pub jd_source: Option<String>,
    pub jd_special_instruction: Option<String>,
    pub jd_created_by: Option<String>,
    pub jd_status: Option<i64>,
    pub jd_aging: Option<i64>,
    pub jd_created_date: DateTime<Utc>,
    pub jd_updated_date: DateTime<Utc>,
    pub customer_name: Option<String>,
}

impl From<JobDescriptionRow> for JobDescription {
    fn from(row: JobDescriptionRow) -> Self {
        let skillset_cat = row.jd_skillset_cat.and_then(SkillsetCategory::from_code);
        let mode = row.jd_mode.and_then(EngagementMode::from_code);
        let status = row
            .jd_status
            .and_then(JdStatus::from_code)
            .unwrap_or_default();

        Self {
            jd_id: row.jd_id,
            jd_title: row.jd_title,
            jd_customer_id: row.jd_customer_id,
            jd_consumer: row.jd_consumer,
            jd_original: row.jd_original,
            jd_skillset_cat: skillset_cat,
            jd_skillset: parse_string_list(row.jd_skillset.as_deref()),
            jd_mode: mode,
            jd_tenure: row.jd_tenure,
            jd_op_exp_min: row.jd_op_exp_min,
            jd_op_exp_max: row.jd_op_exp_max,
            jd_op_budget_min: row.jd_op_budget_min,
            jd_op_budget_max: row.jd_op_budget_max,
            jd_open_position: row.jd_open_position,
            jd_available_pos: row.jd_available_pos,
            jd_revenue_potential: row
                .jd_revenue_potential
                .as_deref()
                .and_then(RevenuePotential::parse),
            jd_currency: row
                .jd_currency
                .as_deref()
                .and_then(Currency::from_code)
                .unwrap_or_default(),
            jd_keywords: parse_string_list(row.jd_keywords.as_deref()),
            jd_source: row.jd_source,
            jd_special_instruction: row.jd_special_instruction,
            jd_created_by: row.jd_created_by,
            jd_status: status,
            jd_aging: row.jd_aging.unwrap_or(0),
            jd_created_date: row.jd_created_date,
            jd_updated_date: row.jd_updated_date,
            customer_name: row.customer_name,
            skillset_category_name: skillset_cat.map(|c| c.name()),
            job_mode_name: mode.map(|m| m.name()),
            job_status_name: status.name(),
        }
    }
}

/// Decode a stored list column. JSON arrays are preferred; older rows holding
/// plain comma separated text are split instead.
pub fn parse_string_list(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(items) => items,
        Err(_) => raw
            .split(',')
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect(),
    }
}

// ===== Validated field set =====

/// Typed, sanitized field values. Every field is optional so the same
/// structure carries a full record on create and a patch on update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JdFields {
    pub title: Option<String>,
    pub customer_id: Option<i64>,
    pub consumer: Option<String>,
    pub original: Option<String>,
    pub skillset_cat: Option<SkillsetCategory>,
    pub skillset: Option<Vec<String>>,
    pub mode: Option<EngagementMode>,
    pub tenure: Option<i64>,
    pub exp_min: Option<f64>,
    pub exp_max: Option<f64>,
    pub budget_min: Option<f64>,
    pub budget_max: Option<f64>,
    pub open_position: Option<i64>,
    pub available_pos: Option<i64>,
    pub revenue_potential: Option<RevenuePotential>,
    pub currency: Option<Currency>,
    pub keywords: Option<Vec<String>>,
    pub source: Option<String>,
    pub special_instruction: Option<String>,
    pub created_by: Option<String>,
    pub status: Option<JdStatus>,
}

impl JdFields {
    pub fn is_empty(&self) -> bool {
        *self == JdFields::default()
    }

    /// Fill in revenue potential from budget and positions when the caller left it out
    pub fn with_estimated_revenue(mut self, fallback: Option<&JobDescription>) -> Self {
        if self.revenue_potential.is_some() {
            return self;
        }
        let budget_touched = self.budget_max.is_some() || self.open_position.is_some();
        if fallback.is_some() && !budget_touched {
            return self;
        }

        let budget_max = self
            .budget_max
            .or_else(|| fallback.and_then(|jd| jd.jd_op_budget_max));
        let open_positions = self
            .open_position
            .or_else(|| fallback.and_then(|jd| jd.jd_open_position));

        self.revenue_potential = RevenuePotential::estimate(budget_max, open_positions);
        self
    }
}

// ===== Request payloads =====

/// Number sent either as a JSON number or as a numeric string (HTML form input)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FlexNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

impl FlexNumber {
    /// `Ok(None)` for blank text, `Err(())` for anything non-numeric
    pub fn as_f64(&self) -> Result<Option<f64>, ()> {
        match self {
            FlexNumber::Int(i) => Ok(Some(*i as f64)),
            FlexNumber::Float(f) if f.is_finite() => Ok(Some(*f)),
            FlexNumber::Float(_) => Err(()),
            FlexNumber::Text(s) if s.trim().is_empty() => Ok(None),
            FlexNumber::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(Some)
                .ok_or(()),
        }
    }

    pub fn as_i64(&self) -> Result<Option<i64>, ()> {
        match self {
            FlexNumber::Int(i) => Ok(Some(*i)),
            FlexNumber::Float(f)
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 =>
            {
                Ok(Some(*f as i64))
            }
            FlexNumber::Float(_) => Err(()),
            FlexNumber::Text(s) if s.trim().is_empty() => Ok(None),
            FlexNumber::Text(s) => s.trim().parse::<i64>().map(Some).map_err(|_| ()),
        }
    }
}

/// Free text that some clients send as a number (user ids)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FlexText {
    Text(String),
    Number(serde_json::Number),
}

impl FlexText {
    pub fn into_string(self) -> String {
        match self {
            FlexText::Text(s) => s,
            FlexText::Number(n) => n.to_string(),
        }
    }
}

/// List sent as a JSON array or as comma separated text
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StringList {
    List(Vec<String>),
    Text(String),
}

impl StringList {
    pub fn into_items(self) -> Vec<String> {
        let items = match self {
            StringList::List(items) => items,
            StringList::Text(text) => parse_string_list(Some(&text)),
        };
        let mut seen = Vec::with_capacity(items.len());
        for item in items {
            let item = item.trim().to_string();
            if !item.is_empty() && !seen.contains(&item) {
                seen.push(item);
            }
        }
        seen
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JdPayload {
    pub jd_title: Option<String>,
    pub jd_customer_id: Option<FlexNumber>,
    pub jd_consumer: Option<String>,
    pub jd_original: Option<String>,
    pub jd_skillset_cat: Option<FlexNumber>,
    pub jd_skillset: Option<StringList>,
    pub jd_mode: Option<FlexNumber>,
    pub jd_tenure: Option<FlexNumber>,
    pub jd_op_exp_min: Option<FlexNumber>,
    pub jd_op_exp_max: Option<FlexNumber>,
    pub jd_op_budget_min: Option<FlexNumber>,
    pub jd_op_budget_max: Option<FlexNumber>,
    pub jd_open_position: Option<FlexNumber>,
    pub jd_available_pos: Option<FlexNumber>,
    pub jd_revenue_potential: Option<String>,
    pub jd_currency: Option<String>,
    pub jd_keywords: Option<StringList>,
    pub jd_source: Option<String>,
    pub jd_special_instruction: Option<String>,
    pub jd_created_by: Option<FlexText>,
    pub jd_status: Option<FlexNumber>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScanRequest {
    pub jd_text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatedJd {
    pub id: i64,
}

// ===== Listing, search and statistics =====

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub mode: Option<EngagementMode>,
    pub category: Option<SkillsetCategory>,
    pub status: Option<JdStatus>,
    pub skill: Option<String>,
    pub experience_min: Option<f64>,
    pub experience_max: Option<f64>,
    pub budget_min: Option<f64>,
    pub budget_max: Option<f64>,
    pub tenure_min: Option<i64>,
    pub tenure_max: Option<i64>,
    pub search_text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub pages: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        let pages = crate::utils::page_count(total, per_page);
        Self {
            page,
            per_page,
            total,
            pages,
            has_next: page < pages,
            has_prev: page > 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct JdPage {
    pub items: Vec<JobDescription>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusCount {
    pub status_id: i64,
    pub status_name: &'static str,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct JdStatistics {
    pub total_jobs: i64,
    pub remote_jobs: i64,
    pub onsite_jobs: i64,
    pub hybrid_jobs: i64,
    pub contract_jobs: i64,
    pub part_time_jobs: i64,
    pub total_open_positions: i64,
    pub total_available_positions: i64,
    pub avg_tenure_months: f64,
    pub jobs_by_status: Vec<StatusCount>,
}
