// src/scanner/mod.rs
//! Heuristic extraction of structured job description fields from free text.
//!
//! Every field is produced by an independent pass over the lowercased text.
//! Within a pass the first matching pattern wins. Budget is never extracted,
//! it is left for manual entry.

use serde::Serialize;

use crate::types::{EngagementMode, RevenuePotential, SkillsetCategory};

pub mod extractor;
pub mod vocabulary;

pub use extractor::{MAX_KEYWORDS, MAX_SKILLS};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jd_title: Option<String>,
    pub jd_skillset: Vec<String>,
    pub jd_skillset_cat: SkillsetCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jd_mode: Option<EngagementMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jd_tenure: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jd_op_exp_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jd_op_exp_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jd_open_position: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jd_available_pos: Option<i64>,
    pub jd_revenue_potential: Option<RevenuePotential>,
    pub jd_keywords: Vec<String>,
}

/// Extract candidate field values from a raw posting
pub fn scan(jd_text: &str) -> ScanResult {
    let text = jd_text.to_lowercase();

    let skills = extractor::extract_skills(&text);
    let category = extractor::categorize(&skills);
    let experience = extractor::extract_experience(&text);
    let open_positions = extractor::extract_open_positions(&text);

    ScanResult {
        jd_title: extractor::extract_title(&text),
        jd_skillset: skills.iter().take(MAX_SKILLS).map(|s| s.to_string()).collect(),
        jd_skillset_cat: category,
        jd_mode: extractor::detect_mode(&text),
        jd_tenure: extractor::extract_tenure(&text),
        jd_op_exp_min: experience.map(|(min, _)| min),
        jd_op_exp_max: experience.map(|(_, max)| max),
        jd_open_position: open_positions,
        jd_available_pos: open_positions,
        // No budget is extracted, so there is nothing to estimate from
        jd_revenue_potential: None,
        jd_keywords: extractor::extract_keywords(&text)
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}
