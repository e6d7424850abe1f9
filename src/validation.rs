// src/validation.rs
//! Field validation and sanitization for job description payloads

use std::fmt;

use crate::types::{
    Currency, EngagementMode, FlexNumber, JdFields, JdPayload, JdStatus, JobDescription,
    ReferenceCode, RevenuePotential, SkillsetCategory,
};
use crate::utils::non_blank;

pub const MAX_TITLE_LENGTH: usize = 150;
const REQUIRED_FIELDS: [&str; 2] = ["jd_title", "jd_original"];

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationFailure {
    MissingField(&'static str),
    NoData,
    Invalid(Vec<String>),
}

impl ValidationFailure {
    pub fn errors(&self) -> Vec<String> {
        match self {
            ValidationFailure::Invalid(errors) => errors.clone(),
            other => vec![other.to_string()],
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::MissingField(field) => write!(f, "Missing required field: {}", field),
            ValidationFailure::NoData => f.write_str("No data provided"),
            ValidationFailure::Invalid(errors) => f.write_str(&errors.join("; ")),
        }
    }
}

impl std::error::Error for ValidationFailure {}

/// Validate a payload for a new record. Title and original text are required.
pub fn validate_create(payload: JdPayload) -> Result<JdFields, ValidationFailure> {
    let fields = sanitize(payload)?;

    for field in REQUIRED_FIELDS {
        let present = match field {
            "jd_title" => fields.title.is_some(),
            _ => fields.original.is_some(),
        };
        if !present {
            return Err(ValidationFailure::MissingField(field));
        }
    }

    let errors = check_relationships(&fields, None);
    if !errors.is_empty() {
        return Err(ValidationFailure::Invalid(errors));
    }

    Ok(fields.with_estimated_revenue(None))
}

/// Validate a partial update. Range invariants are checked against the
/// record as it will look after the update is applied.
pub fn validate_update(
    payload: JdPayload,
    existing: &JobDescription,
) -> Result<JdFields, ValidationFailure> {
    let fields = sanitize(payload)?;
    if fields.is_empty() {
        return Err(ValidationFailure::NoData);
    }

    let errors = check_relationships(&fields, Some(existing));
    if !errors.is_empty() {
        return Err(ValidationFailure::Invalid(errors));
    }

    Ok(fields.with_estimated_revenue(Some(existing)))
}

/// Convert loosely typed payload values into typed fields, collecting every
/// per-field error before giving up.
fn sanitize(payload: JdPayload) -> Result<JdFields, ValidationFailure> {
    let mut errors = Vec::new();

    let title = non_blank(payload.jd_title);
    if let Some(title) = &title {
        if title.chars().count() > MAX_TITLE_LENGTH {
            errors.push(format!(
                "jd_title must be {} characters or less",
                MAX_TITLE_LENGTH
            ));
        }
    }

    let fields = JdFields {
        title,
        customer_id: integer_field(&payload.jd_customer_id, "jd_customer_id", None, &mut errors),
        consumer: non_blank(payload.jd_consumer),
        original: non_blank(payload.jd_original),
        skillset_cat: coded_field::<SkillsetCategory>(
            &payload.jd_skillset_cat,
            "jd_skillset_cat",
            &mut errors,
        ),
        skillset: payload.jd_skillset.map(|list| list.into_items()),
        mode: coded_field::<EngagementMode>(&payload.jd_mode, "jd_mode", &mut errors),
        tenure: integer_field(&payload.jd_tenure, "jd_tenure", Some(1), &mut errors),
        exp_min: decimal_field(&payload.jd_op_exp_min, "jd_op_exp_min", 4, 1, &mut errors),
        exp_max: decimal_field(&payload.jd_op_exp_max, "jd_op_exp_max", 4, 1, &mut errors),
        budget_min: decimal_field(
            &payload.jd_op_budget_min,
            "jd_op_budget_min",
            10,
            2,
            &mut errors,
        ),
        budget_max: decimal_field(
            &payload.jd_op_budget_max,
            "jd_op_budget_max",
            10,
            2,
            &mut errors,
        ),
        open_position: integer_field(
            &payload.jd_open_position,
            "jd_open_position",
            Some(1),
            &mut errors,
        ),
        available_pos: integer_field(
            &payload.jd_available_pos,
            "jd_available_pos",
            Some(0),
            &mut errors,
        ),
        revenue_potential: non_blank(payload.jd_revenue_potential).and_then(|value| {
            let parsed = RevenuePotential::parse(&value);
            if parsed.is_none() {
                errors.push("jd_revenue_potential must be one of: High, Medium, Low".to_string());
            }
            parsed
        }),
        currency: non_blank(payload.jd_currency).and_then(|value| {
            let parsed = Currency::from_code(&value);
            if parsed.is_none() {
                errors.push("jd_currency must be one of: USD, INR".to_string());
            }
            parsed
        }),
        keywords: payload.jd_keywords.map(|list| list.into_items()),
        source: non_blank(payload.jd_source),
        special_instruction: non_blank(payload.jd_special_instruction),
        created_by: non_blank(payload.jd_created_by.map(|v| v.into_string())),
        status: coded_field::<JdStatus>(&payload.jd_status, "jd_status", &mut errors),
    };

    if errors.is_empty() {
        Ok(fields)
    } else {
        Err(ValidationFailure::Invalid(errors))
    }
}

fn integer_field(
    value: &Option<FlexNumber>,
    name: &str,
    min_value: Option<i64>,
    errors: &mut Vec<String>,
) -> Option<i64> {
    let value = value.as_ref()?;
    match value.as_i64() {
        Ok(Some(n)) => {
            if let Some(min) = min_value {
                if n < min {
                    errors.push(format!("{} must be {} or greater", name, min));
                    return None;
                }
            }
            Some(n)
        }
        Ok(None) => None,
        Err(()) => {
            errors.push(format!("{} must be a valid integer", name));
            None
        }
    }
}

/// Non-negative number with at most `precision - scale` integer digits and
/// `scale` fractional digits
fn decimal_field(
    value: &Option<FlexNumber>,
    name: &str,
    precision: usize,
    scale: usize,
    errors: &mut Vec<String>,
) -> Option<f64> {
    let value = value.as_ref()?;
    let number = match value.as_f64() {
        Ok(Some(n)) => n,
        Ok(None) => return None,
        Err(()) => {
            errors.push(format!("{} must be a valid number", name));
            return None;
        }
    };

    if number < 0.0 {
        errors.push(format!("{} must be 0 or greater", name));
        return None;
    }

    let rendered = number.to_string();
    let (integer_part, decimal_part) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), ""));
    if integer_part.len() > precision - scale {
        errors.push(format!("{} integer part exceeds maximum length", name));
        return None;
    }
    if decimal_part.len() > scale {
        errors.push(format!("{} decimal part exceeds maximum precision", name));
        return None;
    }

    Some(number)
}

fn coded_field<T: ReferenceCode>(
    value: &Option<FlexNumber>,
    name: &str,
    errors: &mut Vec<String>,
) -> Option<T> {
    let value = value.as_ref()?;
    let code = match value.as_i64() {
        Ok(Some(code)) => code,
        Ok(None) => return None,
        Err(()) => {
            errors.push(format!("{} must be a valid integer", name));
            return None;
        }
    };

    let parsed = T::from_code(code);
    if parsed.is_none() {
        let allowed = T::ALL
            .iter()
            .map(|v| format!("{} ({})", v.code(), v.name()))
            .collect::<Vec<_>>()
            .join(", ");
        errors.push(format!("{} must be one of: {}", name, allowed));
    }
    parsed
}

fn check_relationships(fields: &JdFields, existing: Option<&JobDescription>) -> Vec<String> {
    let mut errors = Vec::new();

    let exp_min = fields.exp_min.or_else(|| existing.and_then(|jd| jd.jd_op_exp_min));
    let exp_max = fields.exp_max.or_else(|| existing.and_then(|jd| jd.jd_op_exp_max));
    if let (Some(min), Some(max)) = (exp_min, exp_max) {
        if min > max {
            errors.push("jd_op_exp_min cannot be greater than jd_op_exp_max".to_string());
        }
    }

    let budget_min = fields
        .budget_min
        .or_else(|| existing.and_then(|jd| jd.jd_op_budget_min));
    let budget_max = fields
        .budget_max
        .or_else(|| existing.and_then(|jd| jd.jd_op_budget_max));
    if let (Some(min), Some(max)) = (budget_min, budget_max) {
        if min > max {
            errors.push("jd_op_budget_min cannot be greater than jd_op_budget_max".to_string());
        }
    }

    let open = fields
        .open_position
        .or_else(|| existing.and_then(|jd| jd.jd_open_position));
    let available = fields
        .available_pos
        .or_else(|| existing.and_then(|jd| jd.jd_available_pos));
    if let (Some(open), Some(available)) = (open, available) {
        if available > open {
            errors.push("jd_available_pos cannot exceed jd_open_position".to_string());
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{JobDescriptionRow, StringList};
    use chrono::Utc;

    fn payload(json: &str) -> JdPayload {
        serde_json::from_str(json).unwrap()
    }

    fn existing() -> JobDescription {
        let now = Utc::now();
        JobDescriptionRow {
            jd_id: 1,
            jd_title: "Backend Engineer".to_string(),
            jd_customer_id: Some(1),
            jd_consumer: None,
            jd_original: "text".to_string(),
            jd_skillset_cat: Some(2),
            jd_skillset: None,
            jd_mode: Some(1),
            jd_tenure: Some(12),
            jd_op_exp_min: Some(3.0),
            jd_op_exp_max: Some(5.0),
            jd_op_budget_min: Some(50_000.0),
            jd_op_budget_max: Some(80_000.0),
            jd_open_position: Some(4),
            jd_available_pos: Some(2),
            jd_revenue_potential: Some("Medium".to_string()),
            jd_currency: Some("USD".to_string()),
            jd_keywords: None,
            jd_source: None,
            jd_special_instruction: None,
            jd_created_by: None,
            jd_status: Some(1),
            jd_aging: Some(0),
            jd_created_date: now,
            jd_updated_date: now,
            customer_name: None,
        }
        .into()
    }

    #[test]
    fn test_create_requires_title_and_original() {
        let missing_title = validate_create(payload(r#"{"jd_original": "We need devs"}"#));
        assert_eq!(
            missing_title,
            Err(ValidationFailure::MissingField("jd_title"))
        );

        let blank_original =
            validate_create(payload(r#"{"jd_title": "Dev", "jd_original": "   "}"#));
        assert_eq!(
            blank_original,
            Err(ValidationFailure::MissingField("jd_original"))
        );
        assert_eq!(
            blank_original.unwrap_err().to_string(),
            "Missing required field: jd_original"
        );
    }

    #[test]
    fn test_create_trims_and_types_fields() {
        let fields = validate_create(payload(
            r#"{
                "jd_title": "  Senior React Developer ",
                "jd_original": "Looking for a react developer",
                "jd_mode": "3",
                "jd_tenure": 12,
                "jd_op_exp_min": "3",
                "jd_op_exp_max": 5.5,
                "jd_currency": "inr",
                "jd_skillset": ["react", " node.js "]
            }"#,
        ))
        .unwrap();

        assert_eq!(fields.title.as_deref(), Some("Senior React Developer"));
        assert_eq!(fields.mode, Some(EngagementMode::Hybrid));
        assert_eq!(fields.tenure, Some(12));
        assert_eq!(fields.exp_min, Some(3.0));
        assert_eq!(fields.exp_max, Some(5.5));
        assert_eq!(fields.currency, Some(Currency::Inr));
        assert_eq!(
            fields.skillset,
            Some(StringList::List(vec!["react".into(), "node.js".into()]).into_items())
        );
    }

    #[test]
    fn test_create_rejects_inverted_ranges() {
        let result = validate_create(payload(
            r#"{
                "jd_title": "Dev",
                "jd_original": "text",
                "jd_op_exp_min": 6,
                "jd_op_exp_max": 2,
                "jd_op_budget_min": 9000,
                "jd_op_budget_max": 100,
                "jd_open_position": 2,
                "jd_available_pos": 3
            }"#,
        ));

        let errors = result.unwrap_err().errors();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("jd_op_exp_min cannot be greater"));
        assert!(errors[1].contains("jd_op_budget_min cannot be greater"));
        assert!(errors[2].contains("jd_available_pos cannot exceed"));
    }

    #[test]
    fn test_create_collects_field_errors() {
        let result = validate_create(payload(
            r#"{
                "jd_title": "Dev",
                "jd_original": "text",
                "jd_mode": 9,
                "jd_tenure": 0,
                "jd_op_exp_min": "many",
                "jd_op_exp_max": 2.25,
                "jd_currency": "EUR"
            }"#,
        ));

        let errors = result.unwrap_err().errors();
        assert!(errors.iter().any(|e| e.starts_with("jd_mode must be one of")));
        assert!(errors.contains(&"jd_tenure must be 1 or greater".to_string()));
        assert!(errors.contains(&"jd_op_exp_min must be a valid number".to_string()));
        assert!(errors.contains(&"jd_op_exp_max decimal part exceeds maximum precision".to_string()));
        assert!(errors.contains(&"jd_currency must be one of: USD, INR".to_string()));
    }

    #[test]
    fn test_create_rejects_out_of_range_integer() {
        let errors = validate_create(payload(
            r#"{"jd_title": "Dev", "jd_original": "text", "jd_tenure": 1e30}"#,
        ))
        .unwrap_err()
        .errors();

        assert_eq!(errors, vec!["jd_tenure must be a valid integer".to_string()]);
    }

    #[test]
    fn test_title_length_limit() {
        let long_title = "a".repeat(MAX_TITLE_LENGTH + 1);
        let json = format!(r#"{{"jd_title": "{}", "jd_original": "x"}}"#, long_title);
        let errors = validate_create(payload(&json)).unwrap_err().errors();
        assert_eq!(errors, vec!["jd_title must be 150 characters or less"]);
    }

    #[test]
    fn test_create_estimates_revenue() {
        let fields = validate_create(payload(
            r#"{"jd_title": "Dev", "jd_original": "x", "jd_op_budget_max": 120000, "jd_open_position": 5}"#,
        ))
        .unwrap();
        assert_eq!(fields.revenue_potential, Some(RevenuePotential::High));
    }

    #[test]
    fn test_update_checks_merged_ranges() {
        let jd = existing();

        let bad = validate_update(payload(r#"{"jd_op_exp_min": 7}"#), &jd);
        assert_eq!(
            bad.unwrap_err().errors(),
            vec!["jd_op_exp_min cannot be greater than jd_op_exp_max"]
        );

        let bad_available = validate_update(payload(r#"{"jd_available_pos": 5}"#), &jd);
        assert!(bad_available.is_err());

        let ok = validate_update(payload(r#"{"jd_op_exp_max": 8, "jd_title": "Lead"}"#), &jd)
            .unwrap();
        assert_eq!(ok.exp_max, Some(8.0));
        assert_eq!(ok.title.as_deref(), Some("Lead"));
        assert_eq!(ok.revenue_potential, None);
    }

    #[test]
    fn test_update_reestimates_revenue_when_budget_changes() {
        let jd = existing();
        let fields = validate_update(payload(r#"{"jd_op_budget_max": 200000}"#), &jd).unwrap();
        assert_eq!(fields.revenue_potential, Some(RevenuePotential::High));
    }

    #[test]
    fn test_update_rejects_empty_payload() {
        let jd = existing();
        assert_eq!(
            validate_update(payload("{}"), &jd),
            Err(ValidationFailure::NoData)
        );
    }

    #[test]
    fn test_category_and_status_codes() {
        let fields = validate_create(payload(
            r#"{"jd_title": "Dev", "jd_original": "x", "jd_skillset_cat": 5, "jd_status": "2"}"#,
        ))
        .unwrap();
        assert_eq!(fields.skillset_cat, Some(SkillsetCategory::DataScience));
        assert_eq!(fields.status, Some(JdStatus::Draft));
    }
}
