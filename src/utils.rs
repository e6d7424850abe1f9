// src/utils.rs
use chrono::{DateTime, Utc};

pub const DEFAULT_PER_PAGE: i64 = 10;
pub const MAX_PER_PAGE: i64 = 100;

/// Title-case text: the first letter of every alphabetic run is upper-cased,
/// every other letter lower-cased.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }

    result
}

/// Whole days elapsed between `created` and `now`, never negative
pub fn aging_days(created: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - created).num_days().max(0)
}

/// Clamp raw pagination parameters to the accepted window
pub fn normalize_pagination(page: Option<i64>, per_page: Option<i64>) -> (i64, i64) {
    let page = match page {
        Some(p) if p >= 1 => p,
        _ => 1,
    };
    let per_page = match per_page {
        Some(n) if (1..=MAX_PER_PAGE).contains(&n) => n,
        _ => DEFAULT_PER_PAGE,
    };
    (page, per_page)
}

/// Number of pages needed to hold `total` rows
pub fn page_count(total: i64, per_page: i64) -> i64 {
    if per_page <= 0 {
        return 0;
    }
    (total + per_page - 1) / per_page
}

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Trim a string, mapping blank input to `None`
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("senior react developer"), "Senior React Developer");
        assert_eq!(title_case("node.js DEVELOPER"), "Node.Js Developer");
        assert_eq!(title_case("full-stack engineer"), "Full-Stack Engineer");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_aging_days() {
        let now = Utc::now();
        assert_eq!(aging_days(now - Duration::days(3), now), 3);
        assert_eq!(aging_days(now - Duration::hours(30), now), 1);
        assert_eq!(aging_days(now + Duration::days(2), now), 0);
    }

    #[test]
    fn test_normalize_pagination() {
        assert_eq!(normalize_pagination(None, None), (1, 10));
        assert_eq!(normalize_pagination(Some(0), Some(0)), (1, 10));
        assert_eq!(normalize_pagination(Some(3), Some(100)), (3, 100));
        assert_eq!(normalize_pagination(Some(2), Some(101)), (2, 10));
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  x ".to_string())), Some("x".to_string()));
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(non_blank(None), None);
    }
}
