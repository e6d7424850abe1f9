// src/scanner/extractor.rs
use regex::Regex;
use std::sync::LazyLock;

use super::vocabulary::*;
use crate::types::{EngagementMode, SkillsetCategory};
use crate::utils::title_case;

pub const MAX_SKILLS: usize = 15;
pub const MAX_KEYWORDS: usize = 20;

/// Default spread added to a single experience figure
const EXPERIENCE_SPREAD_YEARS: f64 = 2.0;

const ROLE_WORDS: &str =
    "developer|engineer|analyst|manager|specialist|consultant|architect|lead|senior|junior";

fn compile(patterns: &[String]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("scanner pattern must compile"))
        .collect()
}

static TITLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?:looking for|seeking|hiring|position|role|job|opportunity)[:\s]+([^.\n]+)".to_string(),
        format!(r"([a-z\s]+(?:{})[^.\n]*)", ROLE_WORDS),
        format!(r"([a-z\s]+(?:{}))", ROLE_WORDS),
    ])
});

#[derive(Debug, Clone, Copy)]
enum TenureUnit {
    Months,
    Years,
    Weeks,
}

impl TenureUnit {
    fn to_months(self, n: i64) -> i64 {
        match self {
            TenureUnit::Months => n,
            TenureUnit::Years => n.saturating_mul(12),
            TenureUnit::Weeks => (n / 4).max(1),
        }
    }
}

static TENURE_PATTERNS: LazyLock<Vec<(Regex, TenureUnit)>> = LazyLock::new(|| {
    [
        (r"(\d+)\s*(?:month|months|mo)", TenureUnit::Months),
        (r"(\d+)\s*(?:year|years|yr)", TenureUnit::Years),
        (r"(\d+)\s*(?:week|weeks|wk)", TenureUnit::Weeks),
        (r"contract.*?(\d+)\s*(?:month|months|mo)", TenureUnit::Months),
        (r"duration.*?(\d+)\s*(?:month|months|mo)", TenureUnit::Months),
        (r"term.*?(\d+)\s*(?:month|months|mo)", TenureUnit::Months),
    ]
    .into_iter()
    .map(|(p, unit)| (Regex::new(p).expect("tenure pattern must compile"), unit))
    .collect()
});

/// The first pattern captures an explicit range, the rest a single minimum
static EXPERIENCE_RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*(?:to|-)\s*(\d+(?:\.\d+)?)\s*(?:year|years|yr)")
        .expect("experience pattern must compile")
});

static EXPERIENCE_MIN_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(\d+(?:\.\d+)?)\s*(?:year|years|yr).*?experience".to_string(),
        r"experience.*?(\d+(?:\.\d+)?)\s*(?:year|years|yr)".to_string(),
        r"(\d+(?:\.\d+)?)\s*(?:year|years|yr).*?minimum".to_string(),
        r"minimum.*?(\d+(?:\.\d+)?)\s*(?:year|years|yr)".to_string(),
        r"(\d+(?:\.\d+)?)\+?\s*(?:year|years|yr).*?experience".to_string(),
        r"(\d+(?:\.\d+)?)\s*(?:year|years|yr).*?required".to_string(),
    ])
});

static POSITION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(\d+)\s*(?:position|positions|role|roles|opening|openings)".to_string(),
        r"(\d+)\s*(?:vacancy|vacancies|slot|slots)".to_string(),
        r"looking.*?(\d+)\s*(?:candidate|candidates)".to_string(),
        r"hiring.*?(\d+)\s*(?:developer|engineer|analyst)".to_string(),
        r"(\d+)\s*(?:headcount|fte|full.?time)".to_string(),
        r"team.*?(\d+)\s*(?:member|members)".to_string(),
    ])
});

pub fn extract_title(text: &str) -> Option<String> {
    TITLE_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| title_case(m.as_str().trim()))
    })
}

/// Skills in vocabulary order, untruncated.
///
/// A term listed in several groups (`swift`, `kotlin`, `xamarin`) appears once per
/// group, so each group counts it when categorizing.
pub fn extract_skills(text: &str) -> Vec<&'static str> {
    let mut skills: Vec<&'static str> = SKILL_GROUPS
        .iter()
        .flat_map(|group| group.iter().copied())
        .filter(|skill| text.contains(skill))
        .collect();

    for &(variation, full_name) in SKILL_VARIATIONS {
        if text.contains(variation) && !skills.contains(&full_name) {
            skills.push(full_name);
        }
    }

    skills
}

pub fn categorize(skills: &[&str]) -> SkillsetCategory {
    let count = |group: &[&str]| skills.iter().filter(|s| group.contains(*s)).count();

    let frontend = count(FRONTEND_TECH);
    let backend = count(BACKEND_TECH);
    let data = count(DATA_SCIENCE);
    let devops = count(CLOUD_DEVOPS);
    let mobile = count(MOBILE_TECH);

    if frontend > 0 && backend > 0 {
        SkillsetCategory::FullStack
    } else if frontend > backend {
        SkillsetCategory::Frontend
    } else if backend > frontend {
        SkillsetCategory::Backend
    } else if data > 2 {
        SkillsetCategory::DataScience
    } else if devops > 2 {
        SkillsetCategory::DevOps
    } else if mobile > 1 {
        SkillsetCategory::Mobile
    } else {
        SkillsetCategory::FullStack
    }
}

pub fn detect_mode(text: &str) -> Option<EngagementMode> {
    let checks: [(&[&str], EngagementMode); 5] = [
        (REMOTE_TERMS, EngagementMode::Remote),
        (ONSITE_TERMS, EngagementMode::Onsite),
        (HYBRID_TERMS, EngagementMode::Hybrid),
        (CONTRACT_TERMS, EngagementMode::Contract),
        (PART_TIME_TERMS, EngagementMode::PartTime),
    ];

    checks
        .into_iter()
        .find(|(terms, _)| terms.iter().any(|term| text.contains(term)))
        .map(|(_, mode)| mode)
}

/// Engagement length in months
pub fn extract_tenure(text: &str) -> Option<i64> {
    TENURE_PATTERNS.iter().find_map(|(pattern, unit)| {
        let n = first_capture(pattern, text)?.parse::<i64>().ok()?;
        Some(unit.to_months(n))
    })
}

/// Minimum and maximum years of experience
pub fn extract_experience(text: &str) -> Option<(f64, f64)> {
    if let Some(caps) = EXPERIENCE_RANGE_PATTERN.captures(text) {
        let min = caps.get(1).and_then(|m| m.as_str().parse::<f64>().ok());
        let max = caps.get(2).and_then(|m| m.as_str().parse::<f64>().ok());
        if let (Some(min), Some(max)) = (min, max) {
            return Some((min, max));
        }
    }

    EXPERIENCE_MIN_PATTERNS.iter().find_map(|pattern| {
        let min = first_capture(pattern, text)?.parse::<f64>().ok()?;
        Some((min, min + EXPERIENCE_SPREAD_YEARS))
    })
}

pub fn extract_open_positions(text: &str) -> Option<i64> {
    POSITION_PATTERNS
        .iter()
        .find_map(|pattern| first_capture(pattern, text)?.parse::<i64>().ok())
}

pub fn extract_keywords(text: &str) -> Vec<&'static str> {
    let mut keywords: Vec<&'static str> = Vec::new();
    for keyword in KEYWORD_GROUPS.iter().flat_map(|group| group.iter().copied()) {
        if keywords.len() == MAX_KEYWORDS {
            break;
        }
        if text.contains(keyword) && !keywords.contains(&keyword) {
            keywords.push(keyword);
        }
    }
    keywords
}

fn first_capture<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_prefers_hiring_phrase() {
        assert_eq!(
            extract_title("we are hiring: senior rust developer. apply now"),
            Some("Senior Rust Developer".to_string())
        );
    }

    #[test]
    fn test_title_falls_back_to_role_word() {
        assert_eq!(
            extract_title("acme needs a data analyst with sql skills"),
            Some("Acme Needs A Data Analyst With Sql Skills".to_string())
        );
        assert_eq!(extract_title("12345 !!!"), None);
    }

    #[test]
    fn test_skills_follow_vocabulary_order() {
        let skills = extract_skills("python, react and node.js on aws with docker");
        assert_eq!(skills[0], "python");
        assert!(skills.contains(&"react"));
        assert!(skills.contains(&"node.js"));
        assert!(skills.contains(&"aws"));
        assert!(skills.iter().position(|s| *s == "react") < skills.iter().position(|s| *s == "aws"));
    }

    #[test]
    fn test_skills_shared_between_groups_repeat() {
        assert_eq!(extract_skills("swift developer"), vec!["swift", "r", "swift"]);
        assert_eq!(
            extract_skills("xamarin developer"),
            vec!["r", "xamarin", "xamarin"]
        );
        assert_eq!(
            categorize(&extract_skills("swift developer")),
            SkillsetCategory::Mobile
        );
    }

    #[test]
    fn test_skill_variations_add_full_names() {
        let skills = extract_skills("dotnet shop");
        assert!(skills.contains(&".net"));

        let skills = extract_skills("strong js skills");
        assert!(skills.contains(&"javascript"));
        assert!(!skills.contains(&"typescript"));
    }

    #[test]
    fn test_categorize_rules() {
        assert_eq!(categorize(&["react", "django"]), SkillsetCategory::FullStack);
        assert_eq!(categorize(&["react", "css"]), SkillsetCategory::Frontend);
        assert_eq!(categorize(&["django"]), SkillsetCategory::Backend);
        assert_eq!(
            categorize(&["pandas", "numpy", "pytorch"]),
            SkillsetCategory::DataScience
        );
        assert_eq!(
            categorize(&["aws", "docker", "kubernetes"]),
            SkillsetCategory::DevOps
        );
        assert_eq!(categorize(&["flutter", "ios"]), SkillsetCategory::Mobile);
        assert_eq!(categorize(&[]), SkillsetCategory::FullStack);
    }

    #[test]
    fn test_mode_priority() {
        assert_eq!(detect_mode("remote or office"), Some(EngagementMode::Remote));
        assert_eq!(detect_mode("hybrid at our office"), Some(EngagementMode::Onsite));
        assert_eq!(detect_mode("hybrid setup"), Some(EngagementMode::Hybrid));
        assert_eq!(detect_mode("freelance gig"), Some(EngagementMode::Contract));
        assert_eq!(detect_mode("part time gig"), Some(EngagementMode::PartTime));
        assert_eq!(detect_mode("nothing here"), None);
    }

    #[test]
    fn test_tenure_units() {
        assert_eq!(extract_tenure("a 6 month engagement"), Some(6));
        assert_eq!(extract_tenure("a 2 year engagement"), Some(24));
        assert_eq!(extract_tenure("a 10 week sprint"), Some(2));
        assert_eq!(extract_tenure("a 2 week sprint"), Some(1));
        assert_eq!(extract_tenure("no numbers"), None);
    }

    #[test]
    fn test_experience_range_and_minimum() {
        assert_eq!(extract_experience("3-5 years of rust"), Some((3.0, 5.0)));
        assert_eq!(extract_experience("2.5 to 4 yrs"), Some((2.5, 4.0)));
        assert_eq!(
            extract_experience("at least 4 years of experience"),
            Some((4.0, 6.0))
        );
        assert_eq!(
            extract_experience("experience: 7 years in backend"),
            Some((7.0, 9.0))
        );
        assert_eq!(extract_experience("no requirement"), None);
    }

    #[test]
    fn test_open_positions() {
        assert_eq!(extract_open_positions("we have 3 openings"), Some(3));
        assert_eq!(extract_open_positions("2 vacancies"), Some(2));
        assert_eq!(
            extract_open_positions("looking for 4 candidates"),
            Some(4)
        );
        assert_eq!(extract_open_positions("none"), None);
    }

    #[test]
    fn test_oversized_numbers_fall_through() {
        assert_eq!(
            extract_open_positions("99999999999999999999 positions, 5 slots"),
            Some(5)
        );
    }

    #[test]
    fn test_keywords_deduplicated_in_order() {
        let keywords = extract_keywords("agile scrum teams, rest api, jwt and oauth");
        assert_eq!(keywords, vec!["agile", "scrum", "rest", "api", "oauth", "jwt"]);
    }
}
