// src/types/reference.rs
//! Coded reference data shared by records, the scanner and the reference endpoints

use serde::{Deserialize, Serialize};
use std::fmt;

/// An enum persisted and exchanged as a small integer code
pub trait ReferenceCode: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn code(self) -> i64;
    fn name(self) -> &'static str;

    fn from_code(code: i64) -> Option<Self> {
        Self::ALL.iter().copied().find(|value| value.code() == code)
    }
}

macro_rules! reference_code {
    ($ty:ident, $label:literal, [$($variant:ident = $code:literal => $name:literal),+ $(,)?]) => {
        impl ReferenceCode for $ty {
            const ALL: &'static [Self] = &[$($ty::$variant),+];

            fn code(self) -> i64 {
                match self {
                    $($ty::$variant => $code),+
                }
            }

            fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl TryFrom<i64> for $ty {
            type Error = String;

            fn try_from(code: i64) -> Result<Self, Self::Error> {
                Self::from_code(code).ok_or_else(|| format!("unknown {} code: {}", $label, code))
            }
        }

        impl From<$ty> for i64 {
            fn from(value: $ty) -> i64 {
                value.code()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum SkillsetCategory {
    Frontend,
    Backend,
    FullStack,
    DevOps,
    DataScience,
    Mobile,
}

reference_code!(SkillsetCategory, "skillset category", [
    Frontend = 1 => "Frontend Development",
    Backend = 2 => "Backend Development",
    FullStack = 3 => "Full Stack Development",
    DevOps = 4 => "DevOps",
    DataScience = 5 => "Data Science",
    Mobile = 6 => "Mobile Development",
]);

impl SkillsetCategory {
    pub fn description(self) -> &'static str {
        match self {
            SkillsetCategory::Frontend => "Frontend technologies and frameworks",
            SkillsetCategory::Backend => "Backend technologies and frameworks",
            SkillsetCategory::FullStack => "Both frontend and backend technologies",
            SkillsetCategory::DevOps => "DevOps and infrastructure technologies",
            SkillsetCategory::DataScience => "Data science and AI technologies",
            SkillsetCategory::Mobile => "Mobile app development technologies",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum EngagementMode {
    Remote,
    Onsite,
    Hybrid,
    Contract,
    PartTime,
}

reference_code!(EngagementMode, "engagement mode", [
    Remote = 1 => "Remote",
    Onsite = 2 => "Onsite",
    Hybrid = 3 => "Hybrid",
    Contract = 4 => "Contract",
    PartTime = 5 => "Part-time",
]);

impl EngagementMode {
    pub fn description(self) -> &'static str {
        match self {
            EngagementMode::Remote => "Work from anywhere",
            EngagementMode::Onsite => "Work at office location",
            EngagementMode::Hybrid => "Combination of remote and onsite work",
            EngagementMode::Contract => "Contract-based work arrangement",
            EngagementMode::PartTime => "Part-time work arrangement",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum JdStatus {
    #[default]
    Active,
    Draft,
    Closed,
}

reference_code!(JdStatus, "status", [
    Active = 1 => "Active",
    Draft = 2 => "Draft",
    Closed = 3 => "Closed",
]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "INR")]
    Inr,
}

impl Currency {
    pub const ALL: &'static [Currency] = &[Currency::Usd, Currency::Inr];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Inr => "INR",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Currency::Usd => "US Dollar",
            Currency::Inr => "Indian Rupee",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Inr => "₹",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(code.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevenuePotential {
    High,
    Medium,
    Low,
}

impl RevenuePotential {
    const HIGH_THRESHOLD: f64 = 500_000.0;
    const MEDIUM_THRESHOLD: f64 = 200_000.0;

    /// Bucket the total engagement value (max budget times open positions)
    pub fn estimate(budget_max: Option<f64>, open_positions: Option<i64>) -> Option<Self> {
        let budget_max = budget_max.filter(|b| *b > 0.0)?;
        let open_positions = open_positions.filter(|p| *p > 0)?;

        let total = budget_max * open_positions as f64;
        Some(if total > Self::HIGH_THRESHOLD {
            RevenuePotential::High
        } else if total > Self::MEDIUM_THRESHOLD {
            RevenuePotential::Medium
        } else {
            RevenuePotential::Low
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RevenuePotential::High => "High",
            RevenuePotential::Medium => "Medium",
            RevenuePotential::Low => "Low",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "high" => Some(RevenuePotential::High),
            "medium" => Some(RevenuePotential::Medium),
            "low" => Some(RevenuePotential::Low),
            _ => None,
        }
    }
}

// ===== Reference endpoint views =====

#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub category_id: i64,
    pub category_name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModeInfo {
    pub mode_id: i64,
    pub mode_name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusInfo {
    pub status_id: i64,
    pub status_name: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrencyInfo {
    pub currency_code: &'static str,
    pub currency_name: &'static str,
    pub symbol: &'static str,
}

pub fn categories() -> Vec<CategoryInfo> {
    SkillsetCategory::ALL
        .iter()
        .map(|c| CategoryInfo {
            category_id: c.code(),
            category_name: c.name(),
            description: c.description(),
        })
        .collect()
}

pub fn modes() -> Vec<ModeInfo> {
    EngagementMode::ALL
        .iter()
        .map(|m| ModeInfo {
            mode_id: m.code(),
            mode_name: m.name(),
            description: m.description(),
        })
        .collect()
}

pub fn statuses() -> Vec<StatusInfo> {
    JdStatus::ALL
        .iter()
        .map(|s| StatusInfo {
            status_id: s.code(),
            status_name: s.name(),
        })
        .collect()
}

pub fn currencies() -> Vec<CurrencyInfo> {
    Currency::ALL
        .iter()
        .map(|c| CurrencyInfo {
            currency_code: c.code(),
            currency_name: c.name(),
            symbol: c.symbol(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_lookup() {
        assert_eq!(SkillsetCategory::from_code(3), Some(SkillsetCategory::FullStack));
        assert_eq!(EngagementMode::from_code(5), Some(EngagementMode::PartTime));
        assert_eq!(JdStatus::from_code(2), Some(JdStatus::Draft));
        assert_eq!(EngagementMode::from_code(9), None);
        assert!(SkillsetCategory::try_from(0).is_err());
    }

    #[test]
    fn test_coded_enums_serialize_as_integers() {
        let json = serde_json::to_string(&EngagementMode::Hybrid).unwrap();
        assert_eq!(json, "3");
        let mode: EngagementMode = serde_json::from_str("2").unwrap();
        assert_eq!(mode, EngagementMode::Onsite);
        assert!(serde_json::from_str::<JdStatus>("7").is_err());
    }

    #[test]
    fn test_currency_lookup() {
        assert_eq!(Currency::from_code("inr"), Some(Currency::Inr));
        assert_eq!(Currency::from_code("EUR"), None);
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"USD\"");
    }

    #[test]
    fn test_revenue_potential_buckets() {
        assert_eq!(
            RevenuePotential::estimate(Some(120_000.0), Some(5)),
            Some(RevenuePotential::High)
        );
        assert_eq!(
            RevenuePotential::estimate(Some(100_000.0), Some(3)),
            Some(RevenuePotential::Medium)
        );
        assert_eq!(
            RevenuePotential::estimate(Some(100_000.0), Some(2)),
            Some(RevenuePotential::Low)
        );
        assert_eq!(RevenuePotential::estimate(None, Some(2)), None);
        assert_eq!(RevenuePotential::estimate(Some(90_000.0), None), None);
    }

    #[test]
    fn test_reference_lists_are_complete() {
        assert_eq!(categories().len(), 6);
        assert_eq!(modes().len(), 5);
        assert_eq!(statuses().len(), 3);
        assert_eq!(currencies()[1].symbol, "₹");
    }
}
