//! Biometric preference models.
//!
//! Preferences are transient form state: created with defaults, mutated by
//! the user, never persisted. Weight, height, and age are kept as the raw
//! strings the user typed; validation checks presence only, so a non-numeric
//! value passes and is forwarded to the prompt as-is.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

/// Weight goal for the generated plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Gain,
    Loss,
    #[default]
    Maintain,
}

impl FromStr for Goal {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gain" => Ok(Goal::Gain),
            "loss" => Ok(Goal::Loss),
            "maintain" => Ok(Goal::Maintain),
            other => Err(ValidationError::InvalidInput(format!(
                "unknown goal '{other}', expected gain, loss, or maintain"
            ))),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Goal::Gain => "gain",
            Goal::Loss => "loss",
            Goal::Maintain => "maintain",
        };
        write!(f, "{label}")
    }
}

/// Activity level, five steps from sedentary to very active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl FromStr for ActivityLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very_active" => Ok(ActivityLevel::VeryActive),
            other => Err(ValidationError::InvalidInput(format!(
                "unknown activity level '{other}'"
            ))),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        };
        write!(f, "{label}")
    }
}

/// User-entered biometric preferences for a plan request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub goal: Goal,
    pub weight: String,
    pub height: String,
    pub age: String,
    pub activity_level: ActivityLevel,
    pub dietary_restrictions: String,
}

impl Default for UserPreferences {
    fn default() -> Self {
        UserPreferences {
            goal: Goal::Maintain,
            weight: String::new(),
            height: String::new(),
            age: String::new(),
            activity_level: ActivityLevel::Moderate,
            dietary_restrictions: String::new(),
        }
    }
}

impl UserPreferences {
    /// Presence check over the required fields. Reports the first missing
    /// field; performs no numeric or range validation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("weight", &self.weight),
            ("height", &self.height),
            ("age", &self.age),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(field.to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> UserPreferences {
        UserPreferences {
            weight: "70".to_string(),
            height: "175".to_string(),
            age: "30".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_accepts_filled_preferences() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_each_missing_required_field() {
        for field in ["weight", "height", "age"] {
            let mut prefs = filled();
            match field {
                "weight" => prefs.weight.clear(),
                "height" => prefs.height.clear(),
                _ => prefs.age.clear(),
            }
            let err = prefs.validate().unwrap_err();
            assert!(err.to_string().contains(field), "expected {field} in {err}");
        }
    }

    #[test]
    fn test_validate_passes_non_numeric_strings() {
        let mut prefs = filled();
        prefs.weight = "seventy".to_string();
        assert!(prefs.validate().is_ok());
    }

    #[test]
    fn test_goal_round_trip() {
        for s in ["gain", "loss", "maintain"] {
            assert_eq!(Goal::from_str(s).unwrap().to_string(), s);
        }
        assert!(Goal::from_str("bulk").is_err());
    }

    #[test]
    fn test_activity_level_round_trip() {
        for s in ["sedentary", "light", "moderate", "active", "very_active"] {
            assert_eq!(ActivityLevel::from_str(s).unwrap().to_string(), s);
        }
        assert!(ActivityLevel::from_str("extreme").is_err());
    }
}
