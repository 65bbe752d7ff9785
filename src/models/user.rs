//! User model

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use crate::utils::errors::AssistantError;

/// Reply keyboard label for the metric unit system
pub const METRIC_LABEL: &str = "Metric (Celsius)";
/// Reply keyboard label for the imperial unit system
pub const IMPERIAL_LABEL: &str = "Imperial (Fahrenheit)";

/// Measurement convention used when reporting weather
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Value stored in the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// Keyboard label offered during the dialogue
    pub fn label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => METRIC_LABEL,
            UnitSystem::Imperial => IMPERIAL_LABEL,
        }
    }

    /// Match an exact keyboard label
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            METRIC_LABEL => Some(UnitSystem::Metric),
            IMPERIAL_LABEL => Some(UnitSystem::Imperial),
            _ => None,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = AssistantError;

    /// Accepts the stored names and their single-letter short forms
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metric" | "m" => Ok(UnitSystem::Metric),
            "imperial" | "i" => Ok(UnitSystem::Imperial),
            other => Err(AssistantError::InvalidInput(format!("Unknown unit system: {}", other))),
        }
    }
}

/// Bot user, keyed by the Telegram user id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub language: String,
    pub units: UnitSystem,
    pub is_active: bool,
    pub joined_at: DateTime<Utc>,
}

impl User {
    /// New active user with default preferences
    pub fn new(id: i64, name: impl Into<String>, language: Option<&str>) -> Self {
        Self {
            id,
            name: name.into(),
            city: None,
            country: None,
            phone: None,
            language: language.filter(|l| !l.is_empty()).unwrap_or("en").to_string(),
            units: UnitSystem::Metric,
            is_active: true,
            joined_at: Utc::now(),
        }
    }

    /// Whether a non-blank city and country have been saved for weather lookups
    pub fn has_location(&self) -> bool {
        let filled = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());
        filled(&self.city) && filled(&self.country)
    }
}

/// Raw `users` row; converted into [`User`] so the unit system is checked at the boundary
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub language: String,
    pub units: String,
    pub is_active: bool,
    pub joined_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = AssistantError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            name: row.name,
            city: row.city,
            country: row.country,
            phone: row.phone,
            language: row.language,
            units: row.units.parse()?,
            is_active: row.is_active,
            joined_at: row.joined_at,
        })
    }
}
