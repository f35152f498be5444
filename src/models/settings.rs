// file: src/models/settings.rs
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Setting {
    pub key: String,
    pub value: String,
}

/// Language used for month names and relative-day labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            other => Err(format!("Unknown locale: {}", other)),
        }
    }
}

/// First column of a rendered week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeekStart::Monday => "monday",
            WeekStart::Sunday => "sunday",
        }
    }

    /// Column (0-6) a given weekday occupies in a week starting on `self`.
    pub fn column_of(&self, weekday: Weekday) -> usize {
        match self {
            WeekStart::Monday => weekday.num_days_from_monday() as usize,
            WeekStart::Sunday => weekday.num_days_from_sunday() as usize,
        }
    }
}

impl FromStr for WeekStart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" => Ok(WeekStart::Monday),
            "sunday" => Ok(WeekStart::Sunday),
            other => Err(format!("Unknown week start: {}", other)),
        }
    }
}

/// Display preferences stored alongside the calendar data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub display_year: i32,
    pub upcoming_limit: usize,
    pub top_categories_limit: usize,
    pub week_start: WeekStart,
    pub locale: Locale,
    pub default_category_color: String,
    pub default_type_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_year: 2026,
            upcoming_limit: 5,
            top_categories_limit: 5,
            week_start: WeekStart::Monday,
            locale: Locale::En,
            default_category_color: "#DC2626".to_string(),
            default_type_color: "#6B7280".to_string(),
        }
    }
}
