// file: src/database/settings.rs
use anyhow::Result;
use sqlx::SqlitePool;

use crate::models::{Setting, Settings};

pub async fn get(pool: &SqlitePool) -> Result<Settings> {
    let rows = sqlx::query_as::<_, Setting>("SELECT key, value FROM settings")
        .fetch_all(pool)
        .await?;

    Ok(apply(rows))
}

/// Fold stored key/value rows over the defaults. Unknown keys and
/// unparsable values leave the default in place.
pub fn apply(rows: Vec<Setting>) -> Settings {
    let mut settings = Settings::default();
    for setting in rows {
        match setting.key.as_str() {
            "display_year" => {
                if let Ok(year) = setting.value.parse() {
                    settings.display_year = year;
                }
            }
            "upcoming_limit" => {
                if let Ok(limit) = setting.value.parse() {
                    settings.upcoming_limit = limit;
                }
            }
            "top_categories_limit" => {
                if let Ok(limit) = setting.value.parse() {
                    settings.top_categories_limit = limit;
                }
            }
            "week_start" => {
                if let Ok(week_start) = setting.value.parse() {
                    settings.week_start = week_start;
                }
            }
            "locale" => {
                if let Ok(locale) = setting.value.parse() {
                    settings.locale = locale;
                }
            }
            "default_category_color" => settings.default_category_color = setting.value,
            "default_type_color" => settings.default_type_color = setting.value,
            other => log::debug!("[Database] Ignoring unknown setting '{}'", other),
        }
    }
    settings
}

pub async fn update(pool: &SqlitePool, settings: &Settings) -> Result<()> {
    let display_year = settings.display_year.to_string();
    let upcoming_limit = settings.upcoming_limit.to_string();
    let top_categories_limit = settings.top_categories_limit.to_string();

    let updates = vec![
        ("display_year", display_year.as_str()),
        ("upcoming_limit", upcoming_limit.as_str()),
        ("top_categories_limit", top_categories_limit.as_str()),
        ("week_start", settings.week_start.as_str()),
        ("locale", settings.locale.as_str()),
        ("default_category_color", settings.default_category_color.as_str()),
        ("default_type_color", settings.default_type_color.as_str()),
    ];

    for (key, value) in updates {
        sqlx::query("INSERT INTO settings (key, value) VALUES (?, ?) ON CONFLICT(key) DO UPDATE SET value = excluded.value")
            .bind(key)
            .bind(value)
            .execute(pool)
            .await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Locale, WeekStart};

    fn row(key: &str, value: &str) -> Setting {
        Setting {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_apply_overrides_defaults() {
        let settings = apply(vec![
            row("display_year", "2028"),
            row("locale", "es"),
            row("week_start", "sunday"),
            row("upcoming_limit", "8"),
        ]);
        assert_eq!(settings.display_year, 2028);
        assert_eq!(settings.locale, Locale::Es);
        assert_eq!(settings.week_start, WeekStart::Sunday);
        assert_eq!(settings.upcoming_limit, 8);
        assert_eq!(settings.top_categories_limit, 5);
    }

    #[test]
    fn test_apply_ignores_bad_values() {
        let settings = apply(vec![
            row("display_year", "next year"),
            row("upcoming_limit", "-3"),
            row("locale", "klingon"),
            row("theme", "dark"),
        ]);
        assert_eq!(settings, Settings::default());
    }
}
