//! Application settings operations
//!
//! The settings namespace holds exactly one record under a fixed key.
//! Reads overlay defaults for unset fields; updates are a shallow
//! merge over the current record.

use rusqlite::{params, OptionalExtension};

use super::Database;
use crate::error::Result;
use crate::models::{AppSettings, SettingsUpdate};

/// The single key in the settings namespace
pub const SETTINGS_KEY: &str = "user-settings";

impl Database {
    /// Read settings, lazily defaulting when nothing has been stored
    pub fn get_settings(&self) -> Result<AppSettings> {
        let conn = self.conn()?;
        let data: Option<String> = conn
            .query_row(
                "SELECT data FROM settings WHERE key = ?",
                params![SETTINGS_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match data {
            // Fields missing from the stored blob fall back via serde defaults
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(AppSettings::default()),
        }
    }

    /// Shallow-merge a partial update over current settings, persist,
    /// and return the merged record
    pub fn update_settings(&self, update: &SettingsUpdate) -> Result<AppSettings> {
        let mut settings = self.get_settings()?;

        if let Some(currency) = update.currency {
            settings.currency = currency;
        }
        if let Some(ref key) = update.llm_api_key {
            settings.llm_api_key = Some(key.clone());
        }
        if let Some(provider) = update.llm_provider {
            settings.llm_provider = provider;
        }
        if let Some(theme) = update.theme {
            settings.theme = theme;
        }

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO settings (key, data) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET data = ?2",
            params![SETTINGS_KEY, serde_json::to_string(&settings)?],
        )?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, LlmProvider, Theme};

    #[test]
    fn test_defaults_before_any_update() {
        let db = Database::in_memory().unwrap();
        let settings = db.get_settings().unwrap();
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.currency, Currency::Inr);
        assert_eq!(settings.llm_provider, LlmProvider::Groq);
        assert_eq!(settings.theme, Theme::System);
    }

    #[test]
    fn test_partial_update_preserves_other_fields() {
        let db = Database::in_memory().unwrap();

        db.update_settings(&SettingsUpdate {
            llm_api_key: Some("sk-test".into()),
            ..Default::default()
        })
        .unwrap();

        let merged = db
            .update_settings(&SettingsUpdate {
                currency: Some(Currency::Usd),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(merged.currency, Currency::Usd);
        assert_eq!(merged.llm_api_key.as_deref(), Some("sk-test"));
        assert_eq!(merged.theme, Theme::System);

        // And the merge is what was persisted
        let reread = db.get_settings().unwrap();
        assert_eq!(reread, merged);
    }

    #[test]
    fn test_update_returns_merged_record() {
        let db = Database::in_memory().unwrap();
        let merged = db
            .update_settings(&SettingsUpdate {
                theme: Some(Theme::Dark),
                llm_provider: Some(LlmProvider::Local),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(merged.theme, Theme::Dark);
        assert_eq!(merged.llm_provider, LlmProvider::Local);
        assert_eq!(merged.currency, Currency::Inr);
    }
}
