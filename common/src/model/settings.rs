//! Workspace export settings.
//!
//! The browser keeps these four strings in local storage. The UI reads them
//! once into a [`NotionSettings`] value and hands that value to the export
//! call, so nothing downstream touches storage.

use crate::notion::DEFAULT_TITLE_PROPERTY;

pub const API_KEY_KEY: &str = "notion_api_key";
pub const DATABASE_ID_KEY: &str = "notion_database_id";
pub const DATA_SOURCE_ID_KEY: &str = "notion_data_source_id";
pub const TITLE_PROPERTY_KEY: &str = "notion_title_property";

/// Shown when an export is attempted without the required settings.
pub const INCOMPLETE_MESSAGE: &str =
    "노션 설정에서 API Key와 (Database ID 또는 Data source ID) 중 하나를 입력해 주세요.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotionSettings {
    pub api_key: String,
    pub database_id: String,
    pub data_source_id: String,
    pub title_property: String,
}

impl Default for NotionSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            database_id: String::new(),
            data_source_id: String::new(),
            title_property: DEFAULT_TITLE_PROPERTY.to_string(),
        }
    }
}

impl NotionSettings {
    /// Builds settings from stored values; absent entries read as blank and a
    /// blank title property becomes the default.
    pub fn from_stored(
        api_key: Option<String>,
        database_id: Option<String>,
        data_source_id: Option<String>,
        title_property: Option<String>,
    ) -> Self {
        Self {
            api_key: api_key.unwrap_or_default(),
            database_id: database_id.unwrap_or_default(),
            data_source_id: data_source_id.unwrap_or_default(),
            title_property: title_property
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TITLE_PROPERTY.to_string()),
        }
    }

    /// Trimmed copy, ready to be written back to storage.
    pub fn normalized(&self) -> Self {
        let title = self.title_property.trim();
        Self {
            api_key: self.api_key.trim().to_string(),
            database_id: self.database_id.trim().to_string(),
            data_source_id: self.data_source_id.trim().to_string(),
            title_property: if title.is_empty() {
                DEFAULT_TITLE_PROPERTY.to_string()
            } else {
                title.to_string()
            },
        }
    }

    /// `(key, value)` pairs in storage order.
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            (API_KEY_KEY, self.api_key.as_str()),
            (DATABASE_ID_KEY, self.database_id.as_str()),
            (DATA_SOURCE_ID_KEY, self.data_source_id.as_str()),
            (TITLE_PROPERTY_KEY, self.title_property.as_str()),
        ]
    }

    pub fn has_database_id(&self) -> bool {
        !self.database_id.trim().is_empty()
    }

    pub fn has_data_source_id(&self) -> bool {
        !self.data_source_id.trim().is_empty()
    }

    /// An export needs a key and at least one target identifier.
    pub fn is_ready(&self) -> bool {
        !self.api_key.trim().is_empty() && (self.has_database_id() || self.has_data_source_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_property_defaults_to_name() {
        let settings = NotionSettings::from_stored(Some("k".into()), None, None, Some("  ".into()));
        assert_eq!(settings.title_property, "Name");
        assert_eq!(settings.database_id, "");
    }

    #[test]
    fn normalized_trims_every_entry() {
        let settings = NotionSettings {
            api_key: " secret_x ".into(),
            database_id: "\tabc\n".into(),
            data_source_id: String::new(),
            title_property: " 제목 ".into(),
        }
        .normalized();
        assert_eq!(
            settings.entries(),
            [
                (API_KEY_KEY, "secret_x"),
                (DATABASE_ID_KEY, "abc"),
                (DATA_SOURCE_ID_KEY, ""),
                (TITLE_PROPERTY_KEY, "제목"),
            ]
        );
    }

    #[test]
    fn readiness_needs_key_and_one_identifier() {
        let mut settings = NotionSettings {
            api_key: "k".into(),
            ..Default::default()
        };
        assert!(!settings.is_ready());
        settings.data_source_id = "ds".into();
        assert!(settings.is_ready());
        settings.api_key = " ".into();
        assert!(!settings.is_ready());
    }
}
