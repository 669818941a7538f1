//! Local-storage persistence of the Notion export settings.
//!
//! Storage is only touched here. Callers get and give a `NotionSettings`
//! value.

use common::model::settings::{
    NotionSettings, API_KEY_KEY, DATABASE_ID_KEY, DATA_SOURCE_ID_KEY, TITLE_PROPERTY_KEY,
};
use web_sys::Storage;

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Reads the stored settings; anything missing reads as blank.
pub fn load() -> NotionSettings {
    let Some(storage) = storage() else {
        return NotionSettings::default();
    };
    let get = |key: &str| storage.get_item(key).ok().flatten();
    NotionSettings::from_stored(
        get(API_KEY_KEY),
        get(DATABASE_ID_KEY),
        get(DATA_SOURCE_ID_KEY),
        get(TITLE_PROPERTY_KEY),
    )
}

/// Writes `settings` trimmed and returns what was stored.
pub fn save(settings: &NotionSettings) -> Result<NotionSettings, String> {
    let storage = storage().ok_or_else(|| "브라우저 저장소를 사용할 수 없습니다.".to_string())?;
    let normalized = settings.normalized();
    for (key, value) in normalized.entries() {
        storage
            .set_item(key, value)
            .map_err(|_| format!("{key} 값을 저장하지 못했습니다."))?;
    }
    Ok(normalized)
}
