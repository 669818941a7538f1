//! Shared resources ("insights") and the optimistic like counter.
//!
//! A like is a two-phase operation: [`LikeToggle::apply`] changes the local
//! list right away and returns what it changed, the caller persists
//! [`LikeToggle::update`], and on failure [`LikeToggle::rollback`] puts the
//! previous count and flag back. `liked_by_me` never leaves the process.

use serde::{Deserialize, Deserializer, Serialize};

use super::de::{id_string, lenient_count};
use super::null_as_empty;
use crate::form::{require, ValidationError};

/// Author recorded for every shared insight; the club has no accounts.
pub const DEFAULT_AUTHOR: &str = "익명의 분석가";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    #[default]
    Article,
    Video,
    Resource,
    Other,
}

impl InsightCategory {
    pub const ALL: [InsightCategory; 4] = [
        InsightCategory::Article,
        InsightCategory::Video,
        InsightCategory::Resource,
        InsightCategory::Other,
    ];

    /// Unknown values fall into `Other`.
    pub fn parse(value: &str) -> Self {
        match value {
            "article" => InsightCategory::Article,
            "video" => InsightCategory::Video,
            "resource" => InsightCategory::Resource,
            _ => InsightCategory::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InsightCategory::Article => "article",
            InsightCategory::Video => "video",
            InsightCategory::Resource => "resource",
            InsightCategory::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InsightCategory::Article => "아티클",
            InsightCategory::Video => "영상",
            InsightCategory::Resource => "도구",
            InsightCategory::Other => "기타",
        }
    }
}

impl<'de> Deserialize<'de> for InsightCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.as_deref().map_or(InsightCategory::Other, Self::parse))
    }
}

/// Filter chips above the insight grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsightFilter {
    #[default]
    All,
    Category(InsightCategory),
}

impl InsightFilter {
    pub fn chips() -> impl Iterator<Item = InsightFilter> {
        std::iter::once(InsightFilter::All)
            .chain(InsightCategory::ALL.into_iter().map(InsightFilter::Category))
    }

    pub fn label(self) -> &'static str {
        match self {
            InsightFilter::All => "전체",
            InsightFilter::Category(category) => category.label(),
        }
    }

    pub fn matches(self, entry: &InsightEntry) -> bool {
        match self {
            InsightFilter::All => true,
            InsightFilter::Category(category) => entry.category == category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InsightEntry {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default = "default_category")]
    pub category: InsightCategory,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default = "default_author", deserialize_with = "author_or_default")]
    pub author: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub likes: i64,
    #[serde(skip)]
    pub liked_by_me: bool,
}

impl InsightEntry {
    pub const COLUMNS: &'static str = "id,title,url,category,description,author,likes";
}

fn default_category() -> InsightCategory {
    InsightCategory::Other
}

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

fn author_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_author))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewInsight {
    pub title: String,
    pub url: String,
    pub category: InsightCategory,
    pub description: String,
    pub author: String,
    pub likes: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsightForm {
    pub title: String,
    pub url: String,
    pub category: InsightCategory,
    pub description: String,
}

impl InsightForm {
    pub fn submit(&self) -> Result<NewInsight, ValidationError> {
        require(&self.title, "자료 제목")?;
        Ok(NewInsight {
            title: self.title.trim().to_string(),
            url: self.url.trim().to_string(),
            category: self.category,
            description: self.description.trim().to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            likes: 0,
        })
    }
}

/// Body of the `update` call that persists a like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LikesUpdate {
    pub likes: i64,
}

/// Compensation record for one speculative like toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeToggle {
    pub id: String,
    pub previous_likes: i64,
    pub previous_liked: bool,
    pub likes: i64,
}

impl LikeToggle {
    /// Flips `liked_by_me` on the entry with `id` and moves its count by one.
    /// Returns `None` when no entry has that id.
    pub fn apply(entries: &mut [InsightEntry], id: &str) -> Option<LikeToggle> {
        let entry = entries.iter_mut().find(|e| e.id == id)?;
        let toggle = LikeToggle {
            id: entry.id.clone(),
            previous_likes: entry.likes,
            previous_liked: entry.liked_by_me,
            likes: if entry.liked_by_me {
                entry.likes - 1
            } else {
                entry.likes + 1
            },
        };
        entry.likes = toggle.likes;
        entry.liked_by_me = !toggle.previous_liked;
        Some(toggle)
    }

    pub fn update(&self) -> LikesUpdate {
        LikesUpdate { likes: self.likes }
    }

    /// Restores the count and flag captured by `apply`. A no-op when the entry
    /// has since been removed.
    pub fn rollback(&self, entries: &mut [InsightEntry]) {
        if let Some(entry) = entries.iter_mut().find(|e| e.id == self.id) {
            entry.likes = self.previous_likes;
            entry.liked_by_me = self.previous_liked;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(id: &str, likes: i64) -> InsightEntry {
        InsightEntry {
            id: id.into(),
            title: "t".into(),
            url: String::new(),
            category: InsightCategory::Video,
            description: String::new(),
            author: DEFAULT_AUTHOR.into(),
            likes,
            liked_by_me: false,
        }
    }

    #[test]
    fn rows_fall_back_to_defaults() {
        let parsed: InsightEntry = serde_json::from_value(json!({
            "id": "a",
            "title": "좋은 글",
            "category": "podcast",
            "author": null,
            "likes": null
        }))
        .unwrap();
        assert_eq!(parsed.category, InsightCategory::Other);
        assert_eq!(parsed.author, DEFAULT_AUTHOR);
        assert_eq!(parsed.likes, 0);
        assert!(!parsed.liked_by_me);
    }

    #[test]
    fn empty_author_is_kept() {
        let parsed: InsightEntry =
            serde_json::from_value(json!({ "id": "a", "author": "", "likes": "3" })).unwrap();
        assert_eq!(parsed.author, "");
        assert_eq!(parsed.likes, 3);
    }

    #[test]
    fn like_then_unlike() {
        let mut entries = vec![entry("a", 2), entry("b", 5)];

        let first = LikeToggle::apply(&mut entries, "b").unwrap();
        assert_eq!(first.update(), LikesUpdate { likes: 6 });
        assert_eq!((entries[1].likes, entries[1].liked_by_me), (6, true));

        let second = LikeToggle::apply(&mut entries, "b").unwrap();
        assert_eq!(second.likes, 5);
        assert_eq!((entries[1].likes, entries[1].liked_by_me), (5, false));
        assert_eq!(entries[0].likes, 2);
    }

    #[test]
    fn rollback_restores_previous_state() {
        let mut entries = vec![entry("a", 0)];
        let toggle = LikeToggle::apply(&mut entries, "a").unwrap();
        assert_eq!(entries[0].likes, 1);

        toggle.rollback(&mut entries);
        assert_eq!((entries[0].likes, entries[0].liked_by_me), (0, false));
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut entries = vec![entry("a", 1)];
        assert!(LikeToggle::apply(&mut entries, "zzz").is_none());
        assert_eq!(entries[0].likes, 1);
    }

    #[test]
    fn filter_by_category() {
        let video = entry("a", 0);
        assert!(InsightFilter::All.matches(&video));
        assert!(InsightFilter::Category(InsightCategory::Video).matches(&video));
        assert!(!InsightFilter::Category(InsightCategory::Article).matches(&video));
        assert_eq!(InsightFilter::chips().count(), 5);
    }

    #[test]
    fn new_insights_start_anonymous_with_zero_likes() {
        let form = InsightForm {
            title: " 데이터 윤리 강연 ".into(),
            category: InsightCategory::Video,
            ..Default::default()
        };
        let row = serde_json::to_value(form.submit().unwrap()).unwrap();
        assert_eq!(row["title"], "데이터 윤리 강연");
        assert_eq!(row["category"], "video");
        assert_eq!(row["author"], DEFAULT_AUTHOR);
        assert_eq!(row["likes"], 0);
    }
}
