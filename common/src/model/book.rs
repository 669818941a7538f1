use serde::{Deserialize, Serialize};

use super::archive::join_present;
use super::de::id_string;
use super::null_as_empty;
use crate::form::{require, ValidationError};
use crate::store::StoreError;

/// Shown instead of the raw store message when the `books` table is absent.
pub const MISSING_TABLE_GUIDANCE: &str = "도서 목록을 쓰려면 Supabase에 'books' 테이블이 필요해요. Supabase 대시보드 → SQL Editor에서 SUPABASE_SCHEMA.md 3번 '함께 읽은 도서 목록' SQL을 실행해 주세요.";

/// A book the club has read together.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookEntry {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub publisher: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
}

impl BookEntry {
    pub const COLUMNS: &'static str = "id,title,author,publisher,url";

    pub fn byline(&self) -> String {
        join_present(&[&self.author, &self.publisher])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub url: String,
}

impl BookForm {
    pub fn submit(&self) -> Result<NewBook, ValidationError> {
        require(&self.title, "도서 제목")?;
        Ok(NewBook {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            publisher: self.publisher.trim().to_string(),
            url: self.url.trim().to_string(),
        })
    }
}

/// Text shown in the books panel for a failed store call.
pub fn describe_store_error(error: &StoreError, fallback: &str) -> String {
    if error.is_missing_table() {
        MISSING_TABLE_GUIDANCE.to_string()
    } else {
        error.message_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_required() {
        let form = BookForm {
            author: "한스 로슬링".into(),
            ..Default::default()
        };
        assert_eq!(
            form.submit(),
            Err(ValidationError::Required { field: "도서 제목" })
        );
    }

    #[test]
    fn byline_skips_blank_publisher() {
        let book = BookEntry {
            id: "1".into(),
            title: "팩트풀니스".into(),
            author: "한스 로슬링".into(),
            publisher: String::new(),
            url: String::new(),
        };
        assert_eq!(book.byline(), "한스 로슬링");
    }

    #[test]
    fn missing_table_is_replaced_with_setup_guidance() {
        let error = StoreError::new("Could not find the table 'public.books' in the schema cache");
        assert_eq!(describe_store_error(&error, "실패"), MISSING_TABLE_GUIDANCE);

        let error = StoreError::new("permission denied for table books");
        assert_eq!(
            describe_store_error(&error, "실패"),
            "permission denied for table books"
        );
        assert_eq!(describe_store_error(&StoreError::new(""), "실패"), "실패");
    }
}
