//! Archived quotes and interview answers.
//!
//! Both live in the `archives` table and are told apart by its `type` column.
//! Rows are created and deleted, never edited in place.

use serde::{Deserialize, Serialize};

use super::de::id_string;
use super::null_as_empty;
use crate::form::{require_any, ValidationError};
use crate::notion::record::{ExportRecord, InterviewRecord, QuoteRecord};

/// Value of the `type` column in the `archives` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveKind {
    Quote,
    Interview,
}

impl ArchiveKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ArchiveKind::Quote => "quote",
            ArchiveKind::Interview => "interview",
        }
    }
}

/// A literary excerpt with the member's reflection on it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuoteEntry {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub book_title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub quote: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub thought: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
}

impl QuoteEntry {
    pub const COLUMNS: &'static str = "id,book_title,quote,thought,author";

    /// "book · author", skipping the blank parts.
    pub fn byline(&self) -> String {
        join_present(&[&self.book_title, &self.author])
    }

    pub fn export_record(&self) -> ExportRecord {
        ExportRecord::Quote(QuoteRecord {
            book_title: self.book_title.clone(),
            quote: self.quote.clone(),
            thoughts: self.thought.clone(),
            author: self.author.clone(),
        })
    }
}

/// A mock-interview question answered with something learned from a book.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InterviewEntry {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub keyword: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub answer: String,
}

impl InterviewEntry {
    pub const COLUMNS: &'static str = "id,keyword,question,answer";

    pub fn export_record(&self) -> ExportRecord {
        ExportRecord::Interview(InterviewRecord {
            keyword: self.keyword.clone(),
            question: self.question.clone(),
            answer: self.answer.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewQuote {
    #[serde(rename = "type")]
    pub kind: ArchiveKind,
    pub book_title: String,
    pub quote: String,
    pub thought: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewInterview {
    #[serde(rename = "type")]
    pub kind: ArchiveKind,
    pub keyword: String,
    pub question: String,
    pub answer: String,
}

/// Raw input of the quote form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteForm {
    pub book_title: String,
    pub quote: String,
    pub thought: String,
    pub author: String,
}

impl QuoteForm {
    /// Trims every field; the excerpt or the reflection must be present.
    pub fn submit(&self) -> Result<NewQuote, ValidationError> {
        require_any(&[&self.quote, &self.thought], "인상 깊은 문장, 나의 생각")?;
        Ok(NewQuote {
            kind: ArchiveKind::Quote,
            book_title: self.book_title.trim().to_string(),
            quote: self.quote.trim().to_string(),
            thought: self.thought.trim().to_string(),
            author: self.author.trim().to_string(),
        })
    }
}

/// Raw input of the interview form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterviewForm {
    pub keyword: String,
    pub question: String,
    pub answer: String,
}

impl InterviewForm {
    pub fn submit(&self) -> Result<NewInterview, ValidationError> {
        require_any(
            &[&self.keyword, &self.question, &self.answer],
            "키워드, 질문, 답변",
        )?;
        Ok(NewInterview {
            kind: ArchiveKind::Interview,
            keyword: self.keyword.trim().to_string(),
            question: self.question.trim().to_string(),
            answer: self.answer.trim().to_string(),
        })
    }
}

pub(crate) fn join_present(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" · ")
}
