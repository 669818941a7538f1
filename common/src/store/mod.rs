//! Addressing the hosted store.
//!
//! The store speaks PostgREST: each table is a resource under `/rest/v1/`,
//! columns are chosen with `select`, rows are filtered with
//! `<column>=eq.<value>` and sorted with `order=<column>.<dir>`. This module
//! only builds paths and reads error bodies; the browser does the HTTP.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;
use url::form_urlencoded::byte_serialize;

pub const REST_PREFIX: &str = "/rest/v1/";
pub const API_KEY_HEADER: &str = "apikey";
pub const CREATED_AT: &str = "created_at";

static MISSING_TABLE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(r#"(?i)schema cache|relation .* does not exist|relation "public\.books""#)
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Archives,
    Books,
    Insights,
}

impl Table {
    pub fn name(self) -> &'static str {
        match self {
            Table::Archives => "archives",
            Table::Books => "books",
            Table::Insights => "insights",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// A list query against one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    table: Table,
    select: Option<String>,
    filters: Vec<(String, String)>,
    order: Option<(String, Direction)>,
}

impl Query {
    pub fn table(table: Table) -> Self {
        Self {
            table,
            select: None,
            filters: Vec::new(),
            order: None,
        }
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.select = Some(columns.to_string());
        self
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters.push((column.to_string(), format!("eq.{value}")));
        self
    }

    pub fn order(mut self, column: &str, direction: Direction) -> Self {
        self.order = Some((column.to_string(), direction));
        self
    }

    /// Most recent rows first.
    pub fn newest_first(self) -> Self {
        self.order(CREATED_AT, Direction::Desc)
    }

    /// Path and query string, relative to the store's base url.
    pub fn to_path(&self) -> String {
        let mut params = Vec::new();
        if let Some(select) = &self.select {
            params.push(format!("select={}", encode(select)));
        }
        for (column, condition) in &self.filters {
            params.push(format!("{}={}", encode(column), encode(condition)));
        }
        if let Some((column, direction)) = &self.order {
            let direction = match direction {
                Direction::Asc => "asc",
                Direction::Desc => "desc",
            };
            params.push(format!("order={}.{direction}", encode(column)));
        }

        let mut path = format!("{REST_PREFIX}{}", self.table.name());
        if !params.is_empty() {
            path.push('?');
            path.push_str(&params.join("&"));
        }
        path
    }
}

/// Path addressing the single row with `id`, for updates and deletes.
pub fn row_path(table: Table, id: &str) -> String {
    Query::table(table).eq("id", id).to_path()
}

/// Replaces a panel's list with a fetch result. A failed fetch leaves the
/// list empty rather than showing stale rows next to the error.
pub fn replace_rows<T>(
    entries: &mut Vec<T>,
    fetched: Result<Vec<T>, StoreError>,
) -> Result<(), StoreError> {
    match fetched {
        Ok(rows) => {
            *entries = rows;
            Ok(())
        }
        Err(error) => {
            entries.clear();
            Err(error)
        }
    }
}

fn encode(value: &str) -> String {
    // PostgREST reads commas and dots literally; keep them readable.
    byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace("%2C", ",")
}

/// Error body returned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Error)]
#[error("{message}")]
pub struct StoreError {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    /// Reads a failed response. Bodies that are not the usual error object
    /// keep their text, or the status when empty.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<StoreError>(body) {
            Ok(error) if !error.message.is_empty() => error,
            _ if !body.trim().is_empty() => StoreError::new(body.trim()),
            _ => StoreError::new(format!("HTTP {status}")),
        }
    }

    /// The table has not been created in this project yet.
    pub fn is_missing_table(&self) -> bool {
        MISSING_TABLE
            .as_ref()
            .is_ok_and(|pattern| pattern.is_match(&self.message))
    }

    pub fn message_or(&self, fallback: &str) -> String {
        if self.message.trim().is_empty() {
            fallback.to_string()
        } else {
            self.message.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::archive::QuoteEntry;
    use pretty_assertions::assert_eq;

    #[test]
    fn archive_list_query() {
        let path = Query::table(Table::Archives)
            .select(QuoteEntry::COLUMNS)
            .eq("type", "quote")
            .newest_first()
            .to_path();
        assert_eq!(
            path,
            "/rest/v1/archives?select=id,book_title,quote,thought,author&type=eq.quote&order=created_at.desc"
        );
    }

    #[test]
    fn bare_table_path() {
        assert_eq!(Query::table(Table::Books).to_path(), "/rest/v1/books");
    }

    #[test]
    fn row_ids_are_escaped() {
        assert_eq!(row_path(Table::Insights, "12"), "/rest/v1/insights?id=eq.12");
        assert_eq!(
            row_path(Table::Books, "a&b"),
            "/rest/v1/books?id=eq.a%26b"
        );
    }

    #[test]
    fn missing_table_detection() {
        for message in [
            "Could not find the table 'public.books' in the schema cache",
            "relation \"public.books\" does not exist",
            "RELATION books DOES NOT EXIST",
        ] {
            assert!(StoreError::new(message).is_missing_table(), "{message}");
        }
        assert!(!StoreError::new("JWT expired").is_missing_table());
    }

    #[test]
    fn failed_fetch_empties_the_list() {
        let mut entries = vec!["old"];
        assert_eq!(replace_rows(&mut entries, Ok(vec!["a", "b"])), Ok(()));
        assert_eq!(entries, vec!["a", "b"]);

        let result = replace_rows(&mut entries, Err(StoreError::new("JWT expired")));
        assert_eq!(result, Err(StoreError::new("JWT expired")));
        assert!(entries.is_empty());
    }

    #[test]
    fn error_bodies() {
        let error = StoreError::from_response(
            404,
            r#"{"code":"PGRST205","details":null,"hint":null,"message":"Could not find the table"}"#,
        );
        assert_eq!(error.code.as_deref(), Some("PGRST205"));
        assert_eq!(error.to_string(), "Could not find the table");

        assert_eq!(StoreError::from_response(502, "Bad gateway").message, "Bad gateway");
        assert_eq!(StoreError::from_response(500, "").message, "HTTP 500");
    }
}
