//! Request body for `POST /v1/pages`.

use serde_json::{json, Map, Value};

use super::record::{ExportRecord, InterviewRecord, QuoteRecord};
use super::MAX_TEXT_CHARS;

const QUOTE_FALLBACK_TITLE: &str = "인상 깊은 문장";
const INTERVIEW_FALLBACK_TITLE: &str = "면접 답변";
const NO_QUESTION: &str = "(질문 없음)";
const NO_ANSWER: &str = "(답변 없음)";

// Column names of the club's Notion database. "quate" is how the column is
// actually spelled there.
const QUOTE_PROPERTY: &str = "quate";
const THOUGHT_PROPERTY: &str = "thought";
const AUTHOR_PROPERTY: &str = "author";
const KEYWORD_PROPERTY: &str = "keyword";
const QUESTION_PROPERTY: &str = "question";
const ANSWER_PROPERTY: &str = "answer";

/// Builds the page-creation body for `record` under `data_source_id`.
///
/// Record fields are expected to be trimmed already (see
/// [`ExportRecord::from_parts`]).
pub fn create_page_body(data_source_id: &str, title_property: &str, record: &ExportRecord) -> Value {
    let (properties, children) = match record {
        ExportRecord::Quote(quote) => quote_page(title_property, quote),
        ExportRecord::Interview(interview) => interview_page(title_property, interview),
    };
    json!({
        "parent": { "data_source_id": data_source_id },
        "properties": properties,
        "children": children,
    })
}

fn quote_page(title_property: &str, record: &QuoteRecord) -> (Map<String, Value>, Vec<Value>) {
    let title = non_empty_or(&record.book_title, QUOTE_FALLBACK_TITLE);
    let mut properties = Map::new();
    properties.insert(title_property.to_string(), title_property_value(title));
    insert_text(&mut properties, QUOTE_PROPERTY, &record.quote);
    insert_text(&mut properties, THOUGHT_PROPERTY, &record.thoughts);
    insert_text(&mut properties, AUTHOR_PROPERTY, &record.author);

    let mut children = Vec::with_capacity(2);
    if !record.quote.is_empty() {
        children.push(block("quote", &record.quote));
    }
    if !record.thoughts.is_empty() {
        children.push(block("paragraph", &record.thoughts));
    }
    (properties, children)
}

fn interview_page(
    title_property: &str,
    record: &InterviewRecord,
) -> (Map<String, Value>, Vec<Value>) {
    let title = non_empty_or(&record.keyword, INTERVIEW_FALLBACK_TITLE);
    let mut properties = Map::new();
    properties.insert(title_property.to_string(), title_property_value(title));
    insert_text(&mut properties, KEYWORD_PROPERTY, &record.keyword);
    insert_text(&mut properties, QUESTION_PROPERTY, &record.question);
    insert_text(&mut properties, ANSWER_PROPERTY, &record.answer);

    let children = vec![
        block("quote", non_empty_or(&record.question, NO_QUESTION)),
        block("paragraph", non_empty_or(&record.answer, NO_ANSWER)),
    ];
    (properties, children)
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

fn truncate(content: &str) -> String {
    content.chars().take(MAX_TEXT_CHARS).collect()
}

fn rich_text(content: &str) -> Value {
    json!([{ "type": "text", "text": { "content": truncate(content) } }])
}

fn title_property_value(content: &str) -> Value {
    json!({ "title": rich_text(content) })
}

/// Optional properties are only sent when they have content.
fn insert_text(properties: &mut Map<String, Value>, name: &str, content: &str) {
    if !content.is_empty() {
        properties.insert(name.to_string(), json!({ "rich_text": rich_text(content) }));
    }
}

fn block(kind: &str, content: &str) -> Value {
    let mut block = Map::new();
    block.insert("object".to_string(), json!("block"));
    block.insert("type".to_string(), json!(kind));
    block.insert(kind.to_string(), json!({ "rich_text": rich_text(content) }));
    Value::Object(block)
}
