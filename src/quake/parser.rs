use serde_json::Value;

use super::types::{QuakeRecord, RawEvent, EARTHQUAKE_REPORT_CODE};

#[derive(Debug, thiserror::Error)]
pub enum HistoryParseError {
    #[error("history payload is empty")]
    EmptyPayload,
    #[error("history payload is not a json array: {0}")]
    Json(#[from] serde_json::Error),
    #[error("history entry {index} is not an object")]
    NotAnObject { index: usize },
    #[error("history entry {index} is malformed: {source}")]
    Entry {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

// Entries with another report code are dropped before their shape is inspected.
pub fn parse_history_bytes(raw: &[u8]) -> Result<Vec<QuakeRecord>, HistoryParseError> {
    let trimmed = trim_leading_ascii_whitespace(raw);
    if trimmed.is_empty() {
        return Err(HistoryParseError::EmptyPayload);
    }

    let items: Vec<Value> = serde_json::from_slice(trimmed)?;
    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            return Err(HistoryParseError::NotAnObject { index });
        }
        if !is_earthquake_report(&item) {
            continue;
        }
        let event: RawEvent = serde_json::from_value(item)
            .map_err(|source| HistoryParseError::Entry { index, source })?;
        records.push(QuakeRecord::from(event));
    }

    Ok(records)
}

fn is_earthquake_report(item: &Value) -> bool {
    item.get("code").and_then(Value::as_f64) == Some(EARTHQUAKE_REPORT_CODE as f64)
}

fn trim_leading_ascii_whitespace(raw: &[u8]) -> &[u8] {
    let mut index = 0;
    while index < raw.len() && raw[index].is_ascii_whitespace() {
        index += 1;
    }
    &raw[index..]
}
