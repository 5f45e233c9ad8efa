/*!
 * Field extraction for programme entries.
 *
 * Turns a programme into plain strings. Absent fields become empty strings;
 * extraction never fails.
 */

use serde::Serialize;

use crate::epg_document::{Programme, TextField};

/// Flat view of the fields the passes read
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProgrammeFields {
    pub channel: String,
    pub title: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub start: String,
    pub stop: String,
}

/// Extract the fields of a programme, defaulting anything missing to ""
pub fn extract_fields(programme: &Programme) -> ProgrammeFields {
    ProgrammeFields {
        channel: programme.channel().unwrap_or_default().to_string(),
        title: field_text(programme.title.as_ref()),
        description: field_text(programme.description.as_ref()),
        start: programme.start().unwrap_or_default().to_string(),
        stop: programme.stop().unwrap_or_default().to_string(),
    }
}

/// Text payload of an optional field, regardless of its shape
pub fn field_text(field: Option<&TextField>) -> String {
    match field {
        Some(TextField::Plain(text)) => text.clone(),
        Some(TextField::Wrapped { payload, .. }) => payload.clone(),
        None => String::new(),
    }
}
