//! Positional wire format: six fields joined by the literal token `#ZVSP#`.
//!
//! The delimiter, field order, and `"-"` sentinel are a fixed external
//! contract. Consumers split on the token into exactly six fields:
//! x, y, tag, link target, image source, title.

use ctxprobe_core::WireError;

use crate::record::{ContextRecord, SENTINEL};

/// Literal token separating the six wire fields.
pub const DELIMITER: &str = "#ZVSP#";

/// Number of fields in a well-formed capture string.
const FIELD_COUNT: usize = 6;

impl ContextRecord {
    /// Render the record in fixed field order. Infallible.
    pub fn to_wire(&self) -> String {
        [
            self.pointer_x.to_string(),
            self.pointer_y.to_string(),
            self.tag_kind.clone(),
            wire_field(&self.link_target),
            wire_field(&self.image_source),
            wire_field(&self.title_text),
        ]
        .join(DELIMITER)
    }

    /// Parse a capture string back into a structured record.
    ///
    /// A literal `"-"` field decodes to `None`. A genuine attribute value of
    /// `"-"` is indistinguishable on the wire; the format predates this
    /// implementation and the ambiguity is inherited with it.
    pub fn from_wire(raw: &str) -> Result<Self, WireError> {
        let fields: Vec<&str> = raw.split(DELIMITER).collect();
        if fields.len() != FIELD_COUNT {
            return Err(WireError::FieldCount {
                found: fields.len(),
            });
        }

        Ok(ContextRecord {
            pointer_x: parse_coordinate(fields[0])?,
            pointer_y: parse_coordinate(fields[1])?,
            tag_kind: fields[2].to_string(),
            link_target: optional_field(fields[3]),
            image_source: optional_field(fields[4]),
            title_text: optional_field(fields[5]),
        })
    }
}

fn wire_field(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| SENTINEL.to_string())
}

fn optional_field(raw: &str) -> Option<String> {
    if raw == SENTINEL {
        None
    } else {
        Some(raw.to_string())
    }
}

fn parse_coordinate(raw: &str) -> Result<i32, WireError> {
    raw.parse().map_err(|_| WireError::BadCoordinate {
        field: raw.to_string(),
    })
}
