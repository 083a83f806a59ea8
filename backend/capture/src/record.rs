//! The transient record produced by one capture.

use serde::{Deserialize, Serialize};

/// Placeholder rendered on the wire for a field that does not apply.
pub const SENTINEL: &str = "-";

/// One capture event: pointer coordinates plus the context attributes of the
/// element underneath. Constructed fresh per capture, serialized, discarded;
/// never mutated after construction.
///
/// At most one of `link_target`/`image_source` is `Some` — they are mutually
/// exclusive by tag kind. `title_text` is independent of tag kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextRecord {
    pub pointer_x: i32,
    pub pointer_y: i32,
    /// Uppercase tag name of the element under the pointer.
    pub tag_kind: String,
    /// Resolved hyperlink target; `Some` only for `A` elements carrying `href`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_target: Option<String>,
    /// Resolved image source; `Some` only for `IMG` elements carrying `src`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_source: Option<String>,
    /// The element's `title` attribute, whatever the tag kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_text: Option<String>,
}
