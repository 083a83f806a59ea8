//! Host capability traits for DOM access.
//!
//! The capture routine never talks to a live browser directly; it works
//! against these two seams, so any host (or test double) that can answer a
//! hit-test and an attribute lookup can drive it.

use crate::pointer::PointerPosition;

/// A single DOM element as exposed by the host environment.
///
/// Attribute-name matching follows HTML DOM semantics: names compare
/// ASCII-case-insensitively, so `attribute("HREF")` and `attribute("href")`
/// are equivalent.
pub trait Element {
    /// Tag name as reported by the host, in whatever case it uses.
    fn tag_name(&self) -> &str;

    /// Whether the element carries the named attribute.
    fn has_attribute(&self, name: &str) -> bool;

    /// The attribute's value, or `None` when absent.
    fn attribute(&self, name: &str) -> Option<String>;
}

/// Hit-testing capability: which element sits under a viewport point.
pub trait ElementResolver {
    /// The topmost element at `pointer`, or `None` over bare canvas.
    fn element_at(&self, pointer: PointerPosition) -> Option<&dyn Element>;
}
