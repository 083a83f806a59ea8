//! The capture routine: resolve the element under the pointer and lift its
//! context attributes into a record.

use ctxprobe_core::{CaptureError, ElementResolver, PointerPosition};
use tracing::debug;

use crate::record::ContextRecord;

const ANCHOR_TAG: &str = "A";
const IMAGE_TAG: &str = "IMG";

/// Capture the context of the element under `pointer`.
///
/// Read-only against host state, synchronous, single-shot. Absent attributes
/// degrade to `None` (the wire sentinel) rather than failing; the only error
/// is an empty hit-test.
pub fn capture_at(
    dom: &dyn ElementResolver,
    pointer: PointerPosition,
) -> Result<ContextRecord, CaptureError> {
    let element = dom
        .element_at(pointer)
        .ok_or(CaptureError::NoElementAtPointer {
            x: pointer.x,
            y: pointer.y,
        })?;

    let mut record = ContextRecord {
        pointer_x: pointer.x,
        pointer_y: pointer.y,
        tag_kind: element.tag_name().to_ascii_uppercase(),
        link_target: None,
        image_source: None,
        title_text: None,
    };

    if element.has_attribute("title") {
        record.title_text = element.attribute("title");
    }

    if record.tag_kind == ANCHOR_TAG {
        record.link_target = element.attribute("href");
    } else if record.tag_kind == IMAGE_TAG {
        record.image_source = element.attribute("src");
    }

    debug!(
        pointer = %pointer,
        tag = %record.tag_kind,
        "Captured element context"
    );

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctxprobe_core::Element;

    struct FakeElement {
        tag: &'static str,
        attributes: Vec<(&'static str, &'static str)>,
    }

    impl Element for FakeElement {
        fn tag_name(&self) -> &str {
            self.tag
        }

        fn has_attribute(&self, name: &str) -> bool {
            self.attributes
                .iter()
                .any(|(key, _)| key.eq_ignore_ascii_case(name))
        }

        fn attribute(&self, name: &str) -> Option<String> {
            self.attributes
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.to_string())
        }
    }

    struct FakeDom {
        element: Option<FakeElement>,
    }

    impl ElementResolver for FakeDom {
        fn element_at(&self, _pointer: PointerPosition) -> Option<&dyn Element> {
            self.element.as_ref().map(|e| e as &dyn Element)
        }
    }

    fn dom_with(tag: &'static str, attributes: Vec<(&'static str, &'static str)>) -> FakeDom {
        FakeDom {
            element: Some(FakeElement { tag, attributes }),
        }
    }

    #[test]
    fn anchor_lifts_href_and_keeps_image_sentinel() {
        let dom = dom_with("a", vec![("href", "https://example.com/page")]);
        let record = capture_at(&dom, PointerPosition::new(1, 2)).unwrap();
        assert_eq!(
            record.link_target.as_deref(),
            Some("https://example.com/page")
        );
        assert_eq!(record.image_source, None);
    }

    #[test]
    fn image_lifts_src_and_keeps_link_sentinel() {
        let dom = dom_with("img", vec![("src", "/pic.png")]);
        let record = capture_at(&dom, PointerPosition::new(1, 2)).unwrap();
        assert_eq!(record.image_source.as_deref(), Some("/pic.png"));
        assert_eq!(record.link_target, None);
    }

    #[test]
    fn tag_kind_is_uppercased() {
        let dom = dom_with("img", vec![]);
        let record = capture_at(&dom, PointerPosition::new(0, 0)).unwrap();
        assert_eq!(record.tag_kind, "IMG");
    }

    #[test]
    fn title_is_captured_for_any_tag() {
        let dom = dom_with("div", vec![("title", "tooltip text")]);
        let record = capture_at(&dom, PointerPosition::new(0, 0)).unwrap();
        assert_eq!(record.title_text.as_deref(), Some("tooltip text"));
    }

    #[test]
    fn missing_title_stays_none() {
        let dom = dom_with("div", vec![]);
        let record = capture_at(&dom, PointerPosition::new(0, 0)).unwrap();
        assert_eq!(record.title_text, None);
    }

    #[test]
    fn title_on_anchor_coexists_with_link_target() {
        let dom = dom_with("A", vec![("href", "/x"), ("title", "go")]);
        let record = capture_at(&dom, PointerPosition::new(0, 0)).unwrap();
        assert_eq!(record.link_target.as_deref(), Some("/x"));
        assert_eq!(record.title_text.as_deref(), Some("go"));
    }

    #[test]
    fn anchor_without_href_keeps_sentinel() {
        let dom = dom_with("a", vec![("title", "bare anchor")]);
        let record = capture_at(&dom, PointerPosition::new(0, 0)).unwrap();
        assert_eq!(record.link_target, None);
    }

    #[test]
    fn golden_wire_string_for_anchor() {
        let dom = dom_with("a", vec![("href", "/x")]);
        let record = capture_at(&dom, PointerPosition::new(12, 34)).unwrap();
        assert_eq!(record.to_wire(), "12#ZVSP#34#ZVSP#A#ZVSP#/x#ZVSP#-#ZVSP#-");
    }

    #[test]
    fn empty_hit_test_is_a_typed_error() {
        let dom = FakeDom { element: None };
        let err = capture_at(&dom, PointerPosition::new(40, 50)).unwrap_err();
        assert!(matches!(
            err,
            CaptureError::NoElementAtPointer { x: 40, y: 50 }
        ));
    }
}
