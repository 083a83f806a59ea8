//! Snapshot schema, JSON loading, and hit-testing.

use anyhow::{Context, Result};
use ctxprobe_core::{Element, ElementResolver, PointerPosition};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Axis-aligned element bounds in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Half-open containment: `x <= px < x + width` (same for y).
    pub fn contains(&self, pointer: PointerPosition) -> bool {
        pointer.x >= self.x
            && pointer.y >= self.y
            && (pointer.x - self.x) < self.width as i32
            && (pointer.y - self.y) < self.height as i32
    }
}

/// One laid-out element, listed in document (paint) order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotElement {
    pub tag: String,
    pub bounds: Rect,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl Element for SnapshotElement {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.attributes
            .keys()
            .any(|key| key.eq_ignore_ascii_case(name))
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.clone())
    }
}

/// A rendered page described as a flat, painted-in-order element list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    #[serde(default)]
    pub elements: Vec<SnapshotElement>,
}

impl PageSnapshot {
    /// Parse a snapshot from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("Failed to parse page snapshot JSON")
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
        let snapshot = Self::from_json(&raw)?;
        debug!(
            path = %path.display(),
            elements = snapshot.elements.len(),
            "Loaded page snapshot"
        );
        Ok(snapshot)
    }
}

impl ElementResolver for PageSnapshot {
    /// Last containing element wins: later entries paint above earlier ones,
    /// matching `document.elementFromPoint` on a real page.
    fn element_at(&self, pointer: PointerPosition) -> Option<&dyn Element> {
        self.elements
            .iter()
            .rev()
            .find(|element| element.bounds.contains(pointer))
            .map(|element| element as &dyn Element)
    }
}
