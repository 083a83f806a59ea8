//! Pointer state, passed explicitly into every capture.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Viewport coordinates of the pointer at capture time.
///
/// Host environments usually expose these as ambient globals; here they are
/// an explicit parameter so a capture is a deterministic function of its
/// inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for PointerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
