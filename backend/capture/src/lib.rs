//! `ctxprobe-capture` — element-context capture and its wire codec.
//!
//! One invocation produces one [`ContextRecord`]: the pointer coordinates,
//! the tag kind of the element underneath, and a fixed set of its attributes,
//! rendered into a `#ZVSP#`-delimited string for the host.

pub mod capture;
pub mod record;
pub mod wire;

pub use capture::capture_at;
pub use record::{ContextRecord, SENTINEL};
pub use wire::DELIMITER;
