//! `ctxprobe-snapshot` — a deterministic page stand-in for captures.
//!
//! Implements the host capability traits over a serde-loadable description of
//! a rendered page, so captures run identically in tests and offline tooling
//! without a live browser behind them.

pub mod page;

pub use page::{PageSnapshot, Rect, SnapshotElement};
