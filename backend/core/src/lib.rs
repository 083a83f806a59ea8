pub mod error;
pub mod pointer;
pub mod traits;

pub use error::{CaptureError, WireError};
pub use pointer::PointerPosition;
pub use traits::{Element, ElementResolver};
