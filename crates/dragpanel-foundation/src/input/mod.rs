//! Pointer input types.

mod types;

pub use types::*;

pub mod prelude {
    pub use super::types::{PointerEvent, PointerEventKind, PointerId, INVALID_POINTER};
}
