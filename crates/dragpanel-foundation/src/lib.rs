//! Foundation contracts for the draggable panel: pointer input, the
//! visual-property accessor every surface implements, and the gesture
//! helper the engine delegates pointer capture and settling to.

pub mod drag_helper;
pub mod input;
pub mod surface;

pub use drag_helper::{DragCallback, DragHelper, DragState};
pub use input::{PointerEvent, PointerEventKind, PointerId, INVALID_POINTER};
pub use surface::ViewSurface;

pub mod prelude {
    pub use crate::drag_helper::{DragCallback, DragHelper, DragState};
    pub use crate::input::prelude::*;
    pub use crate::surface::ViewSurface;
}
