//! Pure math/data for the draggable panel
//!
//! This crate contains the geometry primitives and the visual-property
//! layer (opacity, scale, pivot, translation) shared by the panel engine
//! and the surfaces it drives.

mod geometry;
mod layer;

pub use geometry::*;
pub use layer::*;

pub mod prelude {
    pub use crate::geometry::{IntRect, IntSize, Point, Rect};
    pub use crate::layer::GraphicsLayer;
}
