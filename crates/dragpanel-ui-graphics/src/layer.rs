//! Compositing properties applied on top of a surface's laid-out bounds.

use crate::{IntRect, Rect};

/// Visual properties of a surface that do not affect layout.
///
/// `pivot` is expressed in surface-local pixels; `None` means the centre of
/// the surface, which is where compositors put it until told otherwise.
/// Rotation is stored for hosts that render it but is not part of
/// [`GraphicsLayer::transform_rect`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphicsLayer {
    pub alpha: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub pivot_x: Option<f32>,
    pub pivot_y: Option<f32>,
    pub rotation: f32,
    pub translation_x: f32,
    pub translation_y: f32,
    pub scroll_x: i32,
    pub scroll_y: i32,
}

impl Default for GraphicsLayer {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            scale_x: 1.0,
            scale_y: 1.0,
            pivot_x: None,
            pivot_y: None,
            rotation: 0.0,
            translation_x: 0.0,
            translation_y: 0.0,
            scroll_x: 0,
            scroll_y: 0,
        }
    }
}

impl GraphicsLayer {
    pub fn is_identity(&self) -> bool {
        self.scale_x == 1.0
            && self.scale_y == 1.0
            && self.translation_x == 0.0
            && self.translation_y == 0.0
            && self.rotation == 0.0
    }

    /// Resolved pivot for a surface of the given bounds.
    pub fn resolved_pivot(&self, bounds: IntRect) -> (f32, f32) {
        (
            self.pivot_x.unwrap_or(bounds.width() as f32 * 0.5),
            self.pivot_y.unwrap_or(bounds.height() as f32 * 0.5),
        )
    }

    /// Maps laid-out bounds to the rectangle actually drawn on screen:
    /// translation first, then scaling around the pivot.
    pub fn transform_rect(&self, bounds: IntRect) -> Rect {
        let (pivot_x, pivot_y) = self.resolved_pivot(bounds);
        let origin_x = bounds.left as f32 + self.translation_x;
        let origin_y = bounds.top as f32 + self.translation_y;
        Rect {
            x: origin_x + pivot_x * (1.0 - self.scale_x),
            y: origin_y + pivot_y * (1.0 - self.scale_y),
            width: bounds.width() as f32 * self.scale_x,
            height: bounds.height() as f32 * self.scale_y,
        }
    }
}

#[cfg(test)]
#[path = "tests/layer_tests.rs"]
mod tests;
