//! Visual-property accessor for a display surface.
//!
//! A surface has two independent sets of properties: its laid-out bounds in
//! the parent, which only layout passes and explicit bound assignments
//! change, and its [`GraphicsLayer`], which is applied at draw time and
//! never moves the layout bounds. Implementors only provide storage; the
//! derived accessors are shared.

use dragpanel_ui_graphics::{GraphicsLayer, IntRect, IntSize, Rect};

use crate::input::PointerEvent;

pub trait ViewSurface {
    /// Current laid-out bounds relative to the parent.
    fn bounds(&self) -> IntRect;

    /// Assigns absolute layout bounds.
    fn layout(&mut self, bounds: IntRect);

    /// Size produced by the last measure pass.
    fn measured_size(&self) -> IntSize;

    /// Size requested through the surface's layout parameters.
    fn requested_size(&self) -> IntSize;

    /// Updates the layout parameters; takes effect on the next measure.
    fn set_requested_size(&mut self, size: IntSize);

    fn layer(&self) -> &GraphicsLayer;

    fn layer_mut(&mut self) -> &mut GraphicsLayer;

    /// Forwards a pointer event to the embedded content. Returns whether the
    /// content consumed it.
    fn dispatch_pointer_event(&mut self, _event: &PointerEvent) -> bool {
        false
    }

    fn left(&self) -> i32 {
        self.bounds().left
    }

    fn top(&self) -> i32 {
        self.bounds().top
    }

    fn right(&self) -> i32 {
        self.bounds().right
    }

    fn bottom(&self) -> i32 {
        self.bounds().bottom
    }

    fn width(&self) -> i32 {
        self.bounds().width()
    }

    fn height(&self) -> i32 {
        self.bounds().height()
    }

    fn alpha(&self) -> f32 {
        self.layer().alpha
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.layer_mut().alpha = alpha;
    }

    fn scale_x(&self) -> f32 {
        self.layer().scale_x
    }

    fn set_scale_x(&mut self, scale_x: f32) {
        self.layer_mut().scale_x = scale_x;
    }

    fn scale_y(&self) -> f32 {
        self.layer().scale_y
    }

    fn set_scale_y(&mut self, scale_y: f32) {
        self.layer_mut().scale_y = scale_y;
    }

    fn set_pivot_x(&mut self, pivot_x: f32) {
        self.layer_mut().pivot_x = Some(pivot_x);
    }

    fn set_pivot_y(&mut self, pivot_y: f32) {
        self.layer_mut().pivot_y = Some(pivot_y);
    }

    fn set_rotation(&mut self, rotation: f32) {
        self.layer_mut().rotation = rotation;
    }

    fn set_translation_x(&mut self, translation_x: f32) {
        self.layer_mut().translation_x = translation_x;
    }

    fn set_translation_y(&mut self, translation_y: f32) {
        self.layer_mut().translation_y = translation_y;
    }

    fn set_scroll(&mut self, scroll_x: i32, scroll_y: i32) {
        let layer = self.layer_mut();
        layer.scroll_x = scroll_x;
        layer.scroll_y = scroll_y;
    }

    /// Absolute horizontal position: layout left plus translation.
    fn x(&self) -> f32 {
        self.left() as f32 + self.layer().translation_x
    }

    /// Places the surface at an absolute x by adjusting its translation.
    fn set_x(&mut self, x: f32) {
        let left = self.left() as f32;
        self.layer_mut().translation_x = x - left;
    }

    /// Absolute vertical position: layout top plus translation.
    fn y(&self) -> f32 {
        self.top() as f32 + self.layer().translation_y
    }

    fn set_y(&mut self, y: f32) {
        let top = self.top() as f32;
        self.layer_mut().translation_y = y - top;
    }

    fn offset_left_and_right(&mut self, dx: i32) {
        let bounds = self.bounds().offset(dx, 0);
        self.layout(bounds);
    }

    fn offset_top_and_bottom(&mut self, dy: i32) {
        let bounds = self.bounds().offset(0, dy);
        self.layout(bounds);
    }

    /// Rectangle drawn on screen once the layer transform is applied.
    fn visual_bounds(&self) -> Rect {
        self.layer().transform_rect(self.bounds())
    }

    /// Whether a point in parent coordinates lands on what is drawn: both
    /// translation and scale move the hit area.
    fn is_hit(&self, x: i32, y: i32) -> bool {
        self.visual_bounds().contains(x as f32, y as f32)
    }
}

#[cfg(test)]
#[path = "tests/surface_tests.rs"]
mod tests;
