//! Contract between a panel and the gesture helper that captures pointers
//! and animates the captured surface.
//!
//! The helper owns pointer capture, velocity tracking and the settle
//! animation. It never touches the panel's state directly: everything it
//! needs goes through the [`DragCallback`] the panel passes into each call,
//! so the panel stays the single owner of its surfaces.

use dragpanel_ui_graphics::IntRect;

use crate::input::{PointerEvent, PointerId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragState {
    /// No surface is captured or moving.
    #[default]
    Idle,
    /// A surface is captured and follows the pointer.
    Dragging,
    /// A surface is animating toward a slide target.
    Settling,
}

/// Hooks the helper invokes while it drags or settles the captured surface.
pub trait DragCallback {
    /// Asks whether the surface under `pointer_id` may be captured.
    fn try_capture_view(&mut self, pointer_id: PointerId) -> bool;

    /// Laid-out bounds of the capturable surface.
    fn captured_view_bounds(&self) -> IntRect;

    /// Restricts horizontal motion; returns the left edge to apply.
    fn clamp_view_position_horizontal(&self, left: i32, dx: i32) -> i32;

    /// Restricts vertical motion; returns the top edge to apply.
    fn clamp_view_position_vertical(&self, top: i32, dy: i32) -> i32;

    /// Moves the captured surface so its top-left corner is at `(left, top)`.
    fn move_captured_view(&mut self, left: i32, top: i32);

    /// Called after every movement, both while dragging and while settling.
    fn on_view_position_changed(&mut self, left: i32, top: i32, dx: i32, dy: i32);

    /// Called once when the pointer lets go of a captured surface.
    fn on_view_released(&mut self, x_velocity: f32, y_velocity: f32);

    fn on_view_drag_state_changed(&mut self, _state: DragState) {}
}

/// Gesture-capture helper used by the panel.
pub trait DragHelper {
    /// Decides whether the parent should steal the pointer stream.
    fn should_intercept_touch_event(
        &mut self,
        event: &PointerEvent,
        callback: &mut dyn DragCallback,
    ) -> bool;

    /// Feeds an event of an intercepted stream.
    fn process_touch_event(&mut self, event: &PointerEvent, callback: &mut dyn DragCallback);

    /// Hit test used for the intercept decision.
    fn is_view_under(&self, bounds: IntRect, x: i32, y: i32) -> bool {
        bounds.contains(x, y)
    }

    /// Starts a settle animation of the surface currently at `from` toward
    /// `(final_left, final_top)`. Returns `false` when there is nothing to
    /// animate, in which case no frames will follow.
    fn smooth_slide_view_to(&mut self, from: IntRect, final_left: i32, final_top: i32) -> bool;

    /// Advances the settle animation by one frame. Returns `true` while
    /// further frames are needed.
    fn continue_settling(&mut self, callback: &mut dyn DragCallback) -> bool;

    /// Drops any capture and abandons the current animation.
    fn cancel(&mut self);

    fn drag_state(&self) -> DragState;
}
