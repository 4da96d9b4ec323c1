use dragpanel_foundation::{DragCallback, DragState, PointerId, ViewSurface};
use dragpanel_ui_graphics::IntRect;

use super::engine::PanelCore;
use crate::gesture_constants::{
    MINIMUM_DX_FOR_HORIZONTAL_DRAG, MINIMUM_DY_FOR_VERTICAL_DRAG, X_MIN_VELOCITY, Y_MIN_VELOCITY,
};
use crate::state::PanelCommand;

impl<S: ViewSurface> PanelCore<S> {
    /// Picks the transition for a release. A surface sitting on the bottom
    /// edge but away from the right one is being dragged sideways, and closing
    /// wins over docking.
    pub(crate) fn release_command(&self, x_velocity: f32, y_velocity: f32) -> PanelCommand {
        if self.is_drag_view_at_bottom() && !self.is_drag_view_at_right() {
            if x_velocity <= -X_MIN_VELOCITY {
                PanelCommand::CloseToLeft
            } else if x_velocity >= X_MIN_VELOCITY {
                PanelCommand::CloseToRight
            } else if self.is_next_to_left_bound() {
                PanelCommand::CloseToLeft
            } else if self.is_next_to_right_bound() {
                PanelCommand::CloseToRight
            } else {
                PanelCommand::Minimize
            }
        } else if y_velocity <= -Y_MIN_VELOCITY {
            PanelCommand::Maximize
        } else if y_velocity >= Y_MIN_VELOCITY {
            PanelCommand::Minimize
        } else if self.is_drag_view_above_the_middle() {
            PanelCommand::Maximize
        } else {
            PanelCommand::Minimize
        }
    }
}

impl<S: ViewSurface> DragCallback for PanelCore<S> {
    fn try_capture_view(&mut self, _pointer_id: PointerId) -> bool {
        !self.state.is_closed()
    }

    fn captured_view_bounds(&self) -> IntRect {
        self.primary.bounds()
    }

    fn clamp_view_position_horizontal(&self, left: i32, dx: i32) -> i32 {
        let horizontal_drag = self.is_drag_view_at_bottom() && !self.is_drag_view_at_right();
        if (self.is_docked_minimized() && dx.abs() > MINIMUM_DX_FOR_HORIZONTAL_DRAG)
            || horizontal_drag
        {
            left
        } else {
            self.primary.left()
        }
    }

    fn clamp_view_position_vertical(&self, top: i32, dy: i32) -> i32 {
        let bottom_bound = self.parent().height - self.min_height_plus_margin();
        let docked = self.is_docked_minimized();
        if (docked && dy.abs() >= MINIMUM_DY_FOR_VERTICAL_DRAG)
            || (!docked && !self.is_drag_view_at_bottom())
        {
            top.max(0).min(bottom_bound)
        } else {
            bottom_bound
        }
    }

    fn move_captured_view(&mut self, left: i32, top: i32) {
        let bounds = self.primary.bounds();
        self.primary.layout(bounds.offset_to(left, top));
    }

    fn on_view_position_changed(&mut self, _left: i32, _top: i32, dx: i32, dy: i32) {
        if self.helper_state == DragState::Dragging && (dx != 0 || dy != 0) {
            self.begin_user_drag();
        }
        self.update_presentation();
    }

    fn on_view_released(&mut self, x_velocity: f32, y_velocity: f32) {
        let command = self.release_command(x_velocity, y_velocity);
        log::debug!("released at ({x_velocity}, {y_velocity}) px/s -> {command:?}");
        self.pending_command = Some(command);
    }

    fn on_view_drag_state_changed(&mut self, state: DragState) {
        self.helper_state = state;
    }
}
