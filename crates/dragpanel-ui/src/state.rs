//! Discrete panel state and per-gesture bookkeeping.

use dragpanel_foundation::{PointerId, INVALID_POINTER};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PanelState {
    /// Full size, docked at the top.
    #[default]
    Maximized,
    /// Shrunk, docked at the bottom-right corner.
    Minimized,
    /// Between rest positions: following a pointer or settling.
    Dragging,
    ClosedLeft,
    ClosedRight,
}

impl PanelState {
    pub fn is_closed(self) -> bool {
        matches!(self, PanelState::ClosedLeft | PanelState::ClosedRight)
    }

    pub fn is_rest(self) -> bool {
        !matches!(self, PanelState::Dragging)
    }
}

/// Transition requested by a release, a tap or the public API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelCommand {
    Maximize,
    Minimize,
    CloseToLeft,
    CloseToRight,
}

impl PanelCommand {
    /// State the panel rests in once the command's animation completes.
    pub fn target_state(self) -> PanelState {
        match self {
            PanelCommand::Maximize => PanelState::Maximized,
            PanelCommand::Minimize => PanelState::Minimized,
            PanelCommand::CloseToLeft => PanelState::ClosedLeft,
            PanelCommand::CloseToRight => PanelState::ClosedRight,
        }
    }
}

/// Pointer tracking for a single gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub active_pointer_id: PointerId,
    /// Pointer x at gesture start; only used to tell taps from drags.
    pub touch_down_x: f32,
}

impl Default for DragSession {
    fn default() -> Self {
        Self {
            active_pointer_id: INVALID_POINTER,
            touch_down_x: 0.0,
        }
    }
}

impl DragSession {
    pub fn begin(&mut self, pointer_id: PointerId, x: f32) {
        self.active_pointer_id = pointer_id;
        self.touch_down_x = x;
    }

    pub fn end(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        self.active_pointer_id != INVALID_POINTER
    }

    /// Horizontal travel since the gesture started.
    pub fn horizontal_delta(&self, x: f32) -> f32 {
        x - self.touch_down_x
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
