//! Deterministic stand-in for a platform drag helper.
//!
//! Pointer movement is applied relative to where the gesture captured the
//! surface, so feeding the same event twice is harmless. Release velocities
//! are scripted rather than measured, and settle animations are linear over a
//! fixed number of frames.

use dragpanel_foundation::{
    DragCallback, DragHelper, DragState, PointerEvent, PointerEventKind, PointerId,
    INVALID_POINTER,
};
use dragpanel_ui_graphics::IntRect;

pub const DEFAULT_SETTLE_FRAMES: u32 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Capture {
    pointer_id: PointerId,
    origin_left: i32,
    origin_top: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Settle {
    from_left: i32,
    from_top: i32,
    to_left: i32,
    to_top: i32,
    frame: u32,
    announced: bool,
}

#[derive(Debug)]
pub struct FakeDragHelper {
    state: DragState,
    capture: Option<Capture>,
    down_x: f32,
    down_y: f32,
    settle: Option<Settle>,
    settle_frames: u32,
    release_velocity: (f32, f32),
    slide_requests: Vec<(i32, i32)>,
    cancel_count: usize,
}

impl Default for FakeDragHelper {
    fn default() -> Self {
        Self {
            state: DragState::Idle,
            capture: None,
            down_x: 0.0,
            down_y: 0.0,
            settle: None,
            settle_frames: DEFAULT_SETTLE_FRAMES,
            release_velocity: (0.0, 0.0),
            slide_requests: Vec::new(),
            cancel_count: 0,
        }
    }
}

impl FakeDragHelper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames a settle animation takes. Clamped to at least one.
    pub fn with_settle_frames(mut self, frames: u32) -> Self {
        self.settle_frames = frames.max(1);
        self
    }

    /// Velocity, in px/s, reported on the next releases.
    pub fn set_release_velocity(&mut self, x_velocity: f32, y_velocity: f32) {
        self.release_velocity = (x_velocity, y_velocity);
    }

    /// Every slide target requested so far, accepted or not.
    pub fn slide_requests(&self) -> &[(i32, i32)] {
        &self.slide_requests
    }

    pub fn cancel_count(&self) -> usize {
        self.cancel_count
    }

    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    fn set_drag_state(&mut self, state: DragState, callback: &mut dyn DragCallback) {
        if self.state != state {
            self.state = state;
            callback.on_view_drag_state_changed(state);
        }
    }

    fn try_capture(&mut self, event: &PointerEvent, callback: &mut dyn DragCallback) {
        let bounds = callback.captured_view_bounds();
        if !self.is_view_under(bounds, event.x() as i32, event.y() as i32) {
            return;
        }
        if event.id == INVALID_POINTER || !callback.try_capture_view(event.id) {
            return;
        }
        // A captured gesture abandons whatever was settling.
        self.settle = None;
        self.capture = Some(Capture {
            pointer_id: event.id,
            origin_left: bounds.left,
            origin_top: bounds.top,
        });
        self.down_x = event.x();
        self.down_y = event.y();
        self.set_drag_state(DragState::Dragging, callback);
    }

    fn drag_to(&mut self, event: &PointerEvent, callback: &mut dyn DragCallback) {
        let Some(capture) = self.capture else {
            return;
        };
        if capture.pointer_id != event.id {
            return;
        }
        let current = callback.captured_view_bounds();
        let desired_left = capture.origin_left + (event.x() - self.down_x) as i32;
        let desired_top = capture.origin_top + (event.y() - self.down_y) as i32;
        let left =
            callback.clamp_view_position_horizontal(desired_left, desired_left - current.left);
        let top = callback.clamp_view_position_vertical(desired_top, desired_top - current.top);
        let dx = left - current.left;
        let dy = top - current.top;
        if dx != 0 || dy != 0 {
            callback.move_captured_view(left, top);
            callback.on_view_position_changed(left, top, dx, dy);
        }
    }

    fn release(&mut self, velocity: (f32, f32), callback: &mut dyn DragCallback) {
        if self.capture.take().is_none() {
            return;
        }
        let (x_velocity, y_velocity) = velocity;
        callback.on_view_released(x_velocity, y_velocity);
        self.set_drag_state(DragState::Idle, callback);
    }
}

impl DragHelper for FakeDragHelper {
    fn should_intercept_touch_event(
        &mut self,
        event: &PointerEvent,
        callback: &mut dyn DragCallback,
    ) -> bool {
        match event.kind {
            PointerEventKind::Down => self.try_capture(event, callback),
            PointerEventKind::Move => self.drag_to(event, callback),
            PointerEventKind::Up | PointerEventKind::Cancel => {
                self.cancel();
                return false;
            }
        }
        self.state == DragState::Dragging
    }

    fn process_touch_event(&mut self, event: &PointerEvent, callback: &mut dyn DragCallback) {
        match event.kind {
            PointerEventKind::Down => {
                if self.capture.is_none() {
                    self.try_capture(event, callback);
                }
            }
            PointerEventKind::Move => self.drag_to(event, callback),
            PointerEventKind::Up => self.release(self.release_velocity, callback),
            // A cancelled drag is released in place, without velocity.
            PointerEventKind::Cancel => self.release((0.0, 0.0), callback),
        }
    }

    fn smooth_slide_view_to(&mut self, from: IntRect, final_left: i32, final_top: i32) -> bool {
        self.slide_requests.push((final_left, final_top));
        self.capture = None;
        if from.left == final_left && from.top == final_top {
            self.settle = None;
            self.state = DragState::Idle;
            return false;
        }
        self.settle = Some(Settle {
            from_left: from.left,
            from_top: from.top,
            to_left: final_left,
            to_top: final_top,
            frame: 0,
            announced: false,
        });
        self.state = DragState::Settling;
        true
    }

    fn continue_settling(&mut self, callback: &mut dyn DragCallback) -> bool {
        let Some(mut settle) = self.settle else {
            return false;
        };
        if !settle.announced {
            settle.announced = true;
            callback.on_view_drag_state_changed(DragState::Settling);
        }
        settle.frame += 1;
        let (left, top) = if settle.frame >= self.settle_frames {
            (settle.to_left, settle.to_top)
        } else {
            let t = settle.frame as f32 / self.settle_frames as f32;
            (
                settle.from_left + ((settle.to_left - settle.from_left) as f32 * t) as i32,
                settle.from_top + ((settle.to_top - settle.from_top) as f32 * t) as i32,
            )
        };
        let current = callback.captured_view_bounds();
        let dx = left - current.left;
        let dy = top - current.top;
        if dx != 0 || dy != 0 {
            callback.move_captured_view(left, top);
            callback.on_view_position_changed(left, top, dx, dy);
        }
        if settle.frame >= self.settle_frames {
            self.settle = None;
            self.set_drag_state(DragState::Idle, callback);
            return false;
        }
        self.settle = Some(settle);
        true
    }

    fn cancel(&mut self) {
        self.cancel_count += 1;
        self.capture = None;
        self.settle = None;
        self.state = DragState::Idle;
    }

    fn drag_state(&self) -> DragState {
        self.state
    }
}
