//! Headless host for a [`DraggableView`].
//!
//! The rule plays the part of the platform: it routes pointer events through
//! the intercept/handle split a view hierarchy uses, re-runs layout after
//! every event and frame, and pumps settle frames on request.
//!
//! # Example
//!
//! ```
//! use dragpanel_testing::{ListenerEvent, PanelTestRule};
//! use dragpanel_ui::{DraggableViewConfig, IntSize, PanelState};
//!
//! let mut rule = PanelTestRule::new(
//!     IntSize::new(1000, 1800),
//!     IntSize::new(1000, 600),
//!     DraggableViewConfig::default(),
//! );
//! rule.view_mut().minimize().unwrap();
//! rule.pump_until_idle();
//! assert_eq!(rule.state(), PanelState::Minimized);
//! assert_eq!(rule.events(), vec![ListenerEvent::Minimized]);
//! ```

use dragpanel_foundation::{PointerEvent, PointerEventKind, PointerId};
use dragpanel_ui::{DraggableView, DraggableViewConfig, PanelState};
use dragpanel_ui_graphics::{IntSize, Point};

use crate::helper::FakeDragHelper;
use crate::listener::{ListenerEvent, RecordingListener};
use crate::surface::FakeSurface;

/// Frame budget for [`PanelTestRule::pump_until_idle`].
const MAX_SETTLE_FRAMES: usize = 240;
const FRAME_TIME_MS: u64 = 16;
const DRAG_STEPS: usize = 10;

pub struct PanelTestRule {
    view: DraggableView<FakeSurface, FakeDragHelper>,
    listener: RecordingListener,
    size: IntSize,
    pointer_id: PointerId,
    intercepting: bool,
    time_ms: u64,
}

impl PanelTestRule {
    /// Creates a panel of `size` whose primary surface measures to
    /// `primary_size`, and runs the first layout pass.
    pub fn new(size: IntSize, primary_size: IntSize, config: DraggableViewConfig) -> Self {
        Self::with_helper(size, primary_size, config, FakeDragHelper::new())
    }

    pub fn with_helper(
        size: IntSize,
        primary_size: IntSize,
        config: DraggableViewConfig,
        helper: FakeDragHelper,
    ) -> Self {
        let primary = FakeSurface::new(primary_size);
        let secondary = FakeSurface::new(IntSize::new(
            size.width,
            (size.height - primary_size.height).max(0),
        ));
        let mut view = DraggableView::new(primary, secondary, helper, config)
            .unwrap_or_else(|err| panic!("test rule needs a usable configuration: {err}"));
        let listener = RecordingListener::new();
        view.set_draggable_listener(listener.clone());
        view.on_layout(size);
        Self {
            view,
            listener,
            size,
            pointer_id: 0,
            intercepting: false,
            time_ms: 0,
        }
    }

    /// Creates a rule without the initial layout pass.
    pub fn unmeasured(size: IntSize, primary_size: IntSize, config: DraggableViewConfig) -> Self {
        let primary = FakeSurface::new(primary_size);
        let secondary = FakeSurface::new(IntSize::new(size.width, size.height));
        let mut view = DraggableView::new(primary, secondary, FakeDragHelper::new(), config)
            .unwrap_or_else(|err| panic!("test rule needs a usable configuration: {err}"));
        let listener = RecordingListener::new();
        view.set_draggable_listener(listener.clone());
        Self {
            view,
            listener,
            size,
            pointer_id: 0,
            intercepting: false,
            time_ms: 0,
        }
    }

    pub fn view(&self) -> &DraggableView<FakeSurface, FakeDragHelper> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut DraggableView<FakeSurface, FakeDragHelper> {
        &mut self.view
    }

    pub fn helper_mut(&mut self) -> &mut FakeDragHelper {
        self.view.drag_helper_mut()
    }

    pub fn state(&self) -> PanelState {
        self.view.state()
    }

    pub fn size(&self) -> IntSize {
        self.size
    }

    pub fn events(&self) -> Vec<ListenerEvent> {
        self.listener.events()
    }

    pub fn clear_events(&mut self) {
        self.listener.clear();
    }

    /// Runs a layout pass with the current size.
    pub fn layout(&mut self) {
        self.view.on_layout(self.size);
    }

    /// Routes one event the way a view hierarchy does: the panel is asked to
    /// intercept until it does, and from then on handles the rest of the
    /// gesture itself. Returns whether the panel handled the event.
    pub fn dispatch(&mut self, event: PointerEvent) -> bool {
        if event.kind == PointerEventKind::Down {
            self.intercepting = false;
        }
        if !self.intercepting {
            self.intercepting = self.view.on_intercept_touch_event(&event);
        }
        let handled = if self.intercepting {
            self.view.on_touch_event(&event)
        } else {
            false
        };
        log::trace!(
            "dispatched {:?} at ({}, {}): intercepting={} handled={}",
            event.kind,
            event.x(),
            event.y(),
            self.intercepting,
            handled
        );
        if event.is_terminal() {
            self.intercepting = false;
        }
        self.layout();
        handled
    }

    fn event(&mut self, kind: PointerEventKind, x: f32, y: f32) -> PointerEvent {
        self.time_ms += FRAME_TIME_MS;
        PointerEvent::new(kind, Point::new(x, y))
            .with_id(self.pointer_id)
            .with_time(self.time_ms)
    }

    pub fn press(&mut self, x: f32, y: f32) -> bool {
        let event = self.event(PointerEventKind::Down, x, y);
        self.dispatch(event)
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        let event = self.event(PointerEventKind::Move, x, y);
        self.dispatch(event)
    }

    pub fn release(&mut self, x: f32, y: f32) -> bool {
        let event = self.event(PointerEventKind::Up, x, y);
        self.dispatch(event)
    }

    pub fn cancel(&mut self, x: f32, y: f32) -> bool {
        let event = self.event(PointerEventKind::Cancel, x, y);
        self.dispatch(event)
    }

    /// Press, move in even steps, release. Does not pump settle frames.
    pub fn drag(&mut self, from_x: f32, from_y: f32, to_x: f32, to_y: f32) {
        self.press(from_x, from_y);
        for step in 1..=DRAG_STEPS {
            let t = step as f32 / DRAG_STEPS as f32;
            self.move_to(from_x + (to_x - from_x) * t, from_y + (to_y - from_y) * t);
        }
        self.release(to_x, to_y);
    }

    /// Press and release at the same point.
    pub fn tap(&mut self, x: f32, y: f32) -> bool {
        self.press(x, y);
        self.release(x, y)
    }

    /// Runs one settle frame. Returns `true` while more frames are needed.
    pub fn frame(&mut self) -> bool {
        let more = self.view.compute_scroll();
        self.layout();
        more
    }

    /// Runs settle frames until the animation ends. Returns how many frames
    /// ran.
    pub fn pump_until_idle(&mut self) -> usize {
        let mut frames = 0;
        while frames < MAX_SETTLE_FRAMES {
            frames += 1;
            if !self.frame() {
                break;
            }
        }
        frames
    }
}
