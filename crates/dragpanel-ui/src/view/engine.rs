//! State and presentation math shared by the public view and the drag
//! callback.

use dragpanel_foundation::{DragState, ViewSurface};
use dragpanel_ui_graphics::{IntRect, IntSize};
use web_time::Instant;

use crate::config::DraggableViewConfig;
use crate::error::PanelError;
use crate::gesture_constants::BACKGROUND_ALPHA_RANGE;
use crate::state::{DragSession, PanelCommand, PanelState};
use crate::strategy::GeometryStrategy;

/// A programmatic slide the helper is animating.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PendingSettle {
    pub(crate) command: PanelCommand,
    pub(crate) left: i32,
    pub(crate) top: i32,
    started: Instant,
}

pub(crate) struct PanelCore<S: ViewSurface> {
    pub(crate) primary: S,
    pub(crate) secondary: S,
    pub(crate) strategy: Box<dyn GeometryStrategy>,
    pub(crate) config: DraggableViewConfig,
    pub(crate) session: DragSession,
    pub(crate) state: PanelState,
    pub(crate) helper_state: DragState,
    /// Panel bounds from the last layout pass; `None` until measured.
    parent: Option<IntSize>,
    /// Slide an in-flight settle animation is heading to.
    settle: Option<PendingSettle>,
    /// Transition decided inside a helper callback, run once the helper
    /// returns control.
    pub(crate) pending_command: Option<PanelCommand>,
    background_alpha: i32,
    horizontal_placement: f32,
    /// Last offset reported by an external drawer.
    drawer_offset: f32,
}

impl<S: ViewSurface> PanelCore<S> {
    pub(crate) fn new(
        primary: S,
        secondary: S,
        strategy: Box<dyn GeometryStrategy>,
        config: DraggableViewConfig,
    ) -> Self {
        Self {
            primary,
            secondary,
            strategy,
            config,
            session: DragSession::default(),
            state: PanelState::Maximized,
            helper_state: DragState::Idle,
            parent: None,
            settle: None,
            pending_command: None,
            background_alpha: BACKGROUND_ALPHA_RANGE as i32,
            horizontal_placement: 0.0,
            drawer_offset: 0.0,
        }
    }

    pub(crate) fn is_measured(&self) -> bool {
        self.parent.is_some()
    }

    pub(crate) fn ensure_measured(&self) -> Result<IntSize, PanelError> {
        self.parent.ok_or(PanelError::InvalidState {
            reason: "panel has not been laid out yet",
        })
    }

    pub(crate) fn parent(&self) -> IntSize {
        self.parent.unwrap_or(IntSize::ZERO)
    }

    pub(crate) fn set_parent(&mut self, size: IntSize) {
        self.parent = Some(size);
    }

    pub(crate) fn background_alpha(&self) -> i32 {
        self.background_alpha
    }

    pub(crate) fn horizontal_placement(&self) -> f32 {
        self.horizontal_placement
    }

    pub(crate) fn set_horizontal_placement(&mut self, x: f32) {
        self.horizontal_placement = x;
    }

    pub(crate) fn drawer_offset(&self) -> f32 {
        self.drawer_offset
    }

    pub(crate) fn set_drawer_offset(&mut self, offset: f32) {
        self.drawer_offset = offset;
    }

    // Geometry predicates. These feed decisions; the panel state itself is
    // `self.state`.

    pub(crate) fn is_drag_view_at_right(&self) -> bool {
        self.strategy.is_view_at_right(&self.primary, self.parent())
    }

    pub(crate) fn is_drag_view_at_bottom(&self) -> bool {
        self.strategy.is_view_at_bottom(&self.primary, self.parent())
    }

    /// Resting in the bottom-right corner, judged from geometry alone.
    pub(crate) fn is_docked_minimized(&self) -> bool {
        self.is_drag_view_at_bottom() && self.is_drag_view_at_right()
    }

    pub(crate) fn is_drag_view_above_the_middle(&self) -> bool {
        self.strategy.is_above_the_middle(&self.primary, self.parent())
    }

    pub(crate) fn is_next_to_left_bound(&self) -> bool {
        self.strategy.is_next_to_left_bound(&self.primary, self.parent())
    }

    pub(crate) fn is_next_to_right_bound(&self) -> bool {
        self.strategy.is_next_to_right_bound(&self.primary, self.parent())
    }

    pub(crate) fn is_closed_at_right(&self) -> bool {
        self.primary.left() >= self.parent().width
    }

    pub(crate) fn is_closed_at_left(&self) -> bool {
        self.primary.right() <= 0
    }

    pub(crate) fn min_height_plus_margin(&self) -> i32 {
        self.strategy.min_height_plus_margin(&self.primary)
    }

    pub(crate) fn min_width_plus_margin_right(&self) -> i32 {
        self.strategy.min_width_plus_margin_right(&self.primary)
    }

    pub(crate) fn original_width(&self) -> i32 {
        self.strategy.original_width(&self.primary)
    }

    pub(crate) fn original_height(&self) -> i32 {
        self.strategy.original_height(&self.primary)
    }

    /// Vertical travel between the maximized and minimized tops.
    pub(crate) fn vertical_drag_range(&self) -> f32 {
        (self.parent().height - self.min_height_plus_margin()) as f32
    }

    /// Normalized vertical progress: 0 at the top, 1 at the minimized top.
    pub(crate) fn vertical_drag_offset(&self) -> f32 {
        let range = self.vertical_drag_range();
        if range <= 0.0 {
            return 0.0;
        }
        self.primary.top() as f32 / range
    }

    /// Normalized horizontal displacement of the primary surface.
    pub(crate) fn horizontal_drag_offset(&self) -> f32 {
        let width = self.parent().width;
        if width <= 0 {
            return 0.0;
        }
        self.primary.left().abs() as f32 / width as f32
    }

    // Presentation updates, run on every drag and settle frame.

    pub(crate) fn change_drag_view_scale(&mut self) {
        let progress = self.vertical_drag_offset();
        self.strategy.update_scale(&mut self.primary, progress);
    }

    pub(crate) fn change_drag_view_position(&mut self) {
        let progress = self.vertical_drag_offset();
        self.strategy.update_position(&mut self.primary, progress);
    }

    /// Keeps the secondary surface glued below the primary one.
    pub(crate) fn change_second_view_position(&mut self) {
        let bottom = self.primary.bottom() as f32;
        self.secondary.set_y(bottom);
    }

    pub(crate) fn change_second_view_alpha(&mut self) {
        let alpha = 1.0 - self.vertical_drag_offset();
        self.secondary.set_alpha(alpha);
    }

    pub(crate) fn change_background_alpha(&mut self) {
        let alpha = BACKGROUND_ALPHA_RANGE * (1.0 - self.vertical_drag_offset());
        self.background_alpha = alpha as i32;
    }

    /// Fades the primary surface while it is dragged sideways.
    pub(crate) fn change_drag_view_alpha(&mut self) {
        if !self.config.horizontal_alpha_effect {
            self.restore_alpha();
            return;
        }
        let mut alpha = 1.0 - self.horizontal_drag_offset();
        if alpha == 0.0 {
            alpha = 1.0;
        }
        self.primary.set_alpha(alpha);
    }

    pub(crate) fn restore_alpha(&mut self) {
        if self.primary.alpha() < 1.0 {
            self.primary.set_alpha(1.0);
        }
    }

    /// Full presentation pass for the primary surface's current position.
    ///
    /// At the bottom edge only the horizontal effects apply: a surface
    /// dragged sideways keeps the bounds the helper gave it.
    pub(crate) fn update_presentation(&mut self) {
        self.change_drag_view_scale();
        if self.is_drag_view_at_bottom() {
            self.change_drag_view_alpha();
        } else {
            self.restore_alpha();
            self.change_drag_view_position();
        }
        self.change_second_view_alpha();
        self.change_second_view_position();
        self.change_background_alpha();
        log::trace!(
            "frame: v={:.3} h={:.3} primary={:?}",
            self.vertical_drag_offset(),
            self.horizontal_drag_offset(),
            self.primary.bounds()
        );
    }

    // State machine bookkeeping.

    /// Records the outcome of a slide request toward `(left, top)`.
    pub(crate) fn begin_transition(
        &mut self,
        command: PanelCommand,
        left: i32,
        top: i32,
        accepted: bool,
    ) {
        let rest = command.target_state();
        if accepted {
            log::debug!("settling {:?} -> {:?}", self.state, rest);
            self.state = PanelState::Dragging;
            self.settle = Some(PendingSettle {
                command,
                left,
                top,
                started: Instant::now(),
            });
        } else {
            log::debug!("already at {:?}", rest);
            self.state = rest;
            self.settle = None;
        }
    }

    /// The pending slide, if the helper stopped before the primary surface
    /// got there.
    ///
    /// Only the top edge is compared for docking slides: the resize strategy
    /// repositions the left edge on every frame. Closing slides run along the
    /// bottom edge, where the left edge is exactly what the helper set.
    pub(crate) fn unfinished_settle(&self) -> Option<PendingSettle> {
        let settle = self.settle?;
        let top_reached = self.primary.top() == settle.top;
        let reached = match settle.command {
            PanelCommand::Maximize | PanelCommand::Minimize => top_reached,
            PanelCommand::CloseToLeft | PanelCommand::CloseToRight => {
                top_reached && self.primary.left() == settle.left
            }
        };
        (!reached).then_some(settle)
    }

    /// Lands on the pending rest state once the helper stops settling.
    pub(crate) fn finish_settle(&mut self) {
        if let Some(settle) = self.settle.take() {
            let rest = settle.command.target_state();
            log::debug!("settled into {:?} after {:?}", rest, settle.started.elapsed());
            self.state = rest;
        }
    }

    /// A pointer moved the surface: any pending settle target is void.
    pub(crate) fn begin_user_drag(&mut self) {
        if self.state != PanelState::Dragging || self.settle.is_some() {
            log::debug!("drag started from {:?}", self.state);
        }
        self.state = PanelState::Dragging;
        self.settle = None;
    }

    pub(crate) fn pending_rest(&self) -> Option<PanelState> {
        self.settle.map(|settle| settle.command.target_state())
    }

    /// Lays out both surfaces at full size when maximized; otherwise only the
    /// secondary, since the strategy drives the primary's bounds.
    pub(crate) fn layout(&mut self, size: IntSize) {
        self.set_parent(size);
        let original_height = self.original_height();
        self.original_width();
        if self.state == PanelState::Maximized {
            self.primary.layout(IntRect::new(0, 0, size.width, original_height));
            self.secondary
                .layout(IntRect::new(0, original_height, size.width, size.height));
            self.primary.set_y(0.0);
            self.secondary.set_y(original_height as f32);
        } else {
            self.secondary
                .layout(IntRect::new(0, original_height, size.width, size.height));
        }
    }
}
