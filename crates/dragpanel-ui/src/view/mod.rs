//! The panel surface controller.
//!
//! [`DraggableView`] owns the primary and secondary surfaces, the active
//! geometry strategy and the explicit [`PanelState`]. Pointer input goes
//! through the [`DragHelper`], which calls back into the engine core for
//! clamping and per-frame presentation; transitions decided inside those
//! callbacks run once the helper has returned.

mod callback;
mod engine;

use dragpanel_foundation::{
    DragHelper, DragState, PointerEvent, PointerEventKind, ViewSurface, INVALID_POINTER,
};
use dragpanel_ui_graphics::IntSize;

use self::engine::PanelCore;
use crate::config::{validate_scale_factor, DraggableViewConfig};
use crate::error::PanelError;
use crate::gesture_constants::{
    MIN_SLIDE_OFFSET, MIN_SLIDING_DISTANCE_ON_CLICK, SLIDE_BOTTOM, SLIDE_TOP,
};
use crate::listener::DraggableListener;
use crate::state::{PanelCommand, PanelState};
use crate::strategy::{create_strategy, GeometryStrategy};

pub struct DraggableView<S: ViewSurface, H: DragHelper> {
    helper: H,
    core: PanelCore<S>,
    listener: Option<Box<dyn DraggableListener>>,
}

impl<S: ViewSurface, H: DragHelper> DraggableView<S, H> {
    /// Builds the engine around two surfaces. Fails when the configuration
    /// cannot drive the geometry math.
    pub fn new(
        primary: S,
        secondary: S,
        helper: H,
        config: DraggableViewConfig,
    ) -> Result<Self, PanelError> {
        config.validate()?;
        let strategy = create_strategy(&config);
        let mut core = PanelCore::new(primary, secondary, strategy, config);
        if let Some(height) = core.config.top_view_height {
            core.strategy.set_view_height(&mut core.primary, height);
        }
        log::debug!("draggable view created with {:?} strategy", core.strategy.kind());
        Ok(Self {
            helper,
            core,
            listener: None,
        })
    }

    /// Registers the observer, replacing any previous one.
    pub fn set_draggable_listener(&mut self, listener: impl DraggableListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn state(&self) -> PanelState {
        self.core.state
    }

    pub fn is_maximized(&self) -> bool {
        self.core.state == PanelState::Maximized
    }

    pub fn is_minimized(&self) -> bool {
        self.core.state == PanelState::Minimized
    }

    pub fn is_closed(&self) -> bool {
        self.core.state.is_closed()
    }

    /// Whether the primary surface lies fully past the right edge.
    pub fn is_closed_at_right(&self) -> Result<bool, PanelError> {
        self.core.ensure_measured()?;
        Ok(self.core.is_closed_at_right())
    }

    /// Whether the primary surface lies fully past the left edge.
    pub fn is_closed_at_left(&self) -> Result<bool, PanelError> {
        self.core.ensure_measured()?;
        Ok(self.core.is_closed_at_left())
    }

    pub fn config(&self) -> &DraggableViewConfig {
        &self.core.config
    }

    pub fn strategy(&self) -> &dyn GeometryStrategy {
        self.core.strategy.as_ref()
    }

    pub fn primary(&self) -> &S {
        &self.core.primary
    }

    pub fn primary_mut(&mut self) -> &mut S {
        &mut self.core.primary
    }

    pub fn secondary(&self) -> &S {
        &self.core.secondary
    }

    pub fn secondary_mut(&mut self) -> &mut S {
        &mut self.core.secondary
    }

    pub fn drag_helper(&self) -> &H {
        &self.helper
    }

    pub fn drag_helper_mut(&mut self) -> &mut H {
        &mut self.helper
    }

    /// Background opacity in `[0, 100]`.
    pub fn background_alpha(&self) -> i32 {
        self.core.background_alpha()
    }

    /// Horizontal placement imposed by an external drawer.
    pub fn horizontal_placement(&self) -> f32 {
        self.core.horizontal_placement()
    }

    pub fn vertical_drag_offset(&self) -> f32 {
        self.core.vertical_drag_offset()
    }

    pub fn horizontal_drag_offset(&self) -> f32 {
        self.core.horizontal_drag_offset()
    }

    /// Rest state the running settle animation will land on.
    pub fn pending_rest_state(&self) -> Option<PanelState> {
        self.core.pending_rest()
    }

    // Configuration.

    pub fn set_x_scale_factor(&mut self, factor: f32) -> Result<(), PanelError> {
        let factor = validate_scale_factor(factor)?;
        self.core.config.x_scale_factor = factor;
        self.core.strategy.metrics_mut().x_scale_factor = factor;
        Ok(())
    }

    pub fn set_y_scale_factor(&mut self, factor: f32) -> Result<(), PanelError> {
        let factor = validate_scale_factor(factor)?;
        self.core.config.y_scale_factor = factor;
        self.core.strategy.metrics_mut().y_scale_factor = factor;
        Ok(())
    }

    pub fn set_top_view_margin_right(&mut self, margin: i32) {
        self.core.config.margin_right = margin;
        self.core.strategy.metrics_mut().margin_right = margin;
    }

    pub fn set_top_view_margin_bottom(&mut self, margin: i32) {
        self.core.config.margin_bottom = margin;
        self.core.strategy.metrics_mut().margin_bottom = margin;
    }

    /// Docked height of the primary surface. Non-positive values are ignored.
    pub fn set_top_view_height(&mut self, height: i32) {
        if height > 0 {
            self.core.config.top_view_height = Some(height);
        }
        let core = &mut self.core;
        core.strategy.set_view_height(&mut core.primary, height);
    }

    pub fn set_horizontal_alpha_effect_enabled(&mut self, enabled: bool) {
        self.core.config.horizontal_alpha_effect = enabled;
    }

    pub fn set_click_to_maximize_enabled(&mut self, enabled: bool) {
        self.core.config.click_to_maximize = enabled;
    }

    pub fn set_click_to_minimize_enabled(&mut self, enabled: bool) {
        self.core.config.click_to_minimize = enabled;
    }

    pub fn set_touch_enabled(&mut self, enabled: bool) {
        self.core.config.touch_enabled = enabled;
    }

    pub fn is_touch_enabled(&self) -> bool {
        self.core.config.touch_enabled
    }

    /// Switches between resizing and scaling the primary surface. The frozen
    /// original size carries over to the new strategy.
    pub fn set_top_view_resize(&mut self, resize: bool) {
        if self.core.config.top_view_resize == resize {
            return;
        }
        self.core.config.top_view_resize = resize;
        let captured = self.core.strategy.metrics().captured_size();
        let strategy = create_strategy(&self.core.config);
        strategy.metrics().adopt_captured_size(captured);
        log::debug!("geometry strategy switched to {:?}", strategy.kind());
        self.core.strategy = strategy;
    }

    // Transitions.

    /// Animates to the top-docked, full-size position.
    ///
    /// Refused while an external drawer is open past the minimum offset.
    pub fn maximize(&mut self) -> Result<(), PanelError> {
        self.run_command(PanelCommand::Maximize)
    }

    /// Animates to the bottom-right-docked, shrunk position.
    pub fn minimize(&mut self) -> Result<(), PanelError> {
        self.run_command(PanelCommand::Minimize)
    }

    /// Slides the primary surface off the left edge.
    pub fn close_to_left(&mut self) -> Result<(), PanelError> {
        self.run_command(PanelCommand::CloseToLeft)
    }

    /// Slides the primary surface off the right edge.
    pub fn close_to_right(&mut self) -> Result<(), PanelError> {
        self.run_command(PanelCommand::CloseToRight)
    }

    /// Couples the panel to an external horizontally sliding container.
    ///
    /// Past the minimum offset touch is disabled and a maximized panel is
    /// minimized; it can only be maximized again once the container settles.
    pub fn slide_horizontally(
        &mut self,
        offset: f32,
        drawer_position: f32,
        width: i32,
    ) -> Result<(), PanelError> {
        self.core.ensure_measured()?;
        self.core.set_drawer_offset(offset);
        if offset > MIN_SLIDE_OFFSET && !self.is_closed() && self.is_maximized() {
            self.minimize()?;
        }
        self.core.config.touch_enabled = offset <= MIN_SLIDE_OFFSET;
        self.core.set_horizontal_placement(width as f32 - drawer_position.abs());
        Ok(())
    }

    fn run_command(&mut self, command: PanelCommand) -> Result<(), PanelError> {
        let parent = self.core.ensure_measured()?;
        if command == PanelCommand::Maximize && self.core.drawer_offset() > MIN_SLIDE_OFFSET {
            log::warn!(
                "maximize refused: drawer is open at offset {:.2}",
                self.core.drawer_offset()
            );
            return Err(PanelError::InvalidState {
                reason: "panel cannot be maximized while the drawer is open",
            });
        }
        let (left, top) = match command {
            PanelCommand::Maximize => self.slide_target(parent, SLIDE_TOP),
            PanelCommand::Minimize => self.slide_target(parent, SLIDE_BOTTOM),
            PanelCommand::CloseToLeft => (
                -self.core.original_width(),
                parent.height - self.core.min_height_plus_margin(),
            ),
            PanelCommand::CloseToRight => (
                self.core.original_width(),
                parent.height - self.core.min_height_plus_margin(),
            ),
        };
        let accepted = self
            .helper
            .smooth_slide_view_to(self.core.primary.bounds(), left, top);
        self.core.helper_state = self.helper.drag_state();
        self.core.begin_transition(command, left, top, accepted);
        self.notify(command);
        Ok(())
    }

    /// Top-left corner for a normalized slide offset.
    fn slide_target(&self, parent: IntSize, offset: f32) -> (i32, i32) {
        let horizontal_range = (parent.width - self.core.min_width_plus_margin_right()) as f32;
        let left = (offset * horizontal_range) as i32;
        let top = (offset * self.core.vertical_drag_range()) as i32;
        (left, top)
    }

    fn notify(&mut self, command: PanelCommand) {
        let Some(listener) = self.listener.as_mut() else {
            return;
        };
        match command {
            PanelCommand::Maximize => listener.on_maximized(),
            PanelCommand::Minimize => listener.on_minimized(),
            PanelCommand::CloseToLeft => listener.on_closed_to_left(),
            PanelCommand::CloseToRight => listener.on_closed_to_right(),
        }
    }

    // Host hooks.

    /// Decides whether the panel takes over the pointer stream from its
    /// children.
    pub fn on_intercept_touch_event(&mut self, event: &PointerEvent) -> bool {
        if !self.core.config.touch_enabled || !self.core.is_measured() || self.is_closed() {
            return false;
        }
        match event.kind {
            PointerEventKind::Up | PointerEventKind::Cancel => {
                // Only a captured drag is abandoned; a settle keeps running.
                if self.helper.drag_state() == DragState::Dragging {
                    self.helper.cancel();
                    self.core.helper_state = self.helper.drag_state();
                }
                self.core.session.end();
                return false;
            }
            PointerEventKind::Down => {
                self.core.session.begin(event.id, event.x());
                if event.id == INVALID_POINTER {
                    return false;
                }
            }
            PointerEventKind::Move => {}
        }
        let intercepted = self.helper.should_intercept_touch_event(event, &mut self.core);
        intercepted
            || self
                .helper
                .is_view_under(self.core.primary.bounds(), event.x() as i32, event.y() as i32)
    }

    /// Handles an event of an intercepted stream. Returns whether the event
    /// landed on either surface.
    pub fn on_touch_event(&mut self, event: &PointerEvent) -> bool {
        if event.kind == PointerEventKind::Down {
            self.core.session.begin(event.id, event.x());
        }
        if !self.core.session.is_active()
            || !self.core.is_measured()
            || self.is_closed()
            || !self.core.config.touch_enabled
        {
            if !self.core.config.touch_enabled {
                log::warn!("pointer {:?} ignored: touch is disabled", event.kind);
            }
            if event.is_terminal() {
                self.core.session.end();
            }
            return false;
        }

        self.helper.process_touch_event(event, &mut self.core);
        let released = self.core.pending_command.take();

        let x = event.x() as i32;
        let y = event.y() as i32;
        // Hit tests use the drawn rectangles, so the empty area around a
        // scaled-down primary surface does not count.
        let drag_hit = self.core.primary.is_hit(x, y);
        let second_hit = self.core.secondary.is_hit(x, y);

        let tapped = if event.kind == PointerEventKind::Up {
            self.tap_command(event, drag_hit)
        } else {
            None
        };
        // A recognised tap replaces whatever the release decided.
        if let Some(command) = tapped.or(released) {
            if let Err(err) = self.run_command(command) {
                log::warn!("{command:?} after pointer {:?} failed: {err}", event.kind);
            }
        }

        if self.is_maximized() {
            self.core.primary.dispatch_pointer_event(event);
        } else {
            let cancel = event.with_kind(PointerEventKind::Cancel);
            self.core.primary.dispatch_pointer_event(&cancel);
        }

        if event.is_terminal() {
            self.core.session.end();
        }
        drag_hit || second_hit
    }

    fn tap_command(&self, event: &PointerEvent, drag_hit: bool) -> Option<PanelCommand> {
        let delta = self.core.session.horizontal_delta(event.x()).abs();
        if delta >= MIN_SLIDING_DISTANCE_ON_CLICK || !drag_hit {
            return None;
        }
        match self.core.state {
            PanelState::Minimized if self.core.config.click_to_maximize => {
                Some(PanelCommand::Maximize)
            }
            PanelState::Maximized if self.core.config.click_to_minimize => {
                Some(PanelCommand::Minimize)
            }
            _ => None,
        }
    }

    /// Advances the settle animation by one frame. Returns `true` while more
    /// frames are needed.
    pub fn compute_scroll(&mut self) -> bool {
        if !self.core.is_measured() {
            log::warn!("settle frame requested before the first layout pass");
            return false;
        }
        if self.helper.continue_settling(&mut self.core) {
            return true;
        }
        if let Some(settle) = self.core.unfinished_settle() {
            log::debug!(
                "settle toward {:?} stopped short; resuming",
                settle.command.target_state()
            );
            let bounds = self.core.primary.bounds();
            let resumed = self.helper.smooth_slide_view_to(bounds, settle.left, settle.top);
            self.core.helper_state = self.helper.drag_state();
            if resumed {
                return true;
            }
        }
        self.core.finish_settle();
        false
    }

    /// Layout pass with the panel's new size.
    pub fn on_layout(&mut self, size: IntSize) {
        self.core.layout(size);
    }
}
