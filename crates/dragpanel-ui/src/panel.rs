//! Container facade that wires content into a [`DraggableView`].
//!
//! The facade collects content handles, a [`ContentAttacher`] and settings,
//! then builds the engine in [`DraggablePanel::initialize_view`]. Every
//! operation afterwards is a pass-through.

use dragpanel_foundation::{DragHelper, ViewSurface};

use crate::config::{validate_scale_factor, DraggableViewConfig, DEFAULT_SCALE_FACTOR};
use crate::error::PanelError;
use crate::listener::DraggableListener;
use crate::state::PanelState;
use crate::view::DraggableView;

pub const DEFAULT_TOP_VIEW_HEIGHT: i32 = 200;
pub const DEFAULT_PANEL_MARGIN: i32 = 0;

const NOT_INITIALIZED: PanelError = PanelError::InvalidState {
    reason: "panel has not been initialized",
};

/// Where attached content goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelSlot {
    /// The draggable primary surface.
    Top,
    /// The secondary surface revealed below it.
    Bottom,
}

/// Mounts content handles into surfaces the panel can drive.
pub trait ContentAttacher<C> {
    type Surface: ViewSurface;

    fn attach(&mut self, slot: PanelSlot, content: C) -> Self::Surface;
}

/// Facade-level settings. The top height is always explicit here and the
/// margins default to zero.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelSettings {
    pub top_view_height: i32,
    pub margin_right: i32,
    pub margin_bottom: i32,
    pub x_scale_factor: f32,
    pub y_scale_factor: f32,
    pub horizontal_alpha_effect: bool,
    pub click_to_maximize: bool,
    pub click_to_minimize: bool,
    pub touch_enabled: bool,
    pub top_view_resize: bool,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            top_view_height: DEFAULT_TOP_VIEW_HEIGHT,
            margin_right: DEFAULT_PANEL_MARGIN,
            margin_bottom: DEFAULT_PANEL_MARGIN,
            x_scale_factor: DEFAULT_SCALE_FACTOR,
            y_scale_factor: DEFAULT_SCALE_FACTOR,
            horizontal_alpha_effect: true,
            click_to_maximize: false,
            click_to_minimize: false,
            touch_enabled: true,
            top_view_resize: false,
        }
    }
}

impl PanelSettings {
    pub fn with_top_view_height(mut self, height: i32) -> Self {
        self.top_view_height = height;
        self
    }

    pub fn with_margins(mut self, margin_right: i32, margin_bottom: i32) -> Self {
        self.margin_right = margin_right;
        self.margin_bottom = margin_bottom;
        self
    }

    pub fn with_scale_factors(mut self, x_scale_factor: f32, y_scale_factor: f32) -> Self {
        self.x_scale_factor = x_scale_factor;
        self.y_scale_factor = y_scale_factor;
        self
    }

    pub fn with_click_to_maximize(mut self, enabled: bool) -> Self {
        self.click_to_maximize = enabled;
        self
    }

    pub fn with_click_to_minimize(mut self, enabled: bool) -> Self {
        self.click_to_minimize = enabled;
        self
    }

    pub fn with_top_view_resize(mut self, resize: bool) -> Self {
        self.top_view_resize = resize;
        self
    }

    pub fn to_view_config(&self) -> DraggableViewConfig {
        DraggableViewConfig::new()
            .with_top_view_height(self.top_view_height)
            .with_scale_factors(self.x_scale_factor, self.y_scale_factor)
            .with_margins(self.margin_right, self.margin_bottom)
            .with_horizontal_alpha_effect(self.horizontal_alpha_effect)
            .with_click_to_maximize(self.click_to_maximize)
            .with_click_to_minimize(self.click_to_minimize)
            .with_touch_enabled(self.touch_enabled)
            .with_top_view_resize(self.top_view_resize)
    }
}

pub struct DraggablePanel<C, A, H>
where
    A: ContentAttacher<C>,
    H: DragHelper,
{
    settings: PanelSettings,
    attacher: Option<A>,
    top_content: Option<C>,
    bottom_content: Option<C>,
    helper: Option<H>,
    listener: Option<Box<dyn DraggableListener>>,
    view: Option<DraggableView<A::Surface, H>>,
}

impl<C, A, H> DraggablePanel<C, A, H>
where
    A: ContentAttacher<C>,
    H: DragHelper,
{
    pub fn new(helper: H) -> Self {
        Self::with_settings(helper, PanelSettings::default())
    }

    pub fn with_settings(helper: H, settings: PanelSettings) -> Self {
        Self {
            settings,
            attacher: None,
            top_content: None,
            bottom_content: None,
            helper: Some(helper),
            listener: None,
            view: None,
        }
    }

    pub fn settings(&self) -> &PanelSettings {
        &self.settings
    }

    pub fn set_attacher(&mut self, attacher: A) {
        self.attacher = Some(attacher);
    }

    pub fn set_top_content(&mut self, content: C) {
        self.top_content = Some(content);
    }

    pub fn set_bottom_content(&mut self, content: C) {
        self.bottom_content = Some(content);
    }

    pub fn set_draggable_listener(&mut self, listener: impl DraggableListener + 'static) {
        match self.view.as_mut() {
            Some(view) => view.set_draggable_listener(listener),
            None => self.listener = Some(Box::new(listener)),
        }
    }

    /// Attaches both contents and builds the engine.
    ///
    /// Fails with a configuration error, before attaching anything, when the
    /// attacher or either content handle is missing or the settings are
    /// unusable.
    pub fn initialize_view(&mut self) -> Result<(), PanelError> {
        if self.view.is_some() {
            return Err(PanelError::InvalidState {
                reason: "panel is already initialized",
            });
        }
        if self.attacher.is_none() {
            return Err(PanelError::Configuration {
                reason: "a content attacher must be set before initializing the panel",
            });
        }
        if self.top_content.is_none() || self.bottom_content.is_none() {
            return Err(PanelError::Configuration {
                reason: "top and bottom content must be set before initializing the panel",
            });
        }
        let config = self.settings.to_view_config();
        config.validate()?;

        let (Some(attacher), Some(top), Some(bottom), Some(helper)) = (
            self.attacher.as_mut(),
            self.top_content.take(),
            self.bottom_content.take(),
            self.helper.take(),
        ) else {
            return Err(PanelError::InvalidState {
                reason: "panel collaborators were consumed by an earlier initialization",
            });
        };

        let primary = attacher.attach(PanelSlot::Top, top);
        let secondary = attacher.attach(PanelSlot::Bottom, bottom);
        let mut view = DraggableView::new(primary, secondary, helper, config)?;
        if let Some(listener) = self.listener.take() {
            view.set_draggable_listener(listener);
        }
        log::debug!("draggable panel initialized with {:?}", self.settings);
        self.view = Some(view);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.view.is_some()
    }

    pub fn view(&self) -> Result<&DraggableView<A::Surface, H>, PanelError> {
        self.view.as_ref().ok_or(NOT_INITIALIZED)
    }

    pub fn view_mut(&mut self) -> Result<&mut DraggableView<A::Surface, H>, PanelError> {
        self.view.as_mut().ok_or(NOT_INITIALIZED)
    }

    // Settings. Applied at initialization and forwarded once the engine
    // exists.

    pub fn set_top_view_height(&mut self, height: i32) {
        self.settings.top_view_height = height;
        if let Some(view) = self.view.as_mut() {
            view.set_top_view_height(height);
        }
    }

    pub fn set_top_view_margin_right(&mut self, margin: i32) {
        self.settings.margin_right = margin;
        if let Some(view) = self.view.as_mut() {
            view.set_top_view_margin_right(margin);
        }
    }

    pub fn set_top_view_margin_bottom(&mut self, margin: i32) {
        self.settings.margin_bottom = margin;
        if let Some(view) = self.view.as_mut() {
            view.set_top_view_margin_bottom(margin);
        }
    }

    pub fn set_x_scale_factor(&mut self, factor: f32) -> Result<(), PanelError> {
        self.settings.x_scale_factor = validate_scale_factor(factor)?;
        match self.view.as_mut() {
            Some(view) => view.set_x_scale_factor(factor),
            None => Ok(()),
        }
    }

    pub fn set_y_scale_factor(&mut self, factor: f32) -> Result<(), PanelError> {
        self.settings.y_scale_factor = validate_scale_factor(factor)?;
        match self.view.as_mut() {
            Some(view) => view.set_y_scale_factor(factor),
            None => Ok(()),
        }
    }

    pub fn set_enable_horizontal_alpha_effect(&mut self, enabled: bool) {
        self.settings.horizontal_alpha_effect = enabled;
        if let Some(view) = self.view.as_mut() {
            view.set_horizontal_alpha_effect_enabled(enabled);
        }
    }

    pub fn set_click_to_maximize_enabled(&mut self, enabled: bool) {
        self.settings.click_to_maximize = enabled;
        if let Some(view) = self.view.as_mut() {
            view.set_click_to_maximize_enabled(enabled);
        }
    }

    pub fn set_click_to_minimize_enabled(&mut self, enabled: bool) {
        self.settings.click_to_minimize = enabled;
        if let Some(view) = self.view.as_mut() {
            view.set_click_to_minimize_enabled(enabled);
        }
    }

    pub fn set_touch_enabled(&mut self, enabled: bool) {
        self.settings.touch_enabled = enabled;
        if let Some(view) = self.view.as_mut() {
            view.set_touch_enabled(enabled);
        }
    }

    pub fn set_top_view_resize(&mut self, resize: bool) {
        self.settings.top_view_resize = resize;
        if let Some(view) = self.view.as_mut() {
            view.set_top_view_resize(resize);
        }
    }

    // Pass-throughs.

    pub fn maximize(&mut self) -> Result<(), PanelError> {
        self.view_mut()?.maximize()
    }

    pub fn minimize(&mut self) -> Result<(), PanelError> {
        self.view_mut()?.minimize()
    }

    pub fn close_to_left(&mut self) -> Result<(), PanelError> {
        self.view_mut()?.close_to_left()
    }

    pub fn close_to_right(&mut self) -> Result<(), PanelError> {
        self.view_mut()?.close_to_right()
    }

    pub fn slide_horizontally(
        &mut self,
        offset: f32,
        drawer_position: f32,
        width: i32,
    ) -> Result<(), PanelError> {
        self.view_mut()?.slide_horizontally(offset, drawer_position, width)
    }

    pub fn state(&self) -> Result<PanelState, PanelError> {
        Ok(self.view()?.state())
    }

    pub fn is_maximized(&self) -> Result<bool, PanelError> {
        Ok(self.view()?.is_maximized())
    }

    pub fn is_minimized(&self) -> Result<bool, PanelError> {
        Ok(self.view()?.is_minimized())
    }

    pub fn is_closed_at_right(&self) -> Result<bool, PanelError> {
        self.view()?.is_closed_at_right()
    }

    pub fn is_closed_at_left(&self) -> Result<bool, PanelError> {
        self.view()?.is_closed_at_left()
    }
}
