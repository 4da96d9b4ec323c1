//! Configuration of a draggable view.

use crate::error::PanelError;
use crate::strategy::StrategyKind;

pub const DEFAULT_SCALE_FACTOR: f32 = 2.0;
pub const DEFAULT_TOP_VIEW_MARGIN: i32 = 30;

/// Settings applied to a [`crate::DraggableView`] when it is created.
///
/// Pixel values are in the panel's layout pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct DraggableViewConfig {
    /// Height of the primary surface while maximized. `None` keeps the
    /// height the surface measures to.
    pub top_view_height: Option<i32>,
    /// Horizontal division factor applied at the minimized size.
    pub x_scale_factor: f32,
    /// Vertical division factor applied at the minimized size.
    pub y_scale_factor: f32,
    pub margin_right: i32,
    pub margin_bottom: i32,
    /// Fade the primary surface while it is dragged sideways.
    pub horizontal_alpha_effect: bool,
    pub click_to_maximize: bool,
    pub click_to_minimize: bool,
    pub touch_enabled: bool,
    /// Resize the primary surface instead of scaling it.
    pub top_view_resize: bool,
}

impl Default for DraggableViewConfig {
    fn default() -> Self {
        Self {
            top_view_height: None,
            x_scale_factor: DEFAULT_SCALE_FACTOR,
            y_scale_factor: DEFAULT_SCALE_FACTOR,
            margin_right: DEFAULT_TOP_VIEW_MARGIN,
            margin_bottom: DEFAULT_TOP_VIEW_MARGIN,
            horizontal_alpha_effect: true,
            click_to_maximize: false,
            click_to_minimize: false,
            touch_enabled: true,
            top_view_resize: false,
        }
    }
}

impl DraggableViewConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top_view_height(mut self, height: i32) -> Self {
        self.top_view_height = (height > 0).then_some(height);
        self
    }

    pub fn with_scale_factors(mut self, x_scale_factor: f32, y_scale_factor: f32) -> Self {
        self.x_scale_factor = x_scale_factor;
        self.y_scale_factor = y_scale_factor;
        self
    }

    pub fn with_margins(mut self, margin_right: i32, margin_bottom: i32) -> Self {
        self.margin_right = margin_right;
        self.margin_bottom = margin_bottom;
        self
    }

    pub fn with_horizontal_alpha_effect(mut self, enabled: bool) -> Self {
        self.horizontal_alpha_effect = enabled;
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

    pub fn with_touch_enabled(mut self, enabled: bool) -> Self {
        self.touch_enabled = enabled;
        self
    }

    pub fn with_top_view_resize(mut self, resize: bool) -> Self {
        self.top_view_resize = resize;
        self
    }

    /// Rejects settings the geometry math cannot work with.
    pub fn validate(&self) -> Result<(), PanelError> {
        validate_scale_factor(self.x_scale_factor)?;
        validate_scale_factor(self.y_scale_factor)?;
        Ok(())
    }

    pub fn strategy_kind(&self) -> StrategyKind {
        if self.top_view_resize {
            StrategyKind::Resize
        } else {
            StrategyKind::Scale
        }
    }
}

/// Scale factors divide the original size, so they must be finite and
/// positive.
pub(crate) fn validate_scale_factor(factor: f32) -> Result<f32, PanelError> {
    if factor.is_finite() && factor > 0.0 {
        Ok(factor)
    } else {
        Err(PanelError::Configuration {
            reason: "scale factors must be finite and greater than zero",
        })
    }
}
