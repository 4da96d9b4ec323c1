//! Geometry strategies: how drag progress turns into size and position.
//!
//! Both variants answer the same questions about the primary surface but
//! change it differently. [`ScaleStrategy`] applies a compositing scale
//! around an offset pivot and never touches layout. [`ResizeStrategy`]
//! rewrites the requested size and the laid-out bounds, for content that
//! cannot be drawn through a compositing transform.
//!
//! Pixel rule: every float-to-pixel conversion truncates toward zero.

mod resize;
mod scale;

use std::cell::Cell;

use dragpanel_foundation::ViewSurface;
use dragpanel_ui_graphics::IntSize;

use crate::config::DraggableViewConfig;

pub use resize::ResizeStrategy;
pub use scale::ScaleStrategy;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyKind {
    Scale,
    Resize,
}

/// Margins, scale factors and the frozen original size shared by every
/// strategy.
#[derive(Debug, Default)]
pub struct StrategyMetrics {
    pub margin_right: i32,
    pub margin_bottom: i32,
    pub x_scale_factor: f32,
    pub y_scale_factor: f32,
    original_width: Cell<i32>,
    original_height: Cell<i32>,
}

impl StrategyMetrics {
    pub fn from_config(config: &DraggableViewConfig) -> Self {
        Self {
            margin_right: config.margin_right,
            margin_bottom: config.margin_bottom,
            x_scale_factor: config.x_scale_factor,
            y_scale_factor: config.y_scale_factor,
            original_width: Cell::new(0),
            original_height: Cell::new(0),
        }
    }

    /// Width before any transformation. Captured from the measured width the
    /// first time it is asked for, then never re-derived.
    pub fn original_width(&self, view: &dyn ViewSurface) -> i32 {
        if self.original_width.get() == 0 {
            self.original_width.set(view.measured_size().width);
        }
        self.original_width.get()
    }

    /// Height before any transformation; same capture rule as the width.
    pub fn original_height(&self, view: &dyn ViewSurface) -> i32 {
        if self.original_height.get() == 0 {
            self.original_height.set(view.measured_size().height);
        }
        self.original_height.get()
    }

    pub fn captured_size(&self) -> IntSize {
        IntSize::new(self.original_width.get(), self.original_height.get())
    }

    /// Carries an already frozen baseline over into a replacement strategy.
    pub fn adopt_captured_size(&self, size: IntSize) {
        if self.original_width.get() == 0 {
            self.original_width.set(size.width);
        }
        if self.original_height.get() == 0 {
            self.original_height.set(size.height);
        }
    }

    fn set_original_height(&self, height: i32) {
        self.original_height.set(height);
    }
}

/// Maps drag progress to the primary surface's presentation and answers the
/// boundary questions the engine uses to pick the next state.
///
/// `parent` is the size of the panel hosting the surface.
pub trait GeometryStrategy {
    fn kind(&self) -> StrategyKind;

    fn metrics(&self) -> &StrategyMetrics;

    fn metrics_mut(&mut self) -> &mut StrategyMetrics;

    fn is_view_at_right(&self, view: &dyn ViewSurface, parent: IntSize) -> bool;

    fn is_view_at_bottom(&self, view: &dyn ViewSurface, parent: IntSize) -> bool;

    /// Whether a horizontal release should snap the surface off the left edge.
    fn is_next_to_left_bound(&self, view: &dyn ViewSurface, parent: IntSize) -> bool;

    /// Whether a horizontal release should snap the surface off the right edge.
    fn is_next_to_right_bound(&self, view: &dyn ViewSurface, parent: IntSize) -> bool;

    /// Height of the minimized footprint, bottom margin included.
    fn min_height_plus_margin(&self, view: &dyn ViewSurface) -> i32;

    /// Width of the minimized footprint used to compute the docked x.
    fn min_width_plus_margin_right(&self, view: &dyn ViewSurface) -> i32;

    /// Applies the size for `progress` in `[0, 1]`.
    fn update_scale(&self, view: &mut dyn ViewSurface, progress: f32);

    /// Applies the position for `progress` in `[0, 1]`. Runs after
    /// [`GeometryStrategy::update_scale`] for the same frame.
    fn update_position(&self, view: &mut dyn ViewSurface, progress: f32);

    fn is_view_at_top(&self, view: &dyn ViewSurface) -> bool {
        view.top() == 0
    }

    /// Whether the visual centre of the surface is in the upper half of the
    /// parent.
    fn is_above_the_middle(&self, view: &dyn ViewSurface, parent: IntSize) -> bool {
        let centre_y = view.y() + view.height() as f32 * 0.5;
        centre_y < parent.height as f32 * 0.5
    }

    /// Sets the docked height. A positive value becomes the original height
    /// baseline; non-positive values are ignored.
    fn set_view_height(&mut self, view: &mut dyn ViewSurface, height: i32) {
        if height > 0 {
            self.metrics().set_original_height(height);
            let mut requested = view.requested_size();
            requested.height = height;
            view.set_requested_size(requested);
        }
    }

    fn original_width(&self, view: &dyn ViewSurface) -> i32 {
        self.metrics().original_width(view)
    }

    fn original_height(&self, view: &dyn ViewSurface) -> i32 {
        self.metrics().original_height(view)
    }

    fn margin_right(&self) -> i32 {
        self.metrics().margin_right
    }

    fn margin_bottom(&self) -> i32 {
        self.metrics().margin_bottom
    }
}

/// Builds the strategy selected by the configuration.
pub fn create_strategy(config: &DraggableViewConfig) -> Box<dyn GeometryStrategy> {
    let metrics = StrategyMetrics::from_config(config);
    match config.strategy_kind() {
        StrategyKind::Scale => Box::new(ScaleStrategy::new(metrics)),
        StrategyKind::Resize => Box::new(ResizeStrategy::new(metrics)),
    }
}

#[cfg(test)]
#[path = "../tests/strategy_tests.rs"]
mod tests;
