use dragpanel_foundation::ViewSurface;
use dragpanel_ui_graphics::IntSize;

use super::{GeometryStrategy, StrategyKind, StrategyMetrics};

/// Shrinks the surface with a compositing scale around a pivot placed near
/// its bottom-right corner.
///
/// Layout bounds keep their full size, so boundary checks compare raw
/// edges. The docked position is only approximated: the surface ends up
/// wherever scaling around the pivot puts it.
#[derive(Debug)]
pub struct ScaleStrategy {
    metrics: StrategyMetrics,
}

impl ScaleStrategy {
    pub fn new(metrics: StrategyMetrics) -> Self {
        Self { metrics }
    }
}

impl GeometryStrategy for ScaleStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Scale
    }

    fn metrics(&self) -> &StrategyMetrics {
        &self.metrics
    }

    fn metrics_mut(&mut self) -> &mut StrategyMetrics {
        &mut self.metrics
    }

    fn is_view_at_right(&self, view: &dyn ViewSurface, parent: IntSize) -> bool {
        view.right() == parent.width
    }

    fn is_view_at_bottom(&self, view: &dyn ViewSurface, parent: IntSize) -> bool {
        view.bottom() == parent.height
    }

    fn is_next_to_left_bound(&self, view: &dyn ViewSurface, parent: IntSize) -> bool {
        ((view.right() - self.metrics.margin_right) as f32) < parent.width as f32 * 0.6
    }

    fn is_next_to_right_bound(&self, view: &dyn ViewSurface, parent: IntSize) -> bool {
        ((view.right() - self.metrics.margin_right) as f32) > parent.width as f32 * 1.25
    }

    fn min_height_plus_margin(&self, view: &dyn ViewSurface) -> i32 {
        view.height()
    }

    fn min_width_plus_margin_right(&self, view: &dyn ViewSurface) -> i32 {
        self.original_width(view)
    }

    fn update_scale(&self, view: &mut dyn ViewSurface, progress: f32) {
        view.set_scale_x(1.0 - progress / self.metrics.x_scale_factor);
        view.set_scale_y(1.0 - progress / self.metrics.y_scale_factor);
    }

    fn update_position(&self, view: &mut dyn ViewSurface, _progress: f32) {
        let pivot_x = (view.width() - self.metrics.margin_right) as f32;
        let pivot_y = (view.height() - self.metrics.margin_bottom) as f32;
        view.set_pivot_x(pivot_x);
        view.set_pivot_y(pivot_y);
    }
}
