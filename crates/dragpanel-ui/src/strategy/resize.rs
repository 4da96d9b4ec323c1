use dragpanel_foundation::ViewSurface;
use dragpanel_ui_graphics::{IntRect, IntSize};

use super::{GeometryStrategy, StrategyKind, StrategyMetrics};

/// Shrinks the surface by rewriting its requested size and laid-out bounds.
///
/// The margins are baked into the shrunk position, so boundary checks add
/// them back before comparing against the parent edges.
#[derive(Debug)]
pub struct ResizeStrategy {
    metrics: StrategyMetrics,
}

impl ResizeStrategy {
    pub fn new(metrics: StrategyMetrics) -> Self {
        Self { metrics }
    }

    fn view_right_position(&self, view: &dyn ViewSurface, progress: f32) -> i32 {
        (self.original_width(view) as f32 - self.metrics.margin_right as f32 * progress) as i32
    }
}

impl GeometryStrategy for ResizeStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Resize
    }

    fn metrics(&self) -> &StrategyMetrics {
        &self.metrics
    }

    fn metrics_mut(&mut self) -> &mut StrategyMetrics {
        &mut self.metrics
    }

    fn is_view_at_right(&self, view: &dyn ViewSurface, parent: IntSize) -> bool {
        view.right() + self.metrics.margin_right == parent.width
    }

    fn is_view_at_bottom(&self, view: &dyn ViewSurface, parent: IntSize) -> bool {
        view.bottom() + self.metrics.margin_bottom == parent.height
    }

    fn is_next_to_left_bound(&self, view: &dyn ViewSurface, parent: IntSize) -> bool {
        ((view.left() - self.metrics.margin_right) as f32) < parent.width as f32 * 0.05
    }

    fn is_next_to_right_bound(&self, view: &dyn ViewSurface, parent: IntSize) -> bool {
        ((view.left() - self.metrics.margin_right) as f32) > parent.width as f32 * 0.75
    }

    fn min_height_plus_margin(&self, view: &dyn ViewSurface) -> i32 {
        let original = self.original_height(view) as f32;
        (original * (1.0 - 1.0 / self.metrics.y_scale_factor) + self.metrics.margin_bottom as f32)
            as i32
    }

    fn min_width_plus_margin_right(&self, view: &dyn ViewSurface) -> i32 {
        let original = self.original_width(view) as f32;
        (original * (1.0 - 1.0 / self.metrics.x_scale_factor) + self.metrics.margin_right as f32)
            as i32
    }

    fn update_scale(&self, view: &mut dyn ViewSurface, progress: f32) {
        let width_ratio = 1.0 - progress / self.metrics.x_scale_factor;
        let height_ratio = 1.0 - progress / self.metrics.y_scale_factor;
        let width = (self.original_width(view) as f32 * width_ratio) as i32;
        let height = (self.original_height(view) as f32 * height_ratio) as i32;
        view.set_requested_size(IntSize::new(width, height));
    }

    fn update_position(&self, view: &mut dyn ViewSurface, progress: f32) {
        let requested = view.requested_size();
        let right = self.view_right_position(view, progress);
        let left = right - requested.width;
        let top = view.top();
        let bottom = top + requested.height;
        view.layout(IntRect::new(left, top, right, bottom));
    }
}
