use dragpanel_foundation::{PointerEvent, ViewSurface};
use dragpanel_ui_graphics::{GraphicsLayer, IntRect, IntSize};

/// In-memory surface that measures to its requested size, falling back to an
/// intrinsic size per axis, and records the events dispatched to its content.
#[derive(Clone, Debug, Default)]
pub struct FakeSurface {
    intrinsic: IntSize,
    requested: IntSize,
    bounds: IntRect,
    layer: GraphicsLayer,
    dispatched: Vec<PointerEvent>,
}

impl FakeSurface {
    pub fn new(intrinsic: IntSize) -> Self {
        Self {
            intrinsic,
            ..Self::default()
        }
    }

    pub fn with_bounds(mut self, bounds: IntRect) -> Self {
        self.bounds = bounds;
        self
    }

    /// Events forwarded to the embedded content, oldest first.
    pub fn dispatched_events(&self) -> &[PointerEvent] {
        &self.dispatched
    }

    pub fn clear_dispatched_events(&mut self) {
        self.dispatched.clear();
    }
}

impl ViewSurface for FakeSurface {
    fn bounds(&self) -> IntRect {
        self.bounds
    }

    fn layout(&mut self, bounds: IntRect) {
        self.bounds = bounds;
    }

    fn measured_size(&self) -> IntSize {
        let pick = |requested: i32, intrinsic: i32| {
            if requested > 0 {
                requested
            } else {
                intrinsic
            }
        };
        IntSize::new(
            pick(self.requested.width, self.intrinsic.width),
            pick(self.requested.height, self.intrinsic.height),
        )
    }

    fn requested_size(&self) -> IntSize {
        self.requested
    }

    fn set_requested_size(&mut self, size: IntSize) {
        self.requested = size;
    }

    fn layer(&self) -> &GraphicsLayer {
        &self.layer
    }

    fn layer_mut(&mut self) -> &mut GraphicsLayer {
        &mut self.layer
    }

    fn dispatch_pointer_event(&mut self, event: &PointerEvent) -> bool {
        self.dispatched.push(*event);
        true
    }
}
