use dragpanel_ui_graphics::Point;

pub type PointerId = i32;

/// Sentinel used when no pointer is being tracked.
pub const INVALID_POINTER: PointerId = -1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single-pointer event in the coordinate space of the panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    /// Event time in milliseconds, monotonic within a gesture.
    pub time_ms: u64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
            time_ms: 0,
        }
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn with_time(mut self, time_ms: u64) -> Self {
        self.time_ms = time_ms;
        self
    }

    /// Copy of this event carrying a different action, used to cancel
    /// propagation into children without losing position and timing.
    pub fn with_kind(&self, kind: PointerEventKind) -> Self {
        Self { kind, ..*self }
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    /// Whether this event ends the gesture it belongs to.
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, PointerEventKind::Up | PointerEventKind::Cancel)
    }
}
