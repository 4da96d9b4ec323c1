//! Drag interaction engine for a snap-to-edge draggable panel.
//!
//! A primary surface is dragged vertically between a maximized (top-docked,
//! full size) and a minimized (bottom-right-docked, shrunk) rest position,
//! and horizontally off either edge to dismiss it. The engine maps drag
//! progress to geometry through a [`GeometryStrategy`], keeps an explicit
//! [`PanelState`], and reports transitions to a [`DraggableListener`].

mod config;
mod error;
pub mod gesture_constants;
mod listener;
mod panel;
mod state;
pub mod strategy;
mod view;

pub use config::*;
pub use error::PanelError;
pub use listener::DraggableListener;
pub use panel::{
    ContentAttacher, DraggablePanel, PanelSettings, PanelSlot, DEFAULT_PANEL_MARGIN,
    DEFAULT_TOP_VIEW_HEIGHT,
};
pub use state::{DragSession, PanelCommand, PanelState};
pub use strategy::{GeometryStrategy, ResizeStrategy, ScaleStrategy, StrategyKind, StrategyMetrics};
pub use view::DraggableView;

pub use dragpanel_foundation::{
    DragCallback, DragHelper, DragState, PointerEvent, PointerEventKind, PointerId, ViewSurface,
    INVALID_POINTER,
};
pub use dragpanel_ui_graphics::{GraphicsLayer, IntRect, IntSize, Point, Rect};

pub mod prelude {
    pub use crate::config::DraggableViewConfig;
    pub use crate::error::PanelError;
    pub use crate::listener::DraggableListener;
    pub use crate::panel::{ContentAttacher, DraggablePanel, PanelSlot};
    pub use crate::state::PanelState;
    pub use crate::strategy::GeometryStrategy;
    pub use crate::view::DraggableView;
    pub use dragpanel_foundation::prelude::*;
    pub use dragpanel_ui_graphics::prelude::*;
}
