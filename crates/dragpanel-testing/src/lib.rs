//! Testing utilities and harness for the draggable panel

pub mod helper;
pub mod listener;
pub mod rule;
pub mod surface;

pub use helper::FakeDragHelper;
pub use listener::{ListenerEvent, RecordingListener};
pub use rule::PanelTestRule;
pub use surface::FakeSurface;

pub mod prelude {
    pub use crate::helper::FakeDragHelper;
    pub use crate::listener::{ListenerEvent, RecordingListener};
    pub use crate::rule::PanelTestRule;
    pub use crate::surface::FakeSurface;
}
