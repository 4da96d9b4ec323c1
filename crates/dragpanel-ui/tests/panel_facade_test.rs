use std::cell::RefCell;
use std::rc::Rc;

use dragpanel_testing::{FakeDragHelper, FakeSurface, ListenerEvent, RecordingListener};
use dragpanel_ui::{
    ContentAttacher, DraggablePanel, GeometryStrategy, IntRect, IntSize, PanelError,
    PanelSettings, PanelSlot, PanelState, ViewSurface,
};

const PARENT: IntSize = IntSize::new(1000, 1800);

#[derive(Clone, Default)]
struct TestAttacher {
    attached: Rc<RefCell<Vec<(PanelSlot, &'static str)>>>,
}

impl ContentAttacher<&'static str> for TestAttacher {
    type Surface = FakeSurface;

    fn attach(&mut self, slot: PanelSlot, content: &'static str) -> FakeSurface {
        self.attached.borrow_mut().push((slot, content));
        match slot {
            PanelSlot::Top => FakeSurface::new(IntSize::new(1000, 600)),
            PanelSlot::Bottom => FakeSurface::new(IntSize::new(1000, 1200)),
        }
    }
}

type TestPanel = DraggablePanel<&'static str, TestAttacher, FakeDragHelper>;

fn wired_panel(attacher: &TestAttacher) -> TestPanel {
    let mut panel = TestPanel::new(FakeDragHelper::new());
    panel.set_attacher(attacher.clone());
    panel.set_top_content("video");
    panel.set_bottom_content("details");
    panel
}

fn settle(panel: &mut TestPanel) {
    let view = panel.view_mut().unwrap();
    while view.compute_scroll() {}
    view.on_layout(PARENT);
}

#[test]
fn initialization_without_attacher_fails_fast() {
    let mut panel = TestPanel::new(FakeDragHelper::new());
    panel.set_top_content("video");
    panel.set_bottom_content("details");

    let err = panel.initialize_view().unwrap_err();
    assert!(err.is_configuration());
    assert!(!panel.is_initialized());
}

#[test]
fn initialization_without_content_attaches_nothing() {
    let attacher = TestAttacher::default();
    let mut panel = TestPanel::new(FakeDragHelper::new());
    panel.set_attacher(attacher.clone());
    panel.set_top_content("video");

    assert!(panel.initialize_view().unwrap_err().is_configuration());
    assert!(attacher.attached.borrow().is_empty());

    // The missing piece can still be supplied.
    panel.set_bottom_content("details");
    panel.initialize_view().unwrap();
    assert_eq!(
        *attacher.attached.borrow(),
        vec![(PanelSlot::Top, "video"), (PanelSlot::Bottom, "details")]
    );
}

#[test]
fn operations_before_initialization_are_invalid() {
    let mut panel = TestPanel::new(FakeDragHelper::new());
    assert!(panel.maximize().unwrap_err().is_invalid_state());
    assert!(panel.close_to_right().unwrap_err().is_invalid_state());
    assert!(panel.slide_horizontally(0.5, 0.0, 1000).is_err());
    assert!(panel.is_closed_at_left().is_err());
    assert!(panel.state().is_err());
}

#[test]
fn second_initialization_is_rejected() {
    let attacher = TestAttacher::default();
    let mut panel = wired_panel(&attacher);
    panel.initialize_view().unwrap();

    let err = panel.initialize_view().unwrap_err();
    assert!(err.is_invalid_state());
    assert_eq!(attacher.attached.borrow().len(), 2);
}

#[test]
fn facade_defaults_apply_to_the_engine() {
    let attacher = TestAttacher::default();
    let mut panel = wired_panel(&attacher);
    panel.initialize_view().unwrap();

    let view = panel.view_mut().unwrap();
    let config = view.config().clone();
    assert_eq!(config.top_view_height, Some(200));
    assert_eq!(config.margin_right, 0);
    assert_eq!(config.margin_bottom, 0);
    assert_eq!(config.x_scale_factor, 2.0);
    assert!(!config.top_view_resize);

    view.on_layout(PARENT);
    assert_eq!(view.primary().bounds(), IntRect::new(0, 0, 1000, 200));
    assert_eq!(view.secondary().bounds(), IntRect::new(0, 200, 1000, 1800));
}

#[test]
fn listener_registered_before_initialization_is_kept() {
    let attacher = TestAttacher::default();
    let listener = RecordingListener::new();
    let mut panel = wired_panel(&attacher);
    panel.set_draggable_listener(listener.clone());
    panel.initialize_view().unwrap();
    panel.view_mut().unwrap().on_layout(PARENT);

    panel.minimize().unwrap();
    settle(&mut panel);
    assert_eq!(panel.state(), Ok(PanelState::Minimized));
    assert_eq!(panel.is_minimized(), Ok(true));
    assert_eq!(panel.view().unwrap().primary().top(), 1600);

    panel.close_to_right().unwrap();
    settle(&mut panel);
    assert_eq!(panel.is_closed_at_right(), Ok(true));
    assert_eq!(
        listener.events(),
        vec![ListenerEvent::Minimized, ListenerEvent::ClosedToRight]
    );
}

#[test]
fn settings_are_forwarded_after_initialization() {
    let attacher = TestAttacher::default();
    let mut panel = DraggablePanel::with_settings(
        FakeDragHelper::new(),
        PanelSettings::default().with_top_view_resize(true),
    );
    panel.set_attacher(attacher.clone());
    panel.set_top_content("video");
    panel.set_bottom_content("details");
    panel.initialize_view().unwrap();

    panel.set_click_to_maximize_enabled(true);
    panel.set_top_view_margin_right(30);
    panel.set_touch_enabled(false);

    let config = panel.view().unwrap().config();
    assert!(config.top_view_resize);
    assert!(config.click_to_maximize);
    assert_eq!(config.margin_right, 30);
    assert!(!config.touch_enabled);
    assert_eq!(panel.view().unwrap().strategy().margin_right(), 30);
    assert!(panel.settings().click_to_maximize);
}

#[test]
fn unusable_scale_factors_are_configuration_errors() {
    let attacher = TestAttacher::default();
    let mut panel = TestPanel::with_settings(
        FakeDragHelper::new(),
        PanelSettings::default()
            .with_scale_factors(2.0, 0.0)
            .with_top_view_resize(true),
    );
    panel.set_attacher(attacher.clone());
    panel.set_top_content("video");
    panel.set_bottom_content("details");

    assert!(panel.initialize_view().unwrap_err().is_configuration());
    assert!(attacher.attached.borrow().is_empty());
    assert!(!panel.is_initialized());

    panel.set_y_scale_factor(2.0).unwrap();
    panel.initialize_view().unwrap();
    assert!(panel.set_x_scale_factor(f32::NAN).unwrap_err().is_configuration());
    assert!(panel.set_y_scale_factor(-1.0).unwrap_err().is_configuration());
    assert_eq!(panel.settings().x_scale_factor, 2.0);
    assert_eq!(panel.view().unwrap().config().y_scale_factor, 2.0);

    panel.view_mut().unwrap().on_layout(PARENT);
    panel.minimize().unwrap();
    settle(&mut panel);
    assert_eq!(panel.state(), Ok(PanelState::Minimized));
}

#[test]
fn errors_describe_the_problem() {
    let configuration = PanelError::Configuration {
        reason: "content is missing",
    };
    assert_eq!(
        configuration.to_string(),
        "invalid panel configuration: content is missing"
    );
    let state = PanelError::InvalidState {
        reason: "not measured",
    };
    assert_eq!(state.to_string(), "invalid panel state: not measured");
}
