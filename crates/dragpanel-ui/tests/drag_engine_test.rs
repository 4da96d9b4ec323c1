//! End-to-end gestures against the scale strategy: vertical docking,
//! horizontal dismissal, flings and programmatic transitions.

use dragpanel_testing::{ListenerEvent, PanelTestRule};
use dragpanel_ui::{
    DragHelper, DraggableViewConfig, IntRect, IntSize, PanelState, PointerEventKind, ViewSurface,
};

const PARENT: IntSize = IntSize::new(1000, 1800);
const PRIMARY: IntSize = IntSize::new(1000, 600);

fn rule() -> PanelTestRule {
    PanelTestRule::new(PARENT, PRIMARY, DraggableViewConfig::default())
}

fn minimized_rule() -> PanelTestRule {
    let mut rule = rule();
    rule.view_mut().minimize().unwrap();
    rule.pump_until_idle();
    assert_eq!(rule.state(), PanelState::Minimized);
    rule.clear_events();
    rule
}

#[test]
fn first_layout_places_surfaces_stacked() {
    let rule = rule();
    assert_eq!(rule.state(), PanelState::Maximized);
    assert_eq!(rule.view().primary().bounds(), IntRect::new(0, 0, 1000, 600));
    assert_eq!(rule.view().secondary().bounds(), IntRect::new(0, 600, 1000, 1800));
    assert_eq!(rule.view().background_alpha(), 100);
}

#[test]
fn drag_below_the_middle_minimizes() {
    let mut rule = rule();
    rule.drag(500.0, 300.0, 500.0, 1100.0);

    assert_eq!(rule.state(), PanelState::Dragging);
    assert_eq!(rule.view().pending_rest_state(), Some(PanelState::Minimized));
    assert_eq!(rule.events(), vec![ListenerEvent::Minimized]);

    rule.pump_until_idle();
    let view = rule.view();
    assert_eq!(view.state(), PanelState::Minimized);
    assert_eq!(view.primary().bounds(), IntRect::new(0, 1200, 1000, 1800));
    assert_eq!(view.primary().scale_x(), 0.5);
    assert_eq!(view.primary().scale_y(), 0.5);
    assert_eq!(view.vertical_drag_offset(), 1.0);
    assert_eq!(view.background_alpha(), 0);
    assert_eq!(view.secondary().alpha(), 0.0);
}

#[test]
fn drag_above_the_middle_returns_to_maximized() {
    let mut rule = rule();
    rule.drag(500.0, 300.0, 500.0, 700.0);
    assert_eq!(rule.events(), vec![ListenerEvent::Maximized]);

    rule.pump_until_idle();
    assert_eq!(rule.state(), PanelState::Maximized);
    assert_eq!(rule.view().primary().bounds(), IntRect::new(0, 0, 1000, 600));
    assert_eq!(rule.view().primary().scale_x(), 1.0);
}

#[test]
fn presentation_follows_the_pointer() {
    let mut rule = rule();
    rule.press(500.0, 300.0);
    rule.move_to(500.0, 600.0);
    rule.move_to(500.0, 900.0);

    let view = rule.view();
    assert_eq!(view.state(), PanelState::Dragging);
    assert_eq!(view.primary().top(), 600);
    assert_eq!(view.vertical_drag_offset(), 0.5);
    assert_eq!(view.primary().scale_x(), 0.75);
    assert_eq!(view.secondary().alpha(), 0.5);
    assert_eq!(view.secondary().y(), 1200.0);
    assert_eq!(view.background_alpha(), 50);
    assert_eq!(view.primary().alpha(), 1.0);
    assert!(rule.events().is_empty());
}

#[test]
fn content_sees_a_cancel_once_the_panel_leaves_maximized() {
    let mut rule = rule();
    rule.press(500.0, 300.0);
    rule.move_to(500.0, 400.0);

    let kinds: Vec<_> = rule
        .view()
        .primary()
        .dispatched_events()
        .iter()
        .map(|event| event.kind)
        .collect();
    assert_eq!(kinds, vec![PointerEventKind::Down, PointerEventKind::Cancel]);
}

#[test]
fn upward_fling_maximizes_from_low_position() {
    let mut rule = minimized_rule();
    rule.helper_mut().set_release_velocity(0.0, -1500.0);
    rule.drag(500.0, 1500.0, 500.0, 1300.0);
    assert_eq!(rule.events(), vec![ListenerEvent::Maximized]);

    rule.pump_until_idle();
    assert_eq!(rule.state(), PanelState::Maximized);
    assert_eq!(rule.view().primary().top(), 0);
}

#[test]
fn downward_fling_minimizes_from_high_position() {
    let mut rule = rule();
    rule.helper_mut().set_release_velocity(0.0, 1000.0);
    rule.drag(500.0, 300.0, 500.0, 500.0);
    assert_eq!(rule.events(), vec![ListenerEvent::Minimized]);

    rule.pump_until_idle();
    assert_eq!(rule.state(), PanelState::Minimized);
}

#[test]
fn small_vertical_movement_keeps_minimized_panel_docked() {
    let mut rule = minimized_rule();
    rule.press(500.0, 1500.0);
    rule.move_to(500.0, 1490.0);
    assert_eq!(rule.view().primary().top(), 1200);
    assert_eq!(rule.state(), PanelState::Minimized);
}

#[test]
fn horizontal_drag_past_left_bound_closes_to_left() {
    let mut rule = minimized_rule();
    rule.drag(500.0, 1500.0, 0.0, 1500.0);

    assert_eq!(rule.view().primary().left(), -500);
    assert_eq!(rule.view().primary().top(), 1200);
    assert_eq!(rule.view().primary().alpha(), 0.5);
    assert_eq!(rule.events(), vec![ListenerEvent::ClosedToLeft]);

    rule.pump_until_idle();
    assert_eq!(rule.state(), PanelState::ClosedLeft);
    assert!(rule.view().is_closed());
    assert_eq!(rule.view().is_closed_at_left(), Ok(true));
    assert_eq!(rule.view().is_closed_at_right(), Ok(false));
}

#[test]
fn horizontal_fling_closes_to_right() {
    let mut rule = minimized_rule();
    rule.helper_mut().set_release_velocity(1500.0, 0.0);
    rule.drag(500.0, 1500.0, 600.0, 1500.0);
    assert_eq!(rule.events(), vec![ListenerEvent::ClosedToRight]);

    rule.pump_until_idle();
    assert_eq!(rule.state(), PanelState::ClosedRight);
    assert_eq!(rule.view().primary().left(), 1000);
    assert_eq!(rule.view().is_closed_at_right(), Ok(true));
    assert_eq!(rule.view().primary().alpha(), 1.0);
}

#[test]
fn short_horizontal_drag_docks_again() {
    let mut rule = minimized_rule();
    rule.drag(500.0, 1500.0, 400.0, 1500.0);
    assert_eq!(rule.events(), vec![ListenerEvent::Minimized]);

    rule.pump_until_idle();
    assert_eq!(rule.state(), PanelState::Minimized);
    assert_eq!(rule.view().primary().left(), 0);
    assert_eq!(rule.view().primary().alpha(), 1.0);
}

#[test]
fn closed_panel_ignores_touch_until_reopened() {
    let mut rule = rule();
    rule.view_mut().close_to_right().unwrap();
    rule.pump_until_idle();
    assert_eq!(rule.state(), PanelState::ClosedRight);

    assert!(!rule.press(1100.0, 1500.0));
    assert!(!rule.release(1100.0, 1500.0));

    rule.view_mut().maximize().unwrap();
    rule.pump_until_idle();
    assert_eq!(rule.state(), PanelState::Maximized);
    assert_eq!(rule.view().primary().bounds(), IntRect::new(0, 0, 1000, 600));
    assert_eq!(
        rule.events(),
        vec![ListenerEvent::ClosedToRight, ListenerEvent::Maximized]
    );
}

#[test]
fn close_to_left_targets_off_screen_by_original_width() {
    let mut rule = rule();
    rule.view_mut().close_to_left().unwrap();
    assert_eq!(rule.view().drag_helper().slide_requests(), &[(-1000, 1200)]);
    assert_eq!(rule.events(), vec![ListenerEvent::ClosedToLeft]);

    rule.pump_until_idle();
    assert_eq!(rule.state(), PanelState::ClosedLeft);
    assert_eq!(rule.view().primary().right(), 0);
}

#[test]
fn maximize_while_maximized_notifies_without_moving() {
    let mut rule = rule();
    rule.view_mut().maximize().unwrap();

    assert_eq!(rule.state(), PanelState::Maximized);
    assert_eq!(rule.view().pending_rest_state(), None);
    assert_eq!(rule.events(), vec![ListenerEvent::Maximized]);
    assert_eq!(rule.pump_until_idle(), 1);
    assert_eq!(rule.view().primary().bounds(), IntRect::new(0, 0, 1000, 600));
}

#[test]
fn minimize_while_minimized_notifies_again() {
    let mut rule = minimized_rule();
    rule.view_mut().minimize().unwrap();
    assert_eq!(rule.state(), PanelState::Minimized);
    assert_eq!(rule.events(), vec![ListenerEvent::Minimized]);
}

#[test]
fn new_request_replaces_running_settle() {
    let mut rule = rule();
    rule.view_mut().minimize().unwrap();
    rule.frame();
    rule.frame();
    assert_eq!(rule.state(), PanelState::Dragging);

    rule.view_mut().maximize().unwrap();
    assert_eq!(rule.view().pending_rest_state(), Some(PanelState::Maximized));

    rule.pump_until_idle();
    assert_eq!(rule.state(), PanelState::Maximized);
    assert_eq!(
        rule.events(),
        vec![ListenerEvent::Minimized, ListenerEvent::Maximized]
    );
}

#[test]
fn tap_below_the_panel_leaves_a_running_settle_alone() {
    let mut rule = rule();
    rule.view_mut().minimize().unwrap();
    rule.frame();
    rule.frame();
    assert_eq!(rule.view().primary().top(), 300);

    assert!(!rule.press(500.0, 1750.0));
    assert!(!rule.release(500.0, 1750.0));
    assert_eq!(rule.view().drag_helper().cancel_count(), 0);
    assert!(rule.view().drag_helper().is_settling());

    rule.pump_until_idle();
    assert_eq!(rule.state(), PanelState::Minimized);
    assert_eq!(rule.view().primary().bounds(), IntRect::new(0, 1200, 1000, 1800));
    assert_eq!(rule.events(), vec![ListenerEvent::Minimized]);
}

#[test]
fn settle_abandoned_by_the_helper_is_resumed() {
    let mut rule = rule();
    rule.view_mut().minimize().unwrap();
    rule.frame();
    rule.frame();

    rule.helper_mut().cancel();
    assert!(!rule.view().drag_helper().is_settling());
    assert!(rule.frame());
    assert_eq!(rule.state(), PanelState::Dragging);
    assert_eq!(rule.view().pending_rest_state(), Some(PanelState::Minimized));

    rule.pump_until_idle();
    assert_eq!(rule.state(), PanelState::Minimized);
    assert_eq!(rule.view().primary().top(), 1200);
    assert_eq!(rule.view().drag_helper().slide_requests(), &[(0, 1200), (0, 1200)]);
    assert_eq!(rule.events(), vec![ListenerEvent::Minimized]);
}

#[test]
fn cancelled_gesture_settles_like_a_release() {
    let mut rule = rule();
    rule.press(500.0, 300.0);
    rule.move_to(500.0, 380.0);
    rule.cancel(500.0, 380.0);
    assert_eq!(rule.events(), vec![ListenerEvent::Maximized]);

    rule.pump_until_idle();
    assert_eq!(rule.state(), PanelState::Maximized);
}

#[test]
fn press_outside_the_primary_surface_is_not_intercepted() {
    let mut rule = rule();
    assert!(!rule.press(500.0, 1700.0));
    assert!(!rule.move_to(500.0, 1000.0));
    assert!(!rule.release(500.0, 1000.0));
    assert_eq!(rule.view().primary().top(), 0);
    assert!(rule.events().is_empty());
}

#[test]
fn operations_require_a_layout_pass() {
    let mut rule = PanelTestRule::unmeasured(PARENT, PRIMARY, DraggableViewConfig::default());
    let err = rule.view_mut().maximize().unwrap_err();
    assert!(err.is_invalid_state());
    assert!(rule.view().is_closed_at_left().is_err());
    assert!(rule.view_mut().slide_horizontally(0.5, 0.0, 1000).is_err());
    assert!(!rule.view_mut().compute_scroll());
    assert!(rule.events().is_empty());
}

#[test]
fn disabled_touch_ignores_gestures() {
    let mut rule = PanelTestRule::new(
        PARENT,
        PRIMARY,
        DraggableViewConfig::default().with_touch_enabled(false),
    );
    rule.drag(500.0, 300.0, 500.0, 1100.0);
    assert_eq!(rule.state(), PanelState::Maximized);
    assert_eq!(rule.view().primary().top(), 0);
    assert!(rule.events().is_empty());
}

#[test]
fn horizontal_alpha_effect_can_be_disabled() {
    let mut rule = PanelTestRule::new(
        PARENT,
        PRIMARY,
        DraggableViewConfig::default().with_horizontal_alpha_effect(false),
    );
    rule.view_mut().minimize().unwrap();
    rule.pump_until_idle();

    rule.press(500.0, 1500.0);
    rule.move_to(200.0, 1500.0);
    assert_eq!(rule.view().primary().left(), -300);
    assert_eq!(rule.view().primary().alpha(), 1.0);
}
