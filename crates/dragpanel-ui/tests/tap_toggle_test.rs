use dragpanel_testing::{ListenerEvent, PanelTestRule};
use dragpanel_ui::{DraggableViewConfig, IntSize, PanelState, ViewSurface};

const PARENT: IntSize = IntSize::new(1000, 1800);
const PRIMARY: IntSize = IntSize::new(1000, 600);

fn rule_with(config: DraggableViewConfig) -> PanelTestRule {
    PanelTestRule::new(PARENT, PRIMARY, config)
}

fn minimize(rule: &mut PanelTestRule) {
    rule.view_mut().minimize().unwrap();
    rule.pump_until_idle();
    rule.clear_events();
}

#[test]
fn tap_on_minimized_panel_maximizes_once() {
    let mut rule = rule_with(DraggableViewConfig::default().with_click_to_maximize(true));
    minimize(&mut rule);

    assert!(rule.tap(500.0, 1500.0));
    assert_eq!(rule.events(), vec![ListenerEvent::Maximized]);

    rule.pump_until_idle();
    assert_eq!(rule.state(), PanelState::Maximized);
    assert_eq!(rule.events(), vec![ListenerEvent::Maximized]);
}

#[test]
fn slide_of_ten_pixels_is_not_a_tap() {
    let mut rule = rule_with(DraggableViewConfig::default().with_click_to_maximize(true));
    minimize(&mut rule);

    rule.press(500.0, 1500.0);
    rule.release(510.0, 1500.0);
    rule.pump_until_idle();

    assert_eq!(rule.state(), PanelState::Minimized);
    assert!(!rule.events().contains(&ListenerEvent::Maximized));
}

#[test]
fn slide_under_ten_pixels_still_counts_as_tap() {
    let mut rule = rule_with(DraggableViewConfig::default().with_click_to_maximize(true));
    minimize(&mut rule);

    rule.press(500.0, 1500.0);
    rule.release(509.0, 1500.0);
    assert_eq!(rule.events(), vec![ListenerEvent::Maximized]);
}

#[test]
fn tap_on_maximized_panel_minimizes_when_enabled() {
    let mut rule = rule_with(DraggableViewConfig::default().with_click_to_minimize(true));

    rule.tap(500.0, 300.0);
    assert_eq!(rule.events(), vec![ListenerEvent::Minimized]);

    rule.pump_until_idle();
    assert_eq!(rule.state(), PanelState::Minimized);
}

#[test]
fn taps_do_not_toggle_by_default() {
    let mut rule = rule_with(DraggableViewConfig::default());
    rule.tap(500.0, 300.0);
    rule.pump_until_idle();
    assert_eq!(rule.state(), PanelState::Maximized);

    minimize(&mut rule);
    rule.tap(500.0, 1500.0);
    rule.pump_until_idle();
    assert_eq!(rule.state(), PanelState::Minimized);
    assert!(!rule.events().contains(&ListenerEvent::Maximized));
}

#[test]
fn tap_outside_primary_surface_is_ignored() {
    let mut rule = rule_with(DraggableViewConfig::default().with_click_to_minimize(true));
    assert!(!rule.tap(500.0, 1700.0));
    assert_eq!(rule.state(), PanelState::Maximized);
    assert!(rule.events().is_empty());
}

#[test]
fn tap_beside_the_scaled_down_panel_does_not_maximize() {
    let mut rule = rule_with(DraggableViewConfig::default().with_click_to_maximize(true));
    minimize(&mut rule);

    // Inside the layout box, outside what is drawn.
    let drawn = rule.view().primary().visual_bounds();
    assert_eq!((drawn.x, drawn.y), (485.0, 1485.0));
    assert!(rule.view().primary().bounds().contains(100, 1250));

    rule.tap(100.0, 1250.0);
    rule.pump_until_idle();
    assert_eq!(rule.state(), PanelState::Minimized);
    assert!(!rule.events().contains(&ListenerEvent::Maximized));
}

#[test]
fn content_receives_taps_while_maximized() {
    let mut rule = rule_with(DraggableViewConfig::default());
    rule.tap(500.0, 300.0);
    assert_eq!(rule.view().primary().dispatched_events().len(), 2);

    rule.view_mut().primary_mut().clear_dispatched_events();
    rule.tap(500.0, 1700.0);
    assert!(rule.view().primary().dispatched_events().is_empty());
}
