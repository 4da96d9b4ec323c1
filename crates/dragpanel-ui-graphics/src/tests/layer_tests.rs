use super::GraphicsLayer;
use crate::IntRect;

#[test]
fn default_layer_draws_at_layout_bounds() {
    let layer = GraphicsLayer::default();
    let rect = layer.transform_rect(IntRect::new(10, 20, 110, 70));
    assert_eq!(rect.x, 10.0);
    assert_eq!(rect.y, 20.0);
    assert_eq!(rect.width, 100.0);
    assert_eq!(rect.height, 50.0);
    assert!(layer.is_identity());
}

#[test]
fn scaling_around_bottom_right_pivot_keeps_that_corner() {
    let layer = GraphicsLayer {
        scale_x: 0.5,
        scale_y: 0.5,
        pivot_x: Some(970.0),
        pivot_y: Some(570.0),
        ..GraphicsLayer::default()
    };
    let rect = layer.transform_rect(IntRect::new(0, 0, 1000, 600));
    assert_eq!(rect.width, 500.0);
    assert_eq!(rect.height, 300.0);
    // The pivot point is a fixed point of the scale transform.
    assert_eq!(rect.x + 970.0 * 0.5, 970.0);
    assert_eq!(rect.y + 570.0 * 0.5, 570.0);
}

#[test]
fn missing_pivot_resolves_to_centre() {
    let layer = GraphicsLayer::default();
    assert_eq!(
        layer.resolved_pivot(IntRect::new(0, 0, 200, 100)),
        (100.0, 50.0)
    );
}

#[test]
fn drawn_rect_excludes_its_far_edges() {
    let layer = GraphicsLayer {
        scale_x: 0.5,
        scale_y: 0.5,
        ..GraphicsLayer::default()
    };
    let rect = layer.transform_rect(IntRect::new(0, 0, 100, 100));
    assert!(rect.contains(25.0, 25.0));
    assert!(rect.contains(74.5, 74.5));
    assert!(!rect.contains(75.0, 50.0));
    assert!(!rect.contains(10.0, 10.0));
}
