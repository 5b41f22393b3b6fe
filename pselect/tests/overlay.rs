use pselect::Rect;
use pselect::overlay::{Anchor, OverlayPosition, place};

// ============================================================================
// Anchor
// ============================================================================

#[test]
fn test_anchor_open_close() {
    let mut anchor = Anchor::new();
    assert!(!anchor.is_open());

    anchor.open(Rect::new(4, 4, 24, 3));
    assert!(anchor.is_open());

    assert!(anchor.close());
    assert!(!anchor.is_open());
    assert!(!anchor.close());
}

// ============================================================================
// Placement
// ============================================================================

#[test]
fn test_place_below_left() {
    let screen = Rect::from_size(80, 24);
    let trigger = Rect::new(4, 4, 24, 3);
    let panel = place(screen, trigger, (40, 10), OverlayPosition::Below);
    assert_eq!(panel, Rect::new(4, 7, 40, 10));
}

#[test]
fn test_place_flips_above_when_no_room_below() {
    let screen = Rect::from_size(80, 24);
    let trigger = Rect::new(4, 18, 24, 3);
    let panel = place(screen, trigger, (40, 10), OverlayPosition::Below);
    assert_eq!(panel, Rect::new(4, 8, 40, 10));
}

#[test]
fn test_place_clamps_when_neither_side_fits() {
    let screen = Rect::from_size(80, 12);
    let trigger = Rect::new(0, 4, 24, 3);
    let panel = place(screen, trigger, (40, 10), OverlayPosition::Below);
    assert_eq!(panel.height, 10);
    assert!(panel.bottom() <= screen.bottom());
}

#[test]
fn test_place_shifts_left_at_right_edge() {
    let screen = Rect::from_size(60, 24);
    let trigger = Rect::new(40, 2, 20, 3);
    let panel = place(screen, trigger, (40, 10), OverlayPosition::Below);
    assert_eq!(panel.x, 20);
    assert_eq!(panel.right(), 60);
}

#[test]
fn test_place_shrinks_to_screen() {
    let screen = Rect::from_size(30, 8);
    let panel = place(screen, Rect::new(0, 0, 10, 3), (40, 10), OverlayPosition::Below);
    assert_eq!(panel.width, 30);
    assert_eq!(panel.height, 8);
}

#[test]
fn test_place_above_preference() {
    let screen = Rect::from_size(80, 24);
    let trigger = Rect::new(4, 15, 24, 3);
    let panel = place(screen, trigger, (40, 10), OverlayPosition::Above);
    assert_eq!(panel, Rect::new(4, 5, 40, 10));

    let near_top = Rect::new(4, 2, 24, 3);
    let panel = place(screen, near_top, (40, 10), OverlayPosition::Above);
    assert_eq!(panel.y, 5);
}
