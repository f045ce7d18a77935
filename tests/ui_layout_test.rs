use ratatui::layout::Rect;
use storyterm::constants::{NOTIFICATION_HEIGHT, NOTIFICATION_MAX_WIDTH};
use storyterm::ui::LayoutManager;

#[test]
fn test_main_layout_reserves_status_line() {
    let area = Rect::new(0, 0, 80, 24);
    let chunks = LayoutManager::main_layout(area);

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].height, 23);
    assert_eq!(chunks[1].height, 1);
    assert_eq!(chunks[1].y, 23);
}

#[test]
fn test_centered_rect_within_bounds() {
    let area = Rect::new(0, 0, 80, 24);
    let centered = LayoutManager::centered_rect(60, 25, area);

    assert!(centered.x > 0);
    assert!(centered.y > 0);
    assert!(centered.right() <= area.right());
    assert!(centered.bottom() <= area.bottom());
}

#[test]
fn test_notification_rects_stack_downwards() {
    let area = Rect::new(0, 0, 80, 24);
    let first = LayoutManager::notification_rect(area, 0);
    let second = LayoutManager::notification_rect(area, 1);

    assert_eq!(first.width, NOTIFICATION_MAX_WIDTH);
    assert_eq!(first.right(), area.right());
    assert_eq!(second.y, first.y + NOTIFICATION_HEIGHT);
}

#[test]
fn test_notification_rect_offscreen_collapses() {
    let area = Rect::new(0, 0, 80, 6);
    // Index 2 would start below the bottom edge
    let rect = LayoutManager::notification_rect(area, 2);
    assert_eq!(rect.height, 0);
}
