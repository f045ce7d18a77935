//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{NOTIFICATION_HEIGHT, NOTIFICATION_MAX_WIDTH};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate the main layout areas (story + journal on top, status bar below)
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        let screen_width = area.width;
        let screen_height = area.height;

        // Top area: story content + journal (all height except 1 line for status)
        let top_height = screen_height.saturating_sub(1);
        let top_area = Rect::new(0, 0, screen_width, top_height);

        // Bottom area: status bar (1 line height, full width)
        let status_area = Rect::new(0, top_height, screen_width, 1);

        vec![top_area, status_area]
    }

    /// Calculate the top pane layout (story text above, journal form below)
    #[must_use]
    pub fn top_pane_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(5)])
            .split(area)
            .to_vec()
    }

    /// Calculate a centered rectangle taking the given percentages of `r`
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate the rectangle of the toast at `index` in the top-right column
    ///
    /// Returns a zero-height rect when the toast would not fit on screen.
    #[must_use]
    pub fn notification_rect(area: Rect, index: usize) -> Rect {
        let width = std::cmp::min(NOTIFICATION_MAX_WIDTH, area.width);
        let x = area.width.saturating_sub(width);
        let y = 1 + index as u16 * NOTIFICATION_HEIGHT;

        if y + NOTIFICATION_HEIGHT > area.height {
            return Rect::new(x, 0, width, 0);
        }

        Rect::new(x, y, width, NOTIFICATION_HEIGHT)
    }
}
