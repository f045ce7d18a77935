//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::super::app::App;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let status_text = if app.editing {
            "Editing journal • Esc: done".to_string()
        } else {
            "e: edit journal • s: save • n: notify • q: quit".to_string()
        };

        let status_color = if app.exit_guard.is_dirty() && !app.editing {
            Color::Yellow
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
