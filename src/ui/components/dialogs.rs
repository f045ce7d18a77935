//! Dialog components

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::DIALOG_TITLE_LEAVE;

use super::super::app::App;
use super::super::layout::LayoutManager;

/// Confirmation dialog shown when leaving a screen with unsaved form input
pub struct LeaveConfirmationDialog;

impl LeaveConfirmationDialog {
    /// Render the leave confirmation dialog
    pub fn render(f: &mut Frame, app: &App) {
        if !app.confirming_exit {
            return;
        }

        let confirm_area = LayoutManager::centered_rect(60, 25, f.area());
        f.render_widget(Clear, confirm_area);

        let confirm_text =
            "Leave this screen?\n\nYour journal has unsaved changes.\n\nPress 'y' to leave or 'n'/Esc to stay";

        let confirm_paragraph = Paragraph::new(confirm_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(DIALOG_TITLE_LEAVE)
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(confirm_paragraph, confirm_area);
    }
}
