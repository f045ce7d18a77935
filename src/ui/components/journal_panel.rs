//! Journal form component

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::JOURNAL_FORM_ID;

use super::super::app::App;

/// Editable journal entry pane backed by the registered journal form
pub struct JournalPanel;

impl JournalPanel {
    /// Render the journal form
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let value = app
            .forms
            .form(JOURNAL_FORM_ID)
            .map(|form| form.value.as_str())
            .unwrap_or("");

        let text = if value.is_empty() && !app.editing {
            "Press 'e' to write a journal entry"
        } else {
            value
        };

        let border_style = if app.editing {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let panel = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" 📓 Journal ")
                    .border_style(border_style),
            )
            .style(Style::default().fg(Color::White));

        f.render_widget(panel, area);
    }
}
