//! Story content component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::utils::date;

use super::super::app::App;

/// Main story text pane
pub struct StoryView;

impl StoryView {
    /// Render the current story scene with the last-save timestamp
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let title = match &app.last_saved_at {
            Some(ts) => format!(" {} — saved {} ", app.scene_title, date::format_long_datetime(ts)),
            None => format!(" {} ", app.scene_title),
        };

        let story = Paragraph::new(app.scene_text.as_str())
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false });

        f.render_widget(story, area);
    }
}
