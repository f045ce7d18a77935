//! Main UI rendering and coordination

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::Duration;

use crate::config::Config;
use crate::constants::SCREEN_READY;

use super::app::App;
use super::components::{dialogs::LeaveConfirmationDialog, JournalPanel, StatusBar, StoryView};
use super::events::handle_events;
use super::layout::LayoutManager;

/// Run the main TUI application
pub async fn run_app(config: &Config) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create application state
    let mut app = App::new(config);

    // Screen is fully initialized at this point
    log::info!("{SCREEN_READY}");

    // Main application loop
    let res = run_ui(&mut terminal, &mut app).await;

    // Cleanup
    disable_raw_mode()?;
    if config.ui.mouse_enabled {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        // Check for terminal events without blocking; otherwise sleep a
        // beat so notification timing stays live
        if event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key) => {
                    let _handled = handle_events(Event::Key(key), app)?;
                }
                Event::Resize(_, _) => {
                    // Redraw happens on the next loop pass
                }
                _ => {}
            }
        } else {
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        // Retire notifications past their fade-out stage
        app.notifications.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Main UI rendering function
fn render_ui(f: &mut ratatui::Frame, app: &mut App) {
    // Calculate layouts
    let chunks = LayoutManager::main_layout(f.area());
    let top_chunks = LayoutManager::top_pane_layout(chunks[0]);

    // Render components
    StoryView::render(f, top_chunks[0], app);
    JournalPanel::render(f, top_chunks[1], app);
    StatusBar::render(f, chunks[1], app);

    // Toasts overlay the story content
    app.notifications.render(f);

    // Render the leave confirmation last to ensure it's on top of everything
    LeaveConfirmationDialog::render(f, app);
}
