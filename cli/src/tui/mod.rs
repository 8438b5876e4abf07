pub mod app;
pub mod ui;

use std::io::{self, Stdout};
use std::time::Duration;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use crate::tui::app::{App, InputMode};

/// Runs the form until the user quits. Returns the last saved output.
pub fn run() -> Result<Option<String>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    info!("form initialized");
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    Ok(app.output())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && !handle_key(app, key.code) {
                    return Ok(());
                }
            }
        }
    }
}

/// Returns false when the app should quit.
fn handle_key(app: &mut App, code: KeyCode) -> bool {
    match app.input_mode {
        InputMode::Normal => {
            app.status = None;
            match code {
                KeyCode::Char('q') | KeyCode::Esc => return false,
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::Char(' ') => app.toggle_selected(),
                KeyCode::Char('e') | KeyCode::Enter => app.enter_edit_mode(),
                KeyCode::Char('s') => app.save(),
                _ => {}
            }
        },
        InputMode::Editing => {
            match code {
                KeyCode::Enter | KeyCode::Esc => app.exit_edit_mode(),
                KeyCode::Char(c) => app.input_char(c),
                KeyCode::Backspace => app.delete_char(),
                KeyCode::Left => app.move_cursor_left(),
                KeyCode::Right => app.move_cursor_right(),
                _ => {}
            }
        }
    }
    true
}
