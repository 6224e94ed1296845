//! Terminal User Interface module
//!
//! Interactive heart-disease risk form: numeric and choice controls on the
//! left, the latest assessment on the right.

pub mod app;
pub mod event;
pub mod theme;
pub mod ui;
pub mod widgets;

#[cfg(test)]
mod tests;

pub use app::FormApp;
pub use event::KeyAction;
pub use theme::Theme;

use std::io;
use std::time::Duration;

use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore the terminal to normal mode
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the form until the user quits.
///
/// Inference happens inline on key press; the model is small and the loop
/// only redraws on input.
pub fn run_form(mut app: FormApp) -> io::Result<()> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, &mut app);
    restore_terminal()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut FormApp,
) -> io::Result<()> {
    while app.is_running() {
        terminal.draw(|f| ui::render(f, app))?;

        if crossterm::event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = crossterm::event::read()? {
                app.handle_key(KeyAction::from(key));
            }
        }
    }
    Ok(())
}
