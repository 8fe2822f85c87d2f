//! Preview command handler - shows the logo in an alternate screen.

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use cole::tui::Logo;
use cole::Theme;

/// Render the logo widget in a ratatui alternate screen until a key is
/// pressed. Resize events trigger a redraw so the logo stays centered.
#[cfg(not(tarpaulin_include))]
pub fn handle(theme: Theme) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, theme);

    // Always restore the terminal, even if drawing failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

#[cfg(not(tarpaulin_include))]
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, theme: Theme) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            frame.render_widget(Logo::with_theme(theme), frame.area());
        })?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(()),
            Event::Resize(_, _) => continue,
            _ => continue,
        }
    }
}
