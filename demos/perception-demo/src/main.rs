//! AION Perception Demo
//!
//! Interactive terminal calculator for the time perception models:
//! - Live perceived-age readout for the selected model
//! - Full curve plot with reference lines at the current age and value
//! - English/Spanish catalog switching

mod app;
mod ui;

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event};
use crossterm::style::Print;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use app::App;

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let result = run(&mut stdout);

    // Restore the terminal even if the event loop failed.
    execute!(stdout, Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

fn run(stdout: &mut io::Stdout) -> io::Result<()> {
    let mut app = App::new();
    loop {
        draw(stdout, &ui::render(&app))?;
        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
        if app.quit {
            return Ok(());
        }
    }
}

fn draw(stdout: &mut io::Stdout, frame: &str) -> io::Result<()> {
    queue!(stdout, Clear(ClearType::All))?;
    for (row, line) in frame.lines().enumerate() {
        queue!(stdout, MoveTo(0, row as u16), Print(line))?;
    }
    stdout.flush()
}
