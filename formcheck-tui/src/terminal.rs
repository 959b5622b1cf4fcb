use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::{
    cursor, execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::screen::{Line, LineStyle};

/// Owns the terminal while the page is shown and restores it on drop.
pub struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    /// Initialize the terminal for drawing.
    pub fn new() -> io::Result<Self> {
        // Set up panic hook to restore terminal on panic
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

        Ok(Self { stdout })
    }

    /// Terminal size as (columns, rows).
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Draw a full frame.
    pub fn draw(&mut self, lines: &[Line]) -> io::Result<()> {
        let (_, rows) = self.size()?;
        let visible = lines.len().min(rows as usize);

        // Overwrite rows in place and clear each row's tail.
        for (y, line) in lines.iter().take(visible).enumerate() {
            queue!(self.stdout, cursor::MoveTo(1, y as u16))?;
            let (color, bold) = line_color(line.style);
            if bold {
                queue!(self.stdout, SetAttribute(Attribute::Bold))?;
            }
            queue!(
                self.stdout,
                SetForegroundColor(color),
                Print(&line.text),
                ResetColor,
                SetAttribute(Attribute::Reset),
                terminal::Clear(ClearType::UntilNewLine)
            )?;
        }

        // Rows left over from a taller previous frame.
        if visible < rows as usize {
            queue!(
                self.stdout,
                cursor::MoveTo(0, visible as u16),
                terminal::Clear(ClearType::FromCursorDown)
            )?;
        }

        self.stdout.flush()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn line_color(style: LineStyle) -> (Color, bool) {
    match style {
        LineStyle::Title => (Color::Cyan, true),
        LineStyle::Muted => (Color::DarkGrey, false),
        LineStyle::Label => (Color::Grey, true),
        LineStyle::Value => (Color::White, false),
        LineStyle::FocusedValue => (Color::Yellow, false),
        LineStyle::Error => (Color::Red, false),
        LineStyle::Success => (Color::Green, true),
        LineStyle::Button => (Color::Grey, false),
        LineStyle::FocusedButton => (Color::Yellow, true),
    }
}

/// Restore the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(io::stdout(), cursor::Show, LeaveAlternateScreen)?;
    Ok(())
}
