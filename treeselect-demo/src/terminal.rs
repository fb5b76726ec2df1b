use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal,
};
use treeselect::{Role, View};

/// Raw-mode terminal on the alternate screen. Restored on drop.
pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Block until at least one event arrives, then drain whatever is pending.
    pub fn poll(&self) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = vec![event::read()?];
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }
        Ok(events)
    }

    pub fn clear(&mut self) -> io::Result<()> {
        queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            terminal::Clear(terminal::ClearType::All)
        )
    }

    /// Queue plain text at a position.
    pub fn text(&mut self, x: u16, y: u16, text: &str, color: Color, bold: bool) -> io::Result<()> {
        queue!(self.stdout, cursor::MoveTo(x, y), SetForegroundColor(color))?;
        if bold {
            queue!(self.stdout, SetAttribute(Attribute::Bold))?;
        }
        queue!(
            self.stdout,
            Print(text),
            SetAttribute(Attribute::Reset),
            ResetColor
        )
    }

    /// Queue a rendered widget view at its own area.
    pub fn view(&mut self, view: &View, focused: bool) -> io::Result<()> {
        for (row, line) in view.lines.iter().enumerate() {
            let y = view.area.y + row as u16;
            queue!(self.stdout, cursor::MoveTo(view.area.x, y))?;

            let background = if line.highlighted {
                Some(Color::DarkGrey)
            } else if row == 0 && focused {
                Some(Color::Rgb { r: 40, g: 44, b: 52 })
            } else if row > 0 {
                Some(Color::Rgb { r: 24, g: 26, b: 32 })
            } else {
                None
            };
            if let Some(bg) = background {
                queue!(self.stdout, SetBackgroundColor(bg))?;
            }

            for span in &line.spans {
                queue!(self.stdout, SetForegroundColor(role_color(span.role)))?;
                if span.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                queue!(self.stdout, Print(&span.text))?;
                if span.bold {
                    queue!(self.stdout, SetAttribute(Attribute::NormalIntensity))?;
                }
            }
            queue!(self.stdout, ResetColor)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn role_color(role: Role) -> Color {
    match role {
        Role::Text => Color::White,
        Role::Muted => Color::Grey,
        Role::Primary => Color::Blue,
        Role::Accent => Color::Cyan,
        Role::Match => Color::Yellow,
        Role::Disabled => Color::DarkGrey,
    }
}
