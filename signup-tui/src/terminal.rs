use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::{Buffer, Cell, Rgb, TextStyle, char_width};

/// Owns the terminal for the lifetime of the form: raw mode and the
/// alternate screen are entered on construction and left on drop.
pub struct Terminal {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        let (width, height) = terminal::size()?;

        Ok(Self {
            stdout,
            current_buffer: Buffer::new(width, height),
            // Differs from every drawable cell, so the first frame paints everything
            previous_buffer: Buffer::filled(width, height, Cell::new('\0')),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current_buffer.width(), self.current_buffer.height())
    }

    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                // Block until event
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Draw a frame. `draw_fn` fills a cleared buffer and returns where the
    /// caret should sit, if anywhere.
    pub fn draw<F>(&mut self, draw_fn: F) -> io::Result<()>
    where
        F: FnOnce(&mut Buffer) -> Option<(u16, u16)>,
    {
        let (width, height) = terminal::size()?;
        if width != self.current_buffer.width() || height != self.current_buffer.height() {
            self.current_buffer = Buffer::new(width, height);
            // Blank screen, and a back buffer that differs from every cell
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
            self.previous_buffer = Buffer::filled(width, height, Cell::new('\0'));
        }

        self.current_buffer.clear();
        let caret = draw_fn(&mut self.current_buffer);

        self.flush_diff()?;

        match caret {
            Some((x, y)) => queue!(self.stdout, cursor::MoveTo(x, y), cursor::Show)?,
            None => queue!(self.stdout, cursor::Hide)?,
        }
        self.stdout.flush()?;

        std::mem::swap(&mut self.current_buffer, &mut self.previous_buffer);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_char_width: u16 = 1;
        let mut last_fg = Rgb::new(255, 255, 255);
        let mut last_bg = Rgb::new(0, 0, 0);
        let mut last_style = TextStyle::new();

        // Reset to known state at start
        queue!(
            self.stdout,
            cursor::Hide,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(to_color(last_fg)),
            SetBackgroundColor(to_color(last_bg))
        )?;

        for (x, y, cell) in self.current_buffer.diff(&self.previous_buffer) {
            // The wide char before this cell already covers it
            if cell.wide_continuation {
                continue;
            }

            if y != last_y || x != last_x.wrapping_add(last_char_width) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if cell.fg != last_fg {
                queue!(self.stdout, SetForegroundColor(to_color(cell.fg)))?;
                last_fg = cell.fg;
            }

            if cell.bg != last_bg {
                queue!(self.stdout, SetBackgroundColor(to_color(cell.bg)))?;
                last_bg = cell.bg;
            }

            if cell.style != last_style {
                // Attributes don't toggle off individually on every terminal
                queue!(
                    self.stdout,
                    SetAttribute(Attribute::Reset),
                    SetForegroundColor(to_color(cell.fg)),
                    SetBackgroundColor(to_color(cell.bg))
                )?;
                if cell.style.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if cell.style.dim {
                    queue!(self.stdout, SetAttribute(Attribute::Dim))?;
                }
                if cell.style.underline {
                    queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
                }
                last_style = cell.style;
            }

            write!(self.stdout, "{}", cell.char)?;

            last_x = x;
            last_y = y;
            last_char_width = char_width(cell.char).max(1) as u16;
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn to_color(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
