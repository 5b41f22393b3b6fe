use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use crate::buffer::Buffer;
use crate::error::Result;
use crate::event::Event;
use crate::text::char_width;
use crate::theme::{Rgb, TextStyle};

/// Raw-mode, alternate-screen terminal with double-buffered diff rendering.
pub struct Terminal {
    stdout: io::Stdout,
    current: Buffer,
    previous: Buffer,
    /// Set after a resize so the next flush repaints every cell.
    full_redraw: bool,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture
        )?;
        stdout.flush()?;

        let (width, height) = terminal::size()?;
        log::info!("terminal opened at {}x{}", width, height);

        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
            full_redraw: true,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current.width(), self.current.height())
    }

    /// Wait up to `timeout` for input, then drain whatever else is pending.
    pub fn poll(&self, timeout: Duration) -> Result<Vec<Event>> {
        let mut events = Vec::new();
        if event::poll(timeout)? {
            let raw = event::read()?;
            events.extend(Event::from_crossterm(&raw));
            while event::poll(Duration::ZERO)? {
                let raw = event::read()?;
                events.extend(Event::from_crossterm(&raw));
            }
        }
        Ok(events)
    }

    /// Paint a frame with `paint` and write the changed cells.
    pub fn draw(&mut self, paint: impl FnOnce(&mut Buffer)) -> Result<()> {
        let (width, height) = terminal::size()?;
        if width != self.current.width() || height != self.current.height() {
            log::debug!("terminal resized to {}x{}", width, height);
            self.current = Buffer::new(width, height);
            self.previous = Buffer::new(width, height);
            self.full_redraw = true;
        }

        self.current.clear();
        paint(&mut self.current);
        self.flush_diff()?;
        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(())
    }

    fn flush_diff(&mut self) -> Result<()> {
        if self.full_redraw {
            queue!(self.stdout, terminal::Clear(ClearType::All))?;
            // Force every cell to differ from the blank previous frame.
            self.previous.fill(self.previous.area(), Rgb::new(1, 2, 3));
            self.full_redraw = false;
        }

        let mut last: Option<(u16, u16, u16)> = None;
        let mut fg = None;
        let mut bg = None;
        let mut style = TextStyle::new();

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current.diff(&self.previous) {
            if cell.wide_continuation {
                continue;
            }

            let sequential = matches!(last, Some((lx, ly, lw)) if ly == y && lx + lw == x);
            if !sequential {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if fg != Some(cell.fg) {
                queue!(self.stdout, SetForegroundColor(to_ct(cell.fg)))?;
                fg = Some(cell.fg);
            }
            if bg != Some(cell.bg) {
                queue!(self.stdout, SetBackgroundColor(to_ct(cell.bg)))?;
                bg = Some(cell.bg);
            }
            if cell.style != style {
                queue!(self.stdout, SetAttribute(Attribute::Reset))?;
                if cell.style.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if cell.style.dim {
                    queue!(self.stdout, SetAttribute(Attribute::Dim))?;
                }
                // Reset also dropped the colors.
                queue!(
                    self.stdout,
                    SetForegroundColor(to_ct(cell.fg)),
                    SetBackgroundColor(to_ct(cell.bg))
                )?;
                style = cell.style;
            }

            write!(self.stdout, "{}", cell.ch)?;
            last = Some((x, y, char_width(cell.ch).max(1) as u16));
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }
}

fn to_ct(color: Rgb) -> CtColor {
    CtColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = queue!(
            self.stdout,
            DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = self.stdout.flush();
        let _ = terminal::disable_raw_mode();
        log::info!("terminal restored");
    }
}
