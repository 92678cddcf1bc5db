use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor, event, execute,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::Buffer;
use crate::event::Event;
use crate::surface::{Rect, Surface};
use crate::types::{AttrTheme, Rgb};

/// The drawing context every widget operation receives: a staging
/// buffer plus the batched flush that makes staged writes visible
/// atomically. Tests substitute a buffer-only implementation.
pub trait Screen {
    fn buffer_mut(&mut self) -> &mut Buffer;

    /// Propagate all staged changes to the physical screen at once.
    fn flush(&mut self) -> io::Result<()>;
}

/// Crossterm-backed terminal: raw mode, alternate screen, mouse capture,
/// and a double-buffered cell grid diffed on flush.
pub struct Terminal {
    stdout: io::Stdout,
    back: Buffer,
    front: Buffer,
    theme: AttrTheme,
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

        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            back: Buffer::new(width, height),
            front: Buffer::new(width, height),
            theme: AttrTheme::default(),
        })
    }

    pub fn set_theme(&mut self, theme: AttrTheme) {
        self.theme = theme;
    }

    pub fn size(&self) -> (u16, u16) {
        (self.back.width(), self.back.height())
    }

    /// Full-screen root surface.
    pub fn surface(&self) -> Surface {
        Surface::new(Rect::from_size(self.back.width(), self.back.height()))
    }

    /// Reallocate both buffers if the terminal size changed since the
    /// last flush. Returns whether it did; callers re-lay out on `true`.
    pub fn resize_if_changed(&mut self) -> io::Result<bool> {
        let (width, height) = terminal::size()?;
        if width == self.back.width() && height == self.back.height() {
            return Ok(false);
        }
        log::debug!("[term] resized to {width}x{height}");
        self.back = Buffer::new(width, height);
        self.front = Buffer::new(width, height);
        execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        Ok(true)
    }

    /// Read one decoded input event.
    ///
    /// With no timeout this blocks; with one it returns `Ok(None)` on
    /// expiry. Raw input that cannot be decoded also yields `Ok(None)`,
    /// never an error.
    pub fn read_event(&mut self, timeout: Option<Duration>) -> io::Result<Option<Event>> {
        if let Some(dur) = timeout {
            if !event::poll(dur)? {
                return Ok(None);
            }
        }
        let raw = event::read()?;
        Ok(Event::decode(&raw))
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;
        let mut last_bold = false;

        execute!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.back.diff(&self.front) {
            // The wide glyph to the left already painted this cell.
            if cell.wide_continuation {
                continue;
            }

            if y != last_y || x != last_x + 1 {
                execute!(self.stdout, cursor::MoveTo(x, y))?;
            }

            let (fg, bg, bold) = self.theme.style(cell.attr);
            if last_fg != Some(fg) {
                execute!(
                    self.stdout,
                    SetForegroundColor(CtColor::Rgb {
                        r: fg.r,
                        g: fg.g,
                        b: fg.b,
                    })
                )?;
                last_fg = Some(fg);
            }
            if last_bg != Some(bg) {
                execute!(
                    self.stdout,
                    SetBackgroundColor(CtColor::Rgb {
                        r: bg.r,
                        g: bg.g,
                        b: bg.b,
                    })
                )?;
                last_bg = Some(bg);
            }
            if bold != last_bold {
                if bold {
                    execute!(self.stdout, SetAttribute(Attribute::Bold))?;
                } else {
                    execute!(self.stdout, SetAttribute(Attribute::NormalIntensity))?;
                }
                last_bold = bold;
            }

            write!(self.stdout, "{}", cell.ch)?;

            last_x = x;
            last_y = y;
        }

        execute!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Screen for Terminal {
    fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.back
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_diff()?;
        self.front.clone_from(&self.back);
        Ok(())
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
