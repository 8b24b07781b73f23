//! TerminalRenderer: flushes rendered lines to a real terminal.
//!
//! This module intentionally keeps the drawing API small: full redraws of a
//! prepared line buffer, plus the terminal bell for audible cues.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, style::Print, terminal, QueueableCommand};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(8 * 1024),
        }
    }

    /// Enter raw mode and the alternate screen. Pair with [`Self::exit`].
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore the terminal. Safe to call even if `enter` failed midway.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Full redraw of the given lines from the top-left corner.
    pub fn draw(&mut self, lines: &[String]) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        for line in lines {
            self.buf.queue(Print(line))?;
            self.buf.queue(Print("\r\n"))?;
        }
        self.flush_buf()
    }

    /// Ring the terminal bell (the audible cue for meaningful state changes).
    pub fn bell(&mut self) -> Result<()> {
        self.stdout.write_all(b"\x07")?;
        self.stdout.flush()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
