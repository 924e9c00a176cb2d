//! Terminal rendering
//!
//! Raw crossterm drawing: every frame queues its commands into the
//! writer and flushes once, so a redraw is a single syscall.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use sumadora::prelude::DisplayBuffer;

/// Title line shown above the display
pub const TITLE: &str = "sumadora";

/// Key hints shown below the display
pub const HELP_LINE: &str =
    "0-9 . + - * / ( )   Enter/= submit   Backspace erase   Esc clear   q quit";

/// Draws one frame: title, display line, and key hints
///
/// While the `Error` face is up, the classified reason is printed
/// underneath it.
pub fn draw(out: &mut impl Write, buffer: &DisplayBuffer) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0), Print(TITLE))?;
    queue!(out, MoveTo(0, 2), Print(format!("> {}", buffer.text())))?;

    if buffer.text() == "Error" {
        if let Some(err) = buffer.last_error() {
            queue!(out, MoveTo(2, 3), Print(err))?;
        }
    }

    queue!(out, MoveTo(0, 5), Print(HELP_LINE))?;
    out.flush()
}
