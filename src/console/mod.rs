//! Terminal collaborators: board rendering and line-based input.
//!
//! The game core never touches stdin/stdout directly; everything flows
//! through the `Console` trait. `Terminal` is the real implementation;
//! tests drive whole sessions with scripted consoles.

use std::io::{self, BufRead, Write};

use crate::board::Board;
use crate::core::{Player, PlayerId, PlayerPair, Position};

/// Blocking line I/O for one interactive session.
pub trait Console {
    /// Read one input line, without the trailing newline.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures; a closed input stream surfaces as
    /// `io::ErrorKind::UnexpectedEof`.
    fn read_line(&mut self) -> io::Result<String>;

    /// Write one line of output.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn read_line(&mut self) -> io::Result<String> {
        (**self).read_line()
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}

/// Console over process stdin/stdout.
#[derive(Debug, Default)]
pub struct Terminal;

impl Terminal {
    /// Create a terminal console.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Console for Terminal {
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
        out.flush()
    }
}

/// Render the board as one line per row, cells space-separated.
///
/// A cell under a player shows that player's label regardless of the
/// grid content (player one takes precedence if both stand on the same
/// cell); every other cell shows its own symbol.
#[must_use]
pub fn render(board: &Board, players: &PlayerPair<Player>) -> String {
    let mut lines = Vec::with_capacity(board.size());

    for (y, row) in board.rows().enumerate() {
        let mut symbols = Vec::with_capacity(row.len());
        for (x, cell) in row.iter().enumerate() {
            let here = Position::new(x, y);
            let overlay = PlayerId::ALL
                .into_iter()
                .find(|&id| players[id].position() == here);
            symbols.push(match overlay {
                Some(id) => id.label(),
                None => cell.symbol(),
            });
        }
        lines.push(symbols.join(" "));
    }

    lines.join("\n")
}
