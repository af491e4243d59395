//! Scoped terminal styling: red on entry, reset on exit, never suppresses.

use std::io::{self, Stdout, Write};

use tracing::warn;

use crate::fault::Fault;
use crate::scope::{Exit, Scoped};

// Conservative 8/16-color escapes for broad terminal compatibility.
pub const RED: &str = "\u{1b}[31;10m";
pub const RESET: &str = "\u{1b}[0m";

/// Brackets everything the body writes through it in red.
pub struct PrintRed<W: Write> {
    out: W,
}

impl PrintRed<Stdout> {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for PrintRed<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> PrintRed<W> {
    pub fn to(out: W) -> Self {
        Self { out }
    }
    /// The sink the body should write through to stay inside the bracket.
    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Scoped for PrintRed<W> {
    fn acquire(&mut self) -> Result<(), Fault> {
        // No trailing newline: the body's first line continues the sequence.
        write!(self.out, "{RED}")?;
        self.out.flush()?;
        Ok(())
    }

    fn release(&mut self, _fault: Option<&Fault>) -> Exit {
        // Release itself cannot raise; a failed reset is only worth a warning.
        if let Err(e) = write!(self.out, "{RESET}").and_then(|()| self.out.flush()) {
            warn!(error = %e, "could not write the reset sequence");
        }
        Exit::Propagate
    }
}
