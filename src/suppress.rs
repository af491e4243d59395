//! Scoped fault suppressor: swallows exactly division by zero.

use std::io::{self, Stdout, Write};

use tracing::{debug, warn};

use crate::fault::{Fault, FaultKind};
use crate::scope::{Exit, Scoped};

/// Owns nothing; all the interest is in the release decision.
pub struct IgnoreZeroDiv<W: Write> {
    out: W,
}

impl IgnoreZeroDiv<Stdout> {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for IgnoreZeroDiv<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> IgnoreZeroDiv<W> {
    pub fn to(out: W) -> Self {
        Self { out }
    }
    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Scoped for IgnoreZeroDiv<W> {
    fn acquire(&mut self) -> Result<(), Fault> {
        Ok(())
    }

    fn release(&mut self, fault: Option<&Fault>) -> Exit {
        match fault {
            // A normal exit still lands here, with nothing to inspect.
            None => Exit::Propagate,
            Some(fault) if fault.kind() == FaultKind::DivisionByZero => {
                let line = fault.line();
                if let Err(e) =
                    writeln!(self.out, "We pretend you didn't divide by zero in line {line}")
                {
                    warn!(error = %e, "could not write the suppression report");
                }
                Exit::Suppress
            }
            Some(fault) => {
                debug!(kind = ?fault.kind(), "fault is not ours to swallow");
                Exit::Propagate
            }
        }
    }
}

/// Integer division that raises instead of panicking on a zero divisor.
/// The fault's origin is the line of the division statement at the call site.
#[track_caller]
pub fn div(numerator: i64, denominator: i64) -> Result<i64, Fault> {
    if denominator == 0 {
        return Err(Fault::new(
            FaultKind::DivisionByZero,
            format!("{numerator} / {denominator}"),
        ));
    }
    Ok(numerator / denominator)
}
