//! The sequential demonstration driver.
//!
//! Three sections, one per scoped resource, with no data flowing between
//! them. Writing goes through an injected sink so the full transcript can be
//! asserted end to end.

use std::io::Write;

use tracing::info;

use crate::fault::Fault;
use crate::scope::enter;
use crate::settings::Settings;
use crate::store::OpenDb;
use crate::style::PrintRed;
use crate::suppress::{IgnoreZeroDiv, div};

fn section(out: &mut impl Write, title: &str) -> Result<(), Fault> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "-".repeat(title.len()))?;
    Ok(())
}

/// Runs the three demonstrations in order against `out`.
///
/// With the shipped release policies every body fault is suppressed by its
/// own scope, so a completed run returns `Ok(())`; only an acquire failure
/// can propagate out of here.
pub fn run(settings: &Settings, out: &mut impl Write) -> Result<(), Fault> {
    section(out, "PrintRed")?;
    writeln!(out, "Before context")?;
    let mut red = PrintRed::to(&mut *out);
    enter(&mut red, |c| {
        writeln!(c.writer(), "Within context...")?;
        writeln!(c.writer(), "...more in context")?;
        Ok(())
    })?;
    writeln!(out, "After context")?;
    writeln!(out)?;

    section(out, "OpenDB")?;
    let mut db = OpenDb::with_writer(&settings.store.path, &mut *out);
    enter(&mut db, |db| db.add(None))?;
    writeln!(out)?;

    section(out, "IgnoreZeroDiv")?;
    let mut quiet = IgnoreZeroDiv::to(&mut *out);
    enter(&mut quiet, |c| {
        let x = div(1, 0)?;
        writeln!(c.writer(), "We won't arrive here: {x}")?;
        Ok(())
    })?;

    info!("all demonstrations completed");
    Ok(())
}
