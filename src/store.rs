//! Scoped store handle over a file-based SQLite database.
//!
//! The handle owns the connection for the whole lifetime of the entered
//! scope and is guaranteed to have closed it once the scope exits, however
//! the scope exits. Its release policy is the permissive extreme of the
//! three demonstrations: every fault raised inside the scope is swallowed.

use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tracing::{debug, warn};

use crate::fault::{Fault, FaultKind};
use crate::scope::{Exit, Scoped};

/// Hidden file in the working directory, unless settings say otherwise.
pub const DEFAULT_STORE_PATH: &str = ".db.sqlite";

const DEFAULT_CONTENT: &str = "Something to add";

pub struct OpenDb<W: Write> {
    path: PathBuf,
    conn: Option<Connection>,
    out: W,
}

impl OpenDb<Stdout> {
    pub fn new() -> Self {
        Self::at(DEFAULT_STORE_PATH)
    }
    pub fn at(path: impl AsRef<Path>) -> Self {
        Self::with_writer(path, io::stdout())
    }
}

impl Default for OpenDb<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> OpenDb<W> {
    pub fn with_writer(path: impl AsRef<Path>, out: W) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            conn: None,
            out,
        }
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Announce content for the store. Announce only: nothing is written to
    /// the database, which is the stated simplification of this demo.
    pub fn add(&mut self, content: Option<&str>) -> Result<(), Fault> {
        let content = content.unwrap_or(DEFAULT_CONTENT);
        writeln!(self.out, "{content}")?;
        writeln!(self.out, "will be added to the DB")?;
        Ok(())
    }
}

impl<W: Write> Scoped for OpenDb<W> {
    fn acquire(&mut self) -> Result<(), Fault> {
        let conn = Connection::open(&self.path).map_err(|e| {
            Fault::new(FaultKind::Store, format!("{}: {e}", self.path.display()))
        })?;
        debug!(path = %self.path.display(), "store connection opened");
        self.conn = Some(conn);
        Ok(())
    }

    fn release(&mut self, fault: Option<&Fault>) -> Exit {
        if let Some(conn) = self.conn.take() {
            match conn.close() {
                Ok(()) => debug!(path = %self.path.display(), "store connection closed"),
                Err((_conn, e)) => {
                    warn!(error = %e, path = %self.path.display(), "store connection did not close cleanly");
                }
            }
        }
        // Everything raised inside the scope is swallowed here, store-related
        // or not. The suppression is at least not silent in the logs.
        if let Some(fault) = fault {
            warn!(kind = ?fault.kind(), %fault, "suppressing fault raised inside the store scope");
        }
        Exit::Suppress
    }
}
