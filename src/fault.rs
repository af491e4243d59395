use std::panic::Location;

use thiserror::Error;

/// The fixed set of fault categories. Release policies branch on these
/// variants, never on display text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    #[error("division by zero")]
    DivisionByZero,
    #[error("lookup failed")]
    Lookup,
    #[error("type mismatch")]
    TypeMismatch,
    #[error("store error")]
    Store,
    #[error("settings error")]
    Settings,
    #[error("i/o error")]
    Io,
}

/// A raised runtime fault: a category, a detail text, and the source
/// location it was raised from.
#[derive(Error, Debug)]
#[error("{kind}: {detail}")]
pub struct Fault {
    kind: FaultKind,
    detail: String,
    origin: &'static Location<'static>,
}

impl Fault {
    /// Raise a fault. The origin is the caller's location, so a raise inside
    /// a `#[track_caller]` helper still points at the faulting statement.
    #[track_caller]
    pub fn new(kind: FaultKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
            origin: Location::caller(),
        }
    }
    pub fn kind(&self) -> FaultKind {
        self.kind
    }
    pub fn detail(&self) -> &str {
        &self.detail
    }
    pub fn file(&self) -> &'static str {
        self.origin.file()
    }
    pub fn line(&self) -> u32 {
        self.origin.line()
    }
}

pub type Result<T> = std::result::Result<T, Fault>;

// Helper conversions
impl From<rusqlite::Error> for Fault {
    #[track_caller]
    fn from(e: rusqlite::Error) -> Self {
        Self::new(FaultKind::Store, e.to_string())
    }
}

impl From<std::io::Error> for Fault {
    #[track_caller]
    fn from(e: std::io::Error) -> Self {
        Self::new(FaultKind::Io, e.to_string())
    }
}

impl From<config::ConfigError> for Fault {
    #[track_caller]
    fn from(e: config::ConfigError) -> Self {
        Self::new(FaultKind::Settings, e.to_string())
    }
}
