//! Withal – scoped resource acquisition in three small demonstrations.
//!
//! Everything here revolves around one contract: a [`scope::Scoped`] resource
//! is *acquired* on scope entry and *released* on scope exit, release
//! happening on every exit path. What differs between the demonstrations is
//! the release policy:
//!
//! * [`style::PrintRed`] brackets output in red and never suppresses a fault.
//! * [`store::OpenDb`] owns a SQLite connection and suppresses everything
//!   raised inside its scope, unconditionally, after closing the connection.
//! * [`suppress::IgnoreZeroDiv`] suppresses exactly division by zero,
//!   reporting the faulting line, and lets every other fault through.
//!
//! ## Modules
//! * [`scope`] – the acquire/release contract and the [`scope::enter`] runner.
//! * [`fault`] – the fault taxonomy: [`fault::FaultKind`] variants and the
//!   [`fault::Fault`] value carrying kind, detail and origin.
//! * [`style`], [`store`], [`suppress`] – the three scoped resources.
//! * [`settings`] – store path configuration (defaults, file, environment).
//! * [`driver`] – the sequential demonstration driver used by the binary.
//!
//! ## Quick start
//! ```
//! use withal::scope::enter;
//! use withal::suppress::{IgnoreZeroDiv, div};
//!
//! let mut buf = Vec::new();
//! let outcome = enter(&mut IgnoreZeroDiv::to(&mut buf), |_| div(1, 0));
//! // The division fault was suppressed: normal continuation, no value.
//! assert!(outcome.expect("suppressed").is_none());
//! assert!(String::from_utf8(buf).unwrap().contains("divide by zero"));
//! ```

pub mod driver;
pub mod fault;
pub mod scope;
pub mod settings;
pub mod store;
pub mod style;
pub mod suppress;
