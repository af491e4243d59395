//! The acquire/release contract and the scope runner.
//!
//! A [`Scoped`] resource is acquired on entry and released on exit, release
//! happening on every exit path. The resource itself is the handle: the scope
//! body runs with `&mut` access to it. Release always observes the body's
//! fault (or its absence) and answers with an [`Exit`] decision; the runner
//! turns that decision into caller-visible control flow.

use crate::fault::Fault;

/// Decision returned by [`Scoped::release`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The fault (if any) stops here; the scope exits normally.
    Suppress,
    /// Any fault keeps going to the caller.
    Propagate,
}

/// The capability contract: two operations, implemented per resource.
pub trait Scoped {
    /// Acquire the underlying resource. On failure the scope body never runs
    /// and [`Scoped::release`] is never invoked.
    fn acquire(&mut self) -> Result<(), Fault>;

    /// Release the resource. Invoked exactly once for every entered scope,
    /// with the body's fault when one was raised and `None` otherwise.
    fn release(&mut self, fault: Option<&Fault>) -> Exit;
}

/// Enter a scope: acquire, run the body, always release.
///
/// A suppressed fault yields `Ok(None)` so the caller continues as if the
/// scope had completed normally, just without a value. A propagated fault
/// comes back unchanged.
pub fn enter<S, T, F>(scope: &mut S, body: F) -> Result<Option<T>, Fault>
where
    S: Scoped,
    F: FnOnce(&mut S) -> Result<T, Fault>,
{
    scope.acquire()?;
    match body(scope) {
        Ok(value) => {
            // Release still sees the no-fault case; its decision is moot here.
            scope.release(None);
            Ok(Some(value))
        }
        Err(fault) => match scope.release(Some(&fault)) {
            Exit::Suppress => Ok(None),
            Exit::Propagate => Err(fault),
        },
    }
}
