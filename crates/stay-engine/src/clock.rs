//! The source of "today".
//!
//! The engine never reads the system clock. Whoever drives it supplies the
//! current day through a [`Clock`], which keeps every decision reproducible.

use crate::date::DateOnly;

pub trait Clock {
    fn today(&self) -> DateOnly;
}

/// A clock stuck on one day. Used in tests and for `--today` overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateOnly);

impl Clock for FixedClock {
    fn today(&self) -> DateOnly {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateOnly,
{
    fn today(&self) -> DateOnly {
        self()
    }
}
