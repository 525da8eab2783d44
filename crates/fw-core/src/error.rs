//! Core error type.
//!
//! Both variants are configuration failures: they can only arise while
//! interpreting a manifest, before any vehicle thread exists.  Sub-crates
//! define their own error enums and wrap `FwError` as one variant.

use thiserror::Error;

use crate::direction::Direction;

/// The top-level error type for `fw-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FwError {
    #[error("unknown direction symbol {0:?} (expected one of ^ > v <)")]
    UnknownDirection(char),

    #[error("no legal turn from {origin} to {destination}: U-turns are not supported")]
    NoLegalTurn {
        origin:      Direction,
        destination: Direction,
    },
}

/// Shorthand result type for all `fw-*` crates.
pub type FwResult<T> = Result<T, FwError>;
