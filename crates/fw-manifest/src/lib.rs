//! `fw-manifest` — vehicle manifest I/O for the fourway intersection
//! simulator.
//!
//! The manifest is the simulation's only input: one row per vehicle giving
//! its id, scripted arrival offset, and heading pair.  This crate turns a
//! manifest into validated [`fw_core::Vehicle`]s, either from CSV
//! ([`loader`]) or from a seeded generator for stress runs ([`generate`]).
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`loader`]   | `load_manifest_csv`, `load_manifest_reader`       |
//! | [`generate`] | `random_manifest` — seeded, always-legal vehicles |
//! | [`error`]    | `ManifestError`, `ManifestResult`                 |

pub mod error;
pub mod generate;
pub mod loader;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ManifestError, ManifestResult};
pub use generate::random_manifest;
pub use loader::{load_manifest_csv, load_manifest_reader};
