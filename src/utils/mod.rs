//! Utilities for studiobot.
//!
//! Submodules:
//! - `natural`: Natural (case-insensitive, numeric-aware) name ordering used for playlist sorting.

pub mod natural;
