//! Functional core for almanac.
//!
//! Pure types and functions for expanding recurring calendar events into the
//! concrete occurrences of a query window, plus the repository and notifier
//! traits the server implements. Nothing in this crate performs I/O.

pub mod access;
pub mod calendar;
pub mod digest;
pub mod serde;
pub mod storage;
