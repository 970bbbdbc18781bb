//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `almanac_core::storage`.

pub mod inmemory;

pub use inmemory::InMemoryRepository;
