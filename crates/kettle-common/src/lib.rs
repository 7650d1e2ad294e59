//! Common types and utilities for the kettle compiler backend.
//!
//! This crate provides foundational types shared by the kettle crates:
//! - String interning (`Atom`, `Interner`)
//! - Centralized limits and thresholds

// String interning for identifier deduplication
pub mod interner;
pub use interner::{Atom, Interner};

// Centralized limits and thresholds
pub mod limits;
