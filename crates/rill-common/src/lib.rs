//! Common utilities for Rill.
//!
//! This crate provides the foundational types used across the Rill
//! pipeline:
//! - `Span`: Source code location tracking

mod span;

pub use span::Span;
