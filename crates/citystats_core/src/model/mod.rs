//! Domain model for city population records.
//!
//! # Responsibility
//! - Define the canonical record every report reads.
//!
//! # Invariants
//! - Records are immutable once parsed.
//! - `population` always comes from a successful integer parse.

pub mod city;
