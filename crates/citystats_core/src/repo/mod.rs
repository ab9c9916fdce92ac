//! In-memory city repository.
//!
//! # Responsibility
//! - Build the read-only city snapshot every report runs against.
//! - Absorb source and parse failures at the load boundary.
//!
//! # Invariants
//! - Loading never fails; failures become `LoadDiagnostic` entries.
//! - The snapshot is never mutated after construction.

pub mod city_repo;
