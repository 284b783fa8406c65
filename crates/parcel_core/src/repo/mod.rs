//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the parcel data access contract.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Inserts validate caller-owned fields (`Parcel::validate_new()`) before
//!   persistence; single-field updates and deletes are not validated.
//! - Rows read back are checked with `Parcel::validate()`.
//! - Repository APIs return semantic errors (`NotFound`, `ConstraintViolation`)
//!   in addition to DB transport errors.

pub mod parcel_repo;
