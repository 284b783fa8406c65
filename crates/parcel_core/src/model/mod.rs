//! Domain model for tracked parcels.
//!
//! # Invariants
//! - A persisted parcel is identified by a positive, never reused `ParcelNumber`.
//! - `client` and `created_at` are written once at registration.

pub mod parcel;
