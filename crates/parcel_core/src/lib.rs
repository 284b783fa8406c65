//! Persistence core for parcel tracking.
//! This crate owns the parcel lifecycle invariants and their SQLite storage.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::parcel::{
    ClientId, Parcel, ParcelNumber, ParcelStatus, ParcelValidationError, UNASSIGNED_NUMBER,
};
pub use repo::parcel_repo::{ParcelRepository, RepoError, RepoResult, SqliteParcelRepository};
pub use service::parcel_service::ParcelService;
