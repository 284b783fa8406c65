//! Parcel use-case service.
//!
//! # Responsibility
//! - Provide tracker entry points (register, advance, re-address, cancel).
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository status gates.
//! - Service layer remains storage-agnostic.

use crate::model::parcel::{ClientId, Parcel, ParcelNumber, ParcelStatus};
use crate::repo::parcel_repo::{ParcelRepository, RepoResult};
use chrono::{SecondsFormat, Utc};
use log::{error, info};

/// Use-case service wrapper for parcel tracking.
pub struct ParcelService<R: ParcelRepository> {
    repo: R,
}

impl<R: ParcelRepository> ParcelService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new parcel for `client`, stamped with the current UTC time.
    ///
    /// # Contract
    /// - Status starts as `registered`.
    /// - Returned parcel carries the store-assigned number.
    pub fn register(&self, client: ClientId, address: impl Into<String>) -> RepoResult<Parcel> {
        let parcel = Parcel::new(client, address, now_rfc3339());
        let result = self.repo.add(&parcel).map(|number| parcel.with_number(number));
        log_outcome("parcel_register", &result, |parcel| {
            format!("number={} client={}", parcel.number, parcel.client)
        });
        result
    }

    /// Lists parcels owned by `client`.
    pub fn client_parcels(&self, client: ClientId) -> RepoResult<Vec<Parcel>> {
        let result = self.repo.get_by_client(client);
        log_outcome("parcel_list", &result, |parcels| {
            format!("client={client} count={}", parcels.len())
        });
        result
    }

    /// Loads one parcel by number.
    pub fn parcel(&self, number: ParcelNumber) -> RepoResult<Parcel> {
        self.repo.get(number)
    }

    /// Moves a parcel one step along `registered -> sent -> delivered`.
    ///
    /// Returns the new status, or `None` when the parcel is already delivered
    /// (left untouched).
    pub fn next_status(&self, number: ParcelNumber) -> RepoResult<Option<ParcelStatus>> {
        let result = self.advance(number);
        log_outcome("parcel_next_status", &result, |next| match next {
            Some(status) => format!("number={number} to={status}"),
            None => format!("number={number} to=none"),
        });
        result
    }

    /// Changes the delivery address; ignored unless the parcel is registered.
    pub fn change_address(&self, number: ParcelNumber, address: &str) -> RepoResult<()> {
        let result = self.repo.set_address(number, address);
        log_outcome("parcel_change_address", &result, |_| format!("number={number}"));
        result
    }

    /// Deletes the parcel; ignored unless the parcel is registered.
    pub fn delete(&self, number: ParcelNumber) -> RepoResult<()> {
        let result = self.repo.delete(number);
        log_outcome("parcel_delete", &result, |_| format!("number={number}"));
        result
    }

    fn advance(&self, number: ParcelNumber) -> RepoResult<Option<ParcelStatus>> {
        let parcel = self.repo.get(number)?;
        let Some(next) = parcel.status.next() else {
            return Ok(None);
        };
        self.repo.set_status(number, next)?;
        Ok(Some(next))
    }
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn log_outcome<T>(event: &str, result: &RepoResult<T>, describe: impl FnOnce(&T) -> String) {
    match result {
        Ok(value) => info!("event={event} module=service status=ok {}", describe(value)),
        Err(err) => error!("event={event} module=service status=error error={err}"),
    }
}
