//! Parcel domain model.
//!
//! # Responsibility
//! - Define the parcel record shared by the store, service and CLI.
//! - Encode the lifecycle `registered -> sent -> delivered`.
//!
//! # Invariants
//! - `number` is `UNASSIGNED_NUMBER` until the store assigns one.
//! - `address` may change and the parcel may be deleted only while `Registered`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned parcel identifier.
pub type ParcelNumber = i64;

/// Opaque client identifier; not validated against any client registry.
pub type ClientId = i64;

/// Number carried by a parcel that has not been persisted yet.
pub const UNASSIGNED_NUMBER: ParcelNumber = 0;

/// Lifecycle stage of a parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParcelStatus {
    /// Accepted for shipping; address can still be changed.
    Registered,
    /// Handed over to the carrier.
    Sent,
    /// Received by the addressee.
    Delivered,
}

impl ParcelStatus {
    /// Text stored in `parcel.status`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::Sent => "sent",
            Self::Delivered => "delivered",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "registered" => Some(Self::Registered),
            "sent" => Some(Self::Sent),
            "delivered" => Some(Self::Delivered),
            _ => None,
        }
    }

    /// Following lifecycle stage, `None` once delivered.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Registered => Some(Self::Sent),
            Self::Sent => Some(Self::Delivered),
            Self::Delivered => None,
        }
    }
}

impl Display for ParcelStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors for parcel records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParcelValidationError {
    /// `created_at` is empty or whitespace only.
    BlankCreatedAt,
    /// `number` is below zero.
    NegativeNumber(ParcelNumber),
}

impl Display for ParcelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankCreatedAt => write!(f, "created_at must not be blank"),
            Self::NegativeNumber(number) => {
                write!(f, "parcel number must not be negative, got {number}")
            }
        }
    }
}

impl Error for ParcelValidationError {}

/// A shipment tracked from registration to delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    /// Assigned by the store on insert; ignored on input.
    pub number: ParcelNumber,
    /// Owning client.
    pub client: ClientId,
    pub status: ParcelStatus,
    /// Free-form delivery destination.
    pub address: String,
    /// Registration timestamp supplied by the caller (RFC 3339 by convention).
    pub created_at: String,
}

impl Parcel {
    /// Creates an unpersisted parcel in `Registered` state.
    pub fn new(client: ClientId, address: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            number: UNASSIGNED_NUMBER,
            client,
            status: ParcelStatus::Registered,
            address: address.into(),
            created_at: created_at.into(),
        }
    }

    /// Returns a copy carrying the given store number.
    pub fn with_number(mut self, number: ParcelNumber) -> Self {
        self.number = number;
        self
    }

    /// Checks a stored record, including its number.
    pub fn validate(&self) -> Result<(), ParcelValidationError> {
        if self.number < 0 {
            return Err(ParcelValidationError::NegativeNumber(self.number));
        }
        self.validate_new()
    }

    /// Checks only the fields a caller supplies on registration; `number`
    /// is not read because the store assigns it.
    pub fn validate_new(&self) -> Result<(), ParcelValidationError> {
        if self.created_at.trim().is_empty() {
            return Err(ParcelValidationError::BlankCreatedAt);
        }
        Ok(())
    }

    /// Whether `address` may still be changed.
    pub fn is_address_mutable(&self) -> bool {
        self.status == ParcelStatus::Registered
    }

    /// Whether the parcel may still be deleted.
    pub fn is_deletable(&self) -> bool {
        self.status == ParcelStatus::Registered
    }
}
