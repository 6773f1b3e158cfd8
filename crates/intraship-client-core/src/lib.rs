//! Protocol core of the DHL Intraship client.
//!
//! Builds operation payloads from value objects, hands them to a
//! [`Transport`] and interprets the carrier's status codes. Nothing in this
//! crate performs I/O.

pub mod client;
pub mod config;
pub mod error;
#[cfg(any(test, feature = "test-helpers"))]
pub mod mock;
pub mod model;
pub mod request;
pub mod response;
pub mod soap;
pub mod transport;

pub use client::{
    CarrierClient, CreateShipmentOptions, Label, PickupBooked, ShipmentCreated,
    BOOK_PICKUP_ADVISORY,
};
pub use config::{ClientConfig, Environment};
pub use error::{CarrierOperationError, IntrashipError, Result, TransportError};
pub use model::{Address, BookingInformation, Party, ProductId, Service, Shipment, ShipmentBatch};
pub use soap::Authentication;
pub use transport::{Operation, Transport};
