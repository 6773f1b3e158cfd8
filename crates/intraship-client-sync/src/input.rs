//! Shipment and pickup input files.

use std::path::Path;

use anyhow::Context;
use intraship_client_core::{Address, BookingInformation, ShipmentBatch, Shipment};
use serde::Deserialize;

/// `[[shipments]]` tables, sent together in one order.
#[derive(Debug, Deserialize)]
pub struct ShipmentFile {
    pub shipments: Vec<Shipment>,
}

/// A `[booking]` table with a `[pickup_address]` and an optional
/// `[contact_orderer]`.
#[derive(Debug, Deserialize)]
pub struct PickupFile {
    pub booking: BookingInformation,
    pub pickup_address: Address,
    pub contact_orderer: Option<Address>,
}

impl ShipmentFile {
    pub fn into_batch(self) -> ShipmentBatch {
        self.shipments.into()
    }
}

pub fn read_toml<T: for<'de> Deserialize<'de>>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}
