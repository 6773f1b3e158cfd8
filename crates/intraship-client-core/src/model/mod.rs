//! Value objects the caller describes a shipment or pickup with.
//!
//! Each one renders its own request fragment; none of them keeps anything the
//! service returns.

mod address;
mod booking;
mod service;
mod shipment;

pub use address::{Address, Party};
pub use booking::{BookingInformation, ProductId};
pub use service::Service;
pub use shipment::{Shipment, ShipmentBatch};

use intraship_xml::builder::Element;

use crate::request::cis;

/// `Some(element)` unless the value is missing or blank.
fn optional_text<'a>(element: Element<'a>, value: Option<&'a str>) -> Option<Element<'a>> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| element.set_text(v))
}

fn optional_cis<'a>(name: &'a str, value: Option<&'a str>) -> Option<Element<'a>> {
    optional_text(cis(name), value)
}

fn optional_plain<'a>(name: &'a str, value: Option<&'a str>) -> Option<Element<'a>> {
    optional_text(Element::new(name), value)
}

fn optional_number<T: ToString>(name: &str, value: Option<T>) -> Option<Element<'_>> {
    value.map(|v| Element::new(name).set_text(v.to_string()))
}
