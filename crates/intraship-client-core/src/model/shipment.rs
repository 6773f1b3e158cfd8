use chrono::NaiveDate;
use intraship_xml::builder::Element;

use super::{optional_number, optional_plain, Address, Service};
use crate::request::cis;

/// One shipment order: what is sent, by whom, to whom.
#[derive(Debug, Clone, PartialEq, typed_builder::TypedBuilder, serde::Deserialize)]
pub struct Shipment {
    #[builder(default = default_product_code(), setter(into))]
    #[serde(default = "default_product_code")]
    pub product_code: String,
    #[builder(default = today())]
    #[serde(default = "today")]
    pub shipment_date: NaiveDate,
    #[builder(default, setter(into, strip_option))]
    pub customer_reference: Option<String>,
    pub weight_kg: f64,
    #[builder(default, setter(strip_option))]
    pub length_cm: Option<u32>,
    #[builder(default, setter(strip_option))]
    pub width_cm: Option<u32>,
    #[builder(default, setter(strip_option))]
    pub height_cm: Option<u32>,
    #[builder(default = default_package_type(), setter(into))]
    #[serde(default = "default_package_type")]
    pub package_type: String,
    pub sender: Address,
    pub receiver: Address,
    #[builder(default)]
    #[serde(default)]
    pub services: Vec<Service>,
}

fn default_product_code() -> String {
    "EPN".to_string()
}

fn default_package_type() -> String {
    "PK".to_string()
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

impl Shipment {
    /// Renders the `Shipment` element of a `ShipmentOrder`.
    ///
    /// `ekp` and `partner_id` come from the client configuration, not from
    /// the shipment itself.
    pub fn to_element<'a>(&'a self, ekp: &'a str, partner_id: &'a str) -> Element<'a> {
        let item = Element::new("ShipmentItem")
            .add_child(Element::new("WeightInKG").set_text(self.weight_kg.to_string()))
            .add_child_optional(optional_number("LengthInCM", self.length_cm))
            .add_child_optional(optional_number("WidthInCM", self.width_cm))
            .add_child_optional(optional_number("HeightInCM", self.height_cm))
            .add_child(Element::new("PackageType").set_text(self.package_type.as_str()));

        let details = Element::new("ShipmentDetails")
            .add_child(Element::new("ProductCode").set_text(self.product_code.as_str()))
            .add_child(
                Element::new("ShipmentDate")
                    .set_text(self.shipment_date.format("%Y-%m-%d").to_string()),
            )
            .add_child(cis("EKP").set_text(ekp))
            .add_child(Element::new("Attendance").add_child(cis("partnerID").set_text(partner_id)))
            .add_child_optional(optional_plain(
                "CustomerReference",
                self.customer_reference.as_deref(),
            ))
            .add_child(item)
            .add_children(self.services.iter().map(Service::to_element));

        Element::new("Shipment")
            .add_child(details)
            .add_child(Element::new("Shipper").add_children(self.sender.to_elements()))
            .add_child(Element::new("Receiver").add_children(self.receiver.to_elements()))
    }
}

/// One or more shipments submitted in a single `createShipmentDD` call.
///
/// A lone [`Shipment`] converts into a batch of one, so callers never have to
/// wrap it themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentBatch(Vec<Shipment>);

impl ShipmentBatch {
    pub fn single(shipment: Shipment) -> Self {
        Self(vec![shipment])
    }

    pub fn as_slice(&self) -> &[Shipment] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Shipment> for ShipmentBatch {
    fn from(shipment: Shipment) -> Self {
        Self::single(shipment)
    }
}

impl From<Vec<Shipment>> for ShipmentBatch {
    fn from(shipments: Vec<Shipment>) -> Self {
        Self(shipments)
    }
}

impl From<&[Shipment]> for ShipmentBatch {
    fn from(shipments: &[Shipment]) -> Self {
        Self(shipments.to_vec())
    }
}

impl FromIterator<Shipment> for ShipmentBatch {
    fn from_iter<I: IntoIterator<Item = Shipment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
