use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use intraship_xml::builder::Element;

use super::{optional_number, optional_plain};

/// Product a pickup is booked for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(from = "String")]
pub enum ProductId {
    /// Domestic express, international.
    Ddi,
    /// Domestic express, national.
    Ddn,
    Tdi,
    Tdn,
    Other(String),
}

impl ProductId {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ddi => "DDI",
            Self::Ddn => "DDN",
            Self::Tdi => "TDI",
            Self::Tdn => "TDN",
            Self::Other(other) => other,
        }
    }

    /// Products whose booking is billed to the client's own EKP unless the
    /// caller names another account.
    pub const fn bills_client_account(&self) -> bool {
        matches!(self, Self::Ddi | Self::Ddn)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "DDI" => Self::Ddi,
            "DDN" => Self::Ddn,
            "TDI" => Self::Tdi,
            "TDN" => Self::Tdn,
            _ => Self::Other(value.trim().to_string()),
        }
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pickup request.
///
/// `account` and `attendance` may be left unset; the client fills them in
/// from its own configuration before the request is sent.
#[derive(Debug, Clone, PartialEq, typed_builder::TypedBuilder, serde::Deserialize)]
pub struct BookingInformation {
    #[builder(setter(into))]
    pub product_id: ProductId,
    #[builder(default, setter(into, strip_option))]
    pub account: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pub attendance: Option<String>,
    pub pickup_date: NaiveDate,
    pub ready_by_time: NaiveTime,
    pub closing_time: NaiveTime,
    #[builder(default, setter(into, strip_option))]
    pub remark: Option<String>,
    /// Where at the pickup address the parcels wait, e.g. "reception".
    #[builder(default, setter(into, strip_option))]
    pub area: Option<String>,
    #[builder(default, setter(strip_option))]
    pub total_pieces: Option<u32>,
    #[builder(default, setter(strip_option))]
    pub pallet_count: Option<u32>,
    #[builder(default, setter(strip_option))]
    pub total_weight_kg: Option<f64>,
    #[builder(default, setter(strip_option))]
    pub max_length_cm: Option<u32>,
    #[builder(default, setter(strip_option))]
    pub max_width_cm: Option<u32>,
    #[builder(default, setter(strip_option))]
    pub max_height_cm: Option<u32>,
}

impl BookingInformation {
    pub fn to_element(&self) -> Element<'_> {
        Element::new("BookingInformation")
            .add_child(Element::new("ProductID").set_text(self.product_id.as_str()))
            .add_child_optional(optional_plain("Account", self.account.as_deref()))
            .add_child_optional(optional_plain("Attendance", self.attendance.as_deref()))
            .add_child(
                Element::new("PickupDate").set_text(self.pickup_date.format("%Y-%m-%d").to_string()),
            )
            .add_child(
                Element::new("ReadyByTime").set_text(self.ready_by_time.format("%H:%M").to_string()),
            )
            .add_child(
                Element::new("ClosingTime").set_text(self.closing_time.format("%H:%M").to_string()),
            )
            .add_child_optional(optional_plain("Remark", self.remark.as_deref()))
            .add_child_optional(optional_plain("PickupLocation", self.area.as_deref()))
            .add_child_optional(optional_number("AmountOfPieces", self.total_pieces))
            .add_child_optional(optional_number("AmountOfPallets", self.pallet_count))
            .add_child_optional(optional_number("WeightInKG", self.total_weight_kg))
            .add_child_optional(optional_number("MaxLengthInCM", self.max_length_cm))
            .add_child_optional(optional_number("MaxWidthInCM", self.max_width_cm))
            .add_child_optional(optional_number("MaxHeightInCM", self.max_height_cm))
    }
}
