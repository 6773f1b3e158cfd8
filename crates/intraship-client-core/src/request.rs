//! Operation payloads.
//!
//! A payload is the sequence of elements placed inside the operation's request
//! element: the `cis:Version` header followed by the operation body. It never
//! contains authentication, which travels in the SOAP header.

use intraship_xml::builder::{Element, Fragment, XmlBuilderError};

pub const INTRASHIP_NS: &str = "http://de.ws.intraship";
pub const CISBASE_NS: &str = "http://dhl.de/webservice/cisbase";

pub const MAJOR_RELEASE: &str = "1";
pub const MINOR_RELEASE: &str = "0";

/// An element in the `cis` namespace.
pub fn cis(name: &str) -> Element<'_> {
    Element::new(name).set_namespace(CISBASE_NS)
}

/// The version header every request starts with.
pub fn version() -> Element<'static> {
    cis("Version")
        .add_child(cis("majorRelease").set_text(MAJOR_RELEASE))
        .add_child(cis("minorRelease").set_text(MINOR_RELEASE))
}

/// Serializes `version()` followed by `body`.
///
/// Namespace prefixes (`cis:`) are written but not declared; the envelope the
/// payload is embedded into declares them.
pub fn build_request<'a>(
    body: impl IntoIterator<Item = Element<'a>>,
) -> Result<String, XmlBuilderError> {
    Fragment::new()
        .with_alias(CISBASE_NS, "cis")
        .with_alias(INTRASHIP_NS, "is")
        .push(version())
        .extend(body)
        .to_xml_string()
}

/// `ShipmentNumber/cis:shipmentNumber`, the whole body of delete and manifest calls.
pub fn shipment_number(number: &str) -> Element<'_> {
    Element::new("ShipmentNumber").add_child(cis("shipmentNumber").set_text(number))
}
