use intraship_xml::{builder::Element, parser::XmlNode};
use tracing::{debug, info, instrument, warn};

use crate::{
    config::{ClientConfig, Environment},
    error::{IntrashipError, Result},
    model::{Address, BookingInformation, ShipmentBatch},
    request::{self, build_request},
    response::{interpret, required_text, ResponseLayout},
    soap::Authentication,
    transport::{Operation, Transport},
};

/// Emitted on every [`CarrierClient::book_pickup`] call.
pub const BOOK_PICKUP_ADVISORY: &str = "DHL does not yet support the book pickup call";

/// Per-call options of [`CarrierClient::create_shipment`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateShipmentOptions {
    /// Ask for the label inline as XML instead of a download URL.
    pub xml_label_response: bool,
}

/// The label of a created shipment, in the form requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    Url(String),
    Xml(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentCreated {
    pub shipment_number: String,
    pub label: Label,
}

impl ShipmentCreated {
    pub fn label_url(&self) -> Option<&str> {
        match &self.label {
            Label::Url(url) => Some(url),
            Label::Xml(_) => None,
        }
    }

    pub fn xml_label(&self) -> Option<&str> {
        match &self.label {
            Label::Xml(xml) => Some(xml),
            Label::Url(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickupBooked {
    pub confirmation_number: String,
}

/// Entry point to the Intraship shipment service.
///
/// The client is built once per credential set. It holds the configuration
/// and the authentication header and never mutates them, so one client can
/// be shared between threads whenever its transport can (`&CarrierClient`
/// is `Send` when `T: Sync`). Every call performs exactly one exchange; there
/// are no retries and no timeouts beyond the transport's own.
#[derive(Debug)]
pub struct CarrierClient<T> {
    config: ClientConfig,
    environment: Environment,
    auth: Authentication,
    transport: T,
}

impl<T: Transport> CarrierClient<T> {
    /// Fails with a configuration error when the credentials are incomplete
    /// or when `transport` posts to another endpoint than `environment`'s.
    pub fn new(config: ClientConfig, environment: Environment, transport: T) -> Result<Self> {
        config.validate()?;

        let endpoint = environment.endpoint_url()?;
        if let Some(actual) = transport.endpoint().filter(|actual| **actual != endpoint) {
            return Err(IntrashipError::Configuration(
                format!("transport posts to {actual}, but {environment:?} uses {endpoint}").into(),
            ));
        }

        info!(
            user = %config.user,
            ekp = %config.ekp,
            ?environment,
            %endpoint,
            wsdl = environment.wsdl(),
            "intraship client configured"
        );

        Ok(Self {
            auth: Authentication::new(config.user.as_str(), config.signature.as_str()),
            config,
            environment,
            transport,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Creates one or more shipments and returns the first shipment number
    /// together with its label.
    #[instrument(name = "intraship.create_shipment", level = "info", skip_all, fields(count = tracing::field::Empty), err)]
    pub fn create_shipment(
        &self,
        shipments: impl Into<ShipmentBatch>,
        options: CreateShipmentOptions,
    ) -> Result<ShipmentCreated> {
        let shipments = shipments.into();
        tracing::Span::current().record("count", shipments.len());

        if shipments.is_empty() {
            return Err(IntrashipError::Validation(
                "at least one shipment is required".into(),
            ));
        }

        let mut order =
            Element::new("ShipmentOrder").add_child(Element::new("SequenceNumber").set_text("1"));
        for shipment in shipments.as_slice() {
            order = order.add_child(shipment.to_element(&self.config.ekp, &self.config.partner_id));
            if options.xml_label_response {
                order = order.add_child(Element::new("LabelResponseType").set_text("XML"));
            }
        }

        let body = self.dispatch(Operation::CreateShipmentDD, [order])?;
        let response = interpret(&body, &ResponseLayout::CREATE_SHIPMENT)?;

        let shipment_number = required_text(
            response,
            &["CreationState", "ShipmentNumber", "shipmentNumber"],
        )?;

        let label = if options.xml_label_response {
            Label::Xml(xml_label(response)?)
        } else {
            Label::Url(required_text(response, &["CreationState", "Labelurl"])?)
        };

        info!(%shipment_number, "shipment created");
        Ok(ShipmentCreated {
            shipment_number,
            label,
        })
    }

    #[instrument(name = "intraship.delete_shipment", level = "info", skip(self), err)]
    pub fn delete_shipment(&self, shipment_number: &str) -> Result<()> {
        self.shipment_number_request(&ResponseLayout::DELETE_SHIPMENT, shipment_number)
    }

    /// Finalizes a shipment for today's pickup.
    #[instrument(name = "intraship.manifest", level = "info", skip(self), err)]
    pub fn manifest(&self, shipment_number: &str) -> Result<()> {
        self.shipment_number_request(&ResponseLayout::MANIFEST, shipment_number)
    }

    /// Books a pickup at `pickup_address`.
    ///
    /// Note: the service does not guarantee support for this operation; every
    /// call logs [`BOOK_PICKUP_ADVISORY`] as a warning.
    ///
    /// `booking` is not modified. For DDI and DDN bookings without an account
    /// the request uses the client's EKP; a missing attendance is always
    /// replaced by the client's partner id. The `ContactOrderer` section is
    /// left out entirely when `contact_orderer` is `None`.
    #[instrument(
        name = "intraship.book_pickup",
        level = "info",
        skip_all,
        fields(product = %booking.product_id),
        err
    )]
    pub fn book_pickup(
        &self,
        booking: &BookingInformation,
        pickup_address: &Address,
        contact_orderer: Option<&Address>,
    ) -> Result<PickupBooked> {
        warn!("{BOOK_PICKUP_ADVISORY}");

        let booking = self.with_booking_defaults(booking);

        let pickup = Element::new("PickupAddress").add_children(pickup_address.to_elements());
        let orderer = contact_orderer
            .map(|orderer| Element::new("ContactOrderer").add_children(orderer.to_elements()));

        let mut payload = vec![booking.to_element(), pickup];
        payload.extend(orderer);

        let body = self.dispatch(Operation::BookPickup, payload)?;
        let response = interpret(&body, &ResponseLayout::BOOK_PICKUP)?;

        let confirmation_number = required_text(response, &["ConfirmationNumber"])?;
        info!(%confirmation_number, "pickup booked");
        Ok(PickupBooked {
            confirmation_number,
        })
    }

    fn with_booking_defaults(&self, booking: &BookingInformation) -> BookingInformation {
        let mut booking = booking.clone();
        if booking.account.is_none() && booking.product_id.bills_client_account() {
            booking.account = Some(self.config.ekp.clone());
        }
        if booking.attendance.is_none() {
            booking.attendance = Some(self.config.partner_id.clone());
        }
        booking
    }

    /// Delete and manifest share the request shape and differ only in the
    /// operation and the node holding the failure detail.
    fn shipment_number_request(&self, layout: &ResponseLayout, shipment_number: &str) -> Result<()> {
        if shipment_number.trim().is_empty() {
            return Err(IntrashipError::Validation(
                "shipment number must not be empty".into(),
            ));
        }

        let body = self.dispatch(layout.operation, [request::shipment_number(shipment_number)])?;
        interpret(&body, layout)?;

        info!(operation = %layout.operation, shipment_number, "operation succeeded");
        Ok(())
    }

    fn dispatch<'a>(
        &self,
        operation: Operation,
        body: impl IntoIterator<Item = Element<'a>>,
    ) -> Result<XmlNode> {
        let payload = build_request(body)?;
        debug!(%operation, payload = %payload, "sending request");

        let response = self.transport.call(operation, &self.auth, &payload)?;
        debug!(%operation, response = %response.to_xml_string(), "received response");
        Ok(response)
    }
}

/// The inline label: its markup when `XMLLabel` has child elements, else its text.
fn xml_label(response: &XmlNode) -> Result<String> {
    let label = response
        .find(&["CreationState", "XMLLabel"])
        .ok_or_else(|| IntrashipError::InvalidResponse("CreationState is missing XMLLabel".into()))?;

    if label.has_children() {
        return Ok(label.inner_xml());
    }

    label
        .text()
        .map(str::to_string)
        .ok_or_else(|| IntrashipError::InvalidResponse("XMLLabel is empty".into()))
}
