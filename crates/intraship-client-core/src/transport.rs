use intraship_xml::parser::XmlNode;
use url::Url;

use crate::{error::TransportError, soap::Authentication};

/// The four operations of the Intraship `ISService`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateShipmentDD,
    DeleteShipmentDD,
    DoManifestDD,
    BookPickup,
}

impl Operation {
    /// Operation name as listed in the service description.
    pub const fn name(self) -> &'static str {
        match self {
            Self::CreateShipmentDD => "createShipmentDD",
            Self::DeleteShipmentDD => "deleteShipmentDD",
            Self::DoManifestDD => "doManifestDD",
            Self::BookPickup => "bookPickup",
        }
    }

    pub const fn soap_action(self) -> &'static str {
        match self {
            Self::CreateShipmentDD => "urn:createShipmentDD",
            Self::DeleteShipmentDD => "urn:deleteShipmentDD",
            Self::DoManifestDD => "urn:doManifestDD",
            Self::BookPickup => "urn:bookPickup",
        }
    }

    /// Element of the `is` namespace wrapping the payload inside `Body`.
    pub const fn request_element(self) -> &'static str {
        match self {
            Self::CreateShipmentDD => "CreateShipmentDDRequest",
            Self::DeleteShipmentDD => "DeleteShipmentDDRequest",
            Self::DoManifestDD => "DoManifestDDRequest",
            Self::BookPickup => "BookPickupRequest",
        }
    }

    /// First child of the response `Body`.
    pub const fn response_element(self) -> &'static str {
        match self {
            Self::CreateShipmentDD => "CreateShipmentResponse",
            Self::DeleteShipmentDD => "DeleteShipmentResponse",
            Self::DoManifestDD => "DoManifestResponse",
            Self::BookPickup => "BookPickupResponse",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The remote-procedure layer.
///
/// An implementation puts `payload` into the operation's request element,
/// attaches `auth` as the SOAP header, performs exactly one exchange and
/// returns the response `Body` element. [`crate::soap`] has the envelope
/// handling every transport needs.
pub trait Transport {
    fn call(
        &self,
        operation: Operation,
        auth: &Authentication,
        payload: &str,
    ) -> Result<XmlNode, TransportError>;

    /// The URL requests are posted to, for transports that talk to one.
    ///
    /// [`crate::CarrierClient::new`] refuses a transport whose endpoint is not
    /// the one of the client's environment.
    fn endpoint(&self) -> Option<&Url> {
        None
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn call(
        &self,
        operation: Operation,
        auth: &Authentication,
        payload: &str,
    ) -> Result<XmlNode, TransportError> {
        (**self).call(operation, auth, payload)
    }

    fn endpoint(&self) -> Option<&Url> {
        (**self).endpoint()
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn call(
        &self,
        operation: Operation,
        auth: &Authentication,
        payload: &str,
    ) -> Result<XmlNode, TransportError> {
        (**self).call(operation, auth, payload)
    }

    fn endpoint(&self) -> Option<&Url> {
        (**self).endpoint()
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn call(
        &self,
        operation: Operation,
        auth: &Authentication,
        payload: &str,
    ) -> Result<XmlNode, TransportError> {
        (**self).call(operation, auth, payload)
    }

    fn endpoint(&self) -> Option<&Url> {
        (**self).endpoint()
    }
}
