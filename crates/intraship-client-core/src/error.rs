use std::borrow::Cow;

/// The service answered with a status code other than `"0"`.
///
/// `detail` holds the itemized status messages the service attaches to the
/// operation specific state node (`CreationState`, `DeletionState`, ...).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Intraship call failed with code {code}: {message} (Status messages: {detail:?})")]
pub struct CarrierOperationError {
    pub code: String,
    pub message: String,
    pub detail: Vec<String>,
}

/// Failures of the remote-procedure layer, surfaced to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("SOAP fault {code}: {reason}")]
    SoapFault { code: String, reason: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Failed to build request envelope: {0}")]
    Envelope(String),
}

#[derive(Debug, thiserror::Error)]
pub enum IntrashipError {
    #[error("Configuration error: {0}")]
    Configuration(Cow<'static, str>),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error(transparent)]
    CarrierOperation(#[from] CarrierOperationError),

    #[error("Validation error: {0}")]
    Validation(Cow<'static, str>),

    #[error("XML error: {0}")]
    Xml(#[from] intraship_xml::XmlError),

    #[error("Invalid response: {0}")]
    InvalidResponse(Cow<'static, str>),
}

impl From<intraship_xml::builder::XmlBuilderError> for IntrashipError {
    fn from(err: intraship_xml::builder::XmlBuilderError) -> Self {
        Self::Xml(err.into())
    }
}

impl IntrashipError {
    /// The carrier's own status, if the service rejected the call.
    pub fn carrier_status(&self) -> Option<&CarrierOperationError> {
        match self {
            Self::CarrierOperation(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, IntrashipError>;
