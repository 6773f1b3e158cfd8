//! SOAP 1.1 envelope handling shared by transports.

use intraship_xml::{
    builder::{Builder, Declaration, Element},
    parser::{self, XmlNode},
};

use crate::{
    error::TransportError,
    request::{cis, CISBASE_NS, INTRASHIP_NS},
    transport::Operation,
};

pub const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
/// Faults may come back as SOAP 1.2 from intermediaries.
pub const SOAP12_ENVELOPE_NS: &str = "http://www.w3.org/2003/05/soap-envelope";

/// The `cis:Authentification` SOAP header attached to every call.
///
/// Built once per client; the signature is kept out of `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Authentication {
    user: String,
    signature: String,
}

impl Authentication {
    /// The header has a fixed `type` of 0.
    pub const AUTH_TYPE: &'static str = "0";

    pub fn new(user: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            signature: signature.into(),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn to_element(&self) -> Element<'_> {
        cis("Authentification")
            .add_child(cis("user").set_text(self.user.as_str()))
            .add_child(cis("signature").set_text(self.signature.as_str()))
            .add_child(cis("type").set_text(Self::AUTH_TYPE))
    }
}

impl std::fmt::Debug for Authentication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authentication")
            .field("user", &self.user)
            .field("signature", &"<redacted>")
            .finish()
    }
}

/// Wraps an operation payload into a complete request envelope.
pub fn envelope(
    operation: Operation,
    auth: &Authentication,
    payload: &str,
) -> Result<String, TransportError> {
    let root = Element::new("Envelope")
        .set_namespace(SOAP_ENVELOPE_NS)
        .add_namespace_declaration(SOAP_ENVELOPE_NS, Some("soapenv"))
        .add_namespace_declaration(INTRASHIP_NS, Some("is"))
        .add_namespace_declaration(CISBASE_NS, Some("cis"))
        .add_child(
            Element::new("Header")
                .set_namespace(SOAP_ENVELOPE_NS)
                .add_child(auth.to_element()),
        )
        .add_child(
            Element::new("Body").set_namespace(SOAP_ENVELOPE_NS).add_child(
                Element::new(operation.request_element())
                    .set_namespace(INTRASHIP_NS)
                    .set_raw(payload),
            ),
        );

    Builder::new(Some(Declaration::new("1.0", "UTF-8")), root)
        .to_xml_string()
        .map_err(|e| TransportError::Envelope(e.to_string()))
}

/// Extracts the `Body` element of a response envelope.
///
/// A `Fault` inside the body is returned as [`TransportError::SoapFault`].
pub fn read_response(xml: &str) -> Result<XmlNode, TransportError> {
    let root = parser::parse(xml).map_err(|e| TransportError::MalformedResponse(e.to_string()))?;

    let soap_namespace = matches!(
        root.namespace(),
        Some(SOAP_ENVELOPE_NS | SOAP12_ENVELOPE_NS)
    );
    if !root.is("Envelope") || !soap_namespace {
        return Err(TransportError::MalformedResponse(format!(
            "expected a SOAP Envelope, found '{}' in namespace {:?}",
            root.name(),
            root.namespace()
        )));
    }

    let body = root
        .child("Body")
        .ok_or_else(|| TransportError::MalformedResponse("SOAP envelope has no Body".into()))?;

    if let Some(fault) = body.child("Fault") {
        return Err(fault_error(fault));
    }

    Ok(body.clone())
}

fn fault_error(fault: &XmlNode) -> TransportError {
    // SOAP 1.1 uses faultcode/faultstring, 1.2 Code/Value and Reason/Text.
    let code = fault
        .text_at(&["faultcode"])
        .or_else(|| fault.text_at(&["Code", "Value"]))
        .unwrap_or("Unknown");
    let reason = fault
        .text_at(&["faultstring"])
        .or_else(|| fault.text_at(&["Reason", "Text"]))
        .unwrap_or_default();

    TransportError::SoapFault {
        code: code.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_carries_auth_header_and_payload() {
        let auth = Authentication::new("geschaeftskunden_api", "Dhl_ep_test1");
        let xml = envelope(Operation::DeleteShipmentDD, &auth, "<ShipmentNumber/>").unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?><soapenv:Envelope"#));
        assert!(xml.contains(r#"xmlns:cis="http://dhl.de/webservice/cisbase""#));
        assert!(xml.contains(
            "<soapenv:Header><cis:Authentification><cis:user>geschaeftskunden_api</cis:user>\
             <cis:signature>Dhl_ep_test1</cis:signature><cis:type>0</cis:type></cis:Authentification></soapenv:Header>"
        ));
        assert!(xml.contains(
            "<soapenv:Body><is:DeleteShipmentDDRequest><ShipmentNumber/></is:DeleteShipmentDDRequest></soapenv:Body>"
        ));

        let parsed = parser::parse(&xml).unwrap();
        assert_eq!(
            parsed.text_at(&["Header", "Authentification", "type"]),
            Some("0")
        );
    }

    #[test]
    fn test_debug_hides_signature() {
        let auth = Authentication::new("user", "hunter2");
        assert!(!format!("{auth:?}").contains("hunter2"));
    }

    #[test]
    fn test_read_response_returns_body() {
        let body = read_response(
            r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
                 <soapenv:Body><DeleteShipmentResponse><status><StatusCode>0</StatusCode></status></DeleteShipmentResponse></soapenv:Body>
               </soapenv:Envelope>"#,
        )
        .unwrap();

        assert!(body.is("Body"));
        assert_eq!(
            body.text_at(&["DeleteShipmentResponse", "status", "StatusCode"]),
            Some("0")
        );
    }

    #[test]
    fn test_read_response_maps_fault() {
        let err = read_response(
            r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
                 <soapenv:Body><soapenv:Fault><faultcode>soapenv:Server</faultcode><faultstring>login failed</faultstring></soapenv:Fault></soapenv:Body>
               </soapenv:Envelope>"#,
        )
        .unwrap_err();

        assert_eq!(
            err,
            TransportError::SoapFault {
                code: "soapenv:Server".into(),
                reason: "login failed".into()
            }
        );
    }

    #[test]
    fn test_read_response_rejects_non_envelope() {
        assert!(matches!(
            read_response("<html><body>502 Bad Gateway</body></html>"),
            Err(TransportError::MalformedResponse(_))
        ));
        assert!(matches!(
            read_response("not xml"),
            Err(TransportError::MalformedResponse(_))
        ));
        assert!(matches!(
            read_response("<Envelope><Body/></Envelope>"),
            Err(TransportError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_read_response_maps_soap12_fault() {
        let err = read_response(
            r#"<env:Envelope xmlns:env="http://www.w3.org/2003/05/soap-envelope">
                 <env:Body><env:Fault><env:Code><env:Value>env:Receiver</env:Value></env:Code>
                 <env:Reason><env:Text xml:lang="en">gateway timeout</env:Text></env:Reason></env:Fault></env:Body>
               </env:Envelope>"#,
        )
        .unwrap_err();

        assert_eq!(
            err,
            TransportError::SoapFault {
                code: "env:Receiver".into(),
                reason: "gateway timeout".into()
            }
        );
    }
}
