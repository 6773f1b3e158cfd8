use std::{sync::Arc, time::Duration};

use intraship_client_core::{
    soap::{self, Authentication},
    Environment, IntrashipError, Operation, Transport, TransportError,
};
use intraship_xml::parser::XmlNode;
use tracing::{debug, error, info, instrument};
use url::Url;

/// Posts SOAP 1.1 requests to the Intraship endpoint with a shared `ureq` agent.
///
/// The agent pools connections and is safe to use from several threads.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    endpoint: Url,
}

impl UreqTransport {
    /// A transport posting to `environment`'s endpoint, the one a
    /// [`intraship_client_core::CarrierClient`] for that environment expects.
    pub fn new(environment: Environment) -> Result<Self, IntrashipError> {
        Self::for_endpoint(environment.endpoint())
    }

    fn for_endpoint(endpoint: &str) -> Result<Self, IntrashipError> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            IntrashipError::Configuration(format!("invalid endpoint '{endpoint}': {e}").into())
        })?;

        let tls = native_tls::TlsConnector::new().map_err(|e| {
            IntrashipError::Configuration(format!("TLS setup failed: {e}").into())
        })?;

        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(30))
            .timeout_read(Duration::from_secs(60))
            .tls_connector(Arc::new(tls))
            .build();

        Ok(Self { agent, endpoint })
    }
}

impl Transport for UreqTransport {
    #[instrument(
        name = "http_client.call",
        level = "info",
        skip(self, auth, payload),
        fields(url = %self.endpoint),
        err
    )]
    fn call(
        &self,
        operation: Operation,
        auth: &Authentication,
        payload: &str,
    ) -> Result<XmlNode, TransportError> {
        // The envelope carries the signature and is never logged.
        let envelope = soap::envelope(operation, auth, payload)?;
        debug!(body_length = envelope.len(), "sending request");

        let result = self
            .agent
            .post(self.endpoint.as_str())
            .set("Content-Type", "text/xml; charset=utf-8")
            .set("SOAPAction", &format!("\"{}\"", operation.soap_action()))
            .send_string(&envelope);

        match result {
            Ok(response) => {
                let status = response.status();
                let body = response.into_string().map_err(|e| {
                    error!(error = %e, "failed to read response body");
                    TransportError::Network(e.to_string())
                })?;
                info!(status, response_body_length = body.len(), "response received");
                soap::read_response(&body)
            }
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                debug!(status, "received error status");
                Err(status_error(status, &body))
            }
            Err(e) => {
                error!(error = %e, "request failed");
                Err(TransportError::Network(e.to_string()))
            }
        }
    }

    fn endpoint(&self) -> Option<&Url> {
        Some(&self.endpoint)
    }
}

/// A non-2xx answer: SOAP services report faults with status 500, anything
/// else that is not a fault envelope is a plain HTTP error.
fn status_error(status: u16, body: &str) -> TransportError {
    match soap::read_response(body) {
        Err(fault @ TransportError::SoapFault { .. }) => fault,
        _ => TransportError::Http {
            status,
            body: body.to_string(),
        },
    }
}
