//! A scripted [`Transport`] for tests.

use std::{collections::VecDeque, sync::Mutex};

use intraship_xml::parser::{self, XmlNode};
use url::Url;

use crate::{
    error::TransportError,
    soap::Authentication,
    transport::{Operation, Transport},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub operation: Operation,
    pub user: String,
    pub payload: String,
}

/// Replays queued responses in order and records every call it receives.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<XmlNode, TransportError>>>,
    calls: Mutex<Vec<RecordedCall>>,
    endpoint: Option<Url>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response element (e.g. `<CreateShipmentResponse>…`) that is
    /// returned wrapped in a `Body` node, the way a real transport returns it.
    pub fn respond_with(self, response_xml: &str) -> Self {
        let response = parser::parse(response_xml)
            .map(|node| XmlNode::new("Body").with_child(node))
            .map_err(|e| TransportError::MalformedResponse(e.to_string()));
        self.push(response)
    }

    /// Reports `endpoint` as the URL the transport posts to.
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    pub fn fail_with(self, error: TransportError) -> Self {
        self.push(Err(error))
    }

    fn push(self, response: Result<XmlNode, TransportError>) -> Self {
        self.responses
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls().pop()
    }
}

impl Transport for MockTransport {
    fn call(
        &self,
        operation: Operation,
        auth: &Authentication,
        payload: &str,
    ) -> Result<XmlNode, TransportError> {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(RecordedCall {
                operation,
                user: auth.user().to_string(),
                payload: payload.to_string(),
            });

        self.responses
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Network(format!(
                    "no scripted response left for {operation}"
                )))
            })
    }

    fn endpoint(&self) -> Option<&Url> {
        self.endpoint.as_ref()
    }
}
