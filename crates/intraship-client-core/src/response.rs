//! Reading status codes and results out of response bodies.

use intraship_xml::parser::XmlNode;

use crate::{
    error::{CarrierOperationError, IntrashipError},
    transport::Operation,
};

/// The status code the service uses for success.
pub const SUCCESS_CODE: &str = "0";

/// Where an operation's response keeps its status and failure detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseLayout {
    pub operation: Operation,
    /// Path below the response element to the itemized status node(s).
    /// Empty when the operation reports no detail.
    pub detail: &'static [&'static str],
}

impl ResponseLayout {
    pub const CREATE_SHIPMENT: Self = Self {
        operation: Operation::CreateShipmentDD,
        detail: &["CreationState", "StatusMessage"],
    };
    pub const DELETE_SHIPMENT: Self = Self {
        operation: Operation::DeleteShipmentDD,
        detail: &["DeletionState", "Status"],
    };
    pub const MANIFEST: Self = Self {
        operation: Operation::DoManifestDD,
        detail: &["ManifestState", "Status"],
    };
    pub const BOOK_PICKUP: Self = Self {
        operation: Operation::BookPickup,
        detail: &[],
    };
}

/// Checks the `status` node of a response body.
///
/// Returns the operation's response element when the status code is `"0"`,
/// otherwise the carrier's code, message and itemized detail.
pub fn interpret<'d>(
    body: &'d XmlNode,
    layout: &ResponseLayout,
) -> Result<&'d XmlNode, IntrashipError> {
    let response_name = layout.operation.response_element();
    let response = body.child(response_name).ok_or_else(|| {
        IntrashipError::InvalidResponse(format!("response has no {response_name} element").into())
    })?;

    let code = response.text_at(&["status", "StatusCode"]).ok_or_else(|| {
        IntrashipError::InvalidResponse(format!("{response_name} has no status code").into())
    })?;

    if code == SUCCESS_CODE {
        return Ok(response);
    }

    Err(CarrierOperationError {
        code: code.to_string(),
        message: response
            .text_at(&["status", "StatusMessage"])
            .unwrap_or_default()
            .to_string(),
        detail: detail_messages(response, layout.detail),
    }
    .into())
}

/// Text at `path` below `node`, or an `InvalidResponse` naming the path.
pub fn required_text(node: &XmlNode, path: &[&str]) -> Result<String, IntrashipError> {
    node.text_at(path).map(str::to_string).ok_or_else(|| {
        IntrashipError::InvalidResponse(
            format!("{} is missing {}", node.name(), path.join("/")).into(),
        )
    })
}

fn detail_messages(response: &XmlNode, path: &[&str]) -> Vec<String> {
    if path.is_empty() {
        return Vec::new();
    }

    response
        .find_all(path)
        .into_iter()
        .flat_map(|node| {
            if node.has_children() {
                node.descendants_named("StatusMessage")
            } else {
                vec![node]
            }
        })
        .filter_map(XmlNode::text)
        .map(str::to_string)
        .collect()
}
