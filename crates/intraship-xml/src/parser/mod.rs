//! Owned response tree.
//!
//! SOAP responses are parsed with `roxmltree` and copied into [`XmlNode`]s so
//! the result can outlive the response body. Element lookups compare local
//! names ASCII case-insensitively: the service is not consistent about the
//! casing of its response elements (`labelURL` vs `Labelurl`).
//!
//! Parsed nodes keep a handle on the document they came from, so their markup
//! can be handed out exactly as received.

use std::{fmt::Write as _, ops::Range, sync::Arc};

use roxmltree::{Document, Node, NodeType};

use crate::{builder::escape, XmlError};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Source {
    document: Arc<str>,
    /// The element including its own tags.
    outer: Range<usize>,
    /// Everything between the start and the end tag.
    inner: Range<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    name: String,
    namespace: Option<String>,
    text: Option<String>,
    children: Vec<XmlNode>,
    /// `None` for synthesized nodes.
    source: Option<Source>,
}

/// Parses `xml` and returns its root element.
pub fn parse(xml: &str) -> Result<XmlNode, XmlError> {
    let document = Document::parse(xml).inspect_err(|e| {
        tracing::debug!(error = %e, length = xml.len(), "failed to parse XML document");
    })?;
    let source: Arc<str> = Arc::from(xml);
    Ok(XmlNode::from_node(document.root_element(), &source))
}

impl XmlNode {
    /// Creates an element node without namespace, used to synthesize wrappers.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Trimmed text content; `None` for empty or whitespace-only elements.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.is(name))
    }

    /// Follows `path` from this node, taking the first match at each step.
    pub fn find(&self, path: &[&str]) -> Option<&Self> {
        path.iter().try_fold(self, |node, name| node.child(name))
    }

    /// Every node reachable through `path`, fanning out over repeated elements.
    pub fn find_all(&self, path: &[&str]) -> Vec<&Self> {
        let mut current = vec![self];
        for name in path {
            current = current
                .into_iter()
                .flat_map(|node| node.children.iter().filter(|child| child.is(name)))
                .collect();
        }
        current
    }

    pub fn text_at(&self, path: &[&str]) -> Option<&str> {
        self.find(path).and_then(Self::text)
    }

    /// Depth-first search for descendants named `name`, not descending into matches.
    pub fn descendants_named<'s>(&'s self, name: &str) -> Vec<&'s Self> {
        let mut found = Vec::new();
        for child in &self.children {
            if child.is(name) {
                found.push(child);
            } else {
                found.extend(child.descendants_named(name));
            }
        }
        found
    }

    /// The node's markup. Parsed nodes return the original text; synthesized
    /// ones are serialized with local names only.
    pub fn to_xml_string(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    /// The markup between the node's tags, including text mixed in with
    /// child elements, prefixes and namespace declarations.
    pub fn inner_xml(&self) -> String {
        if let Some(source) = &self.source {
            return source.document[source.inner.clone()].to_string();
        }

        let mut out = String::new();
        for child in &self.children {
            child.write_markup(&mut out);
        }
        out
    }

    fn write_markup(&self, out: &mut String) {
        if let Some(source) = &self.source {
            out.push_str(&source.document[source.outer.clone()]);
            return;
        }

        let _ = write!(out, "<{}", self.name);

        if self.children.is_empty() {
            match &self.text {
                Some(text) => {
                    let _ = write!(out, ">{}</{}>", escape(text), self.name);
                }
                None => out.push_str("/>"),
            }
            return;
        }

        out.push('>');
        for child in &self.children {
            child.write_markup(out);
        }
        let _ = write!(out, "</{}>", self.name);
    }
}

impl XmlNode {
    fn from_node(node: Node<'_, '_>, document: &Arc<str>) -> Self {
        let tag_name = node.tag_name();

        let outer = node.range();
        let inner = match (node.first_child(), node.last_child()) {
            (Some(first), Some(last)) => first.range().start..last.range().end,
            _ => outer.end..outer.end,
        };

        let mut text = String::new();
        let mut children = Vec::new();
        for child in node.children() {
            match child.node_type() {
                NodeType::Element => children.push(Self::from_node(child, document)),
                NodeType::Text => text.push_str(child.text().unwrap_or_default()),
                _ => {}
            }
        }

        Self {
            name: tag_name.name().to_string(),
            namespace: tag_name.namespace().map(str::to_string),
            text: (!text.is_empty()).then_some(text),
            children,
            source: Some(Source {
                document: Arc::clone(document),
                outer,
                inner,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<CreateShipmentResponse xmlns:cis="http://dhl.de/webservice/cisbase">
  <cis:Version><cis:majorRelease>1</cis:majorRelease></cis:Version>
  <status>
    <StatusCode>0</StatusCode>
    <StatusMessage>ok</StatusMessage>
  </status>
  <CreationState>
    <StatusMessage>first</StatusMessage>
    <StatusMessage>second</StatusMessage>
    <ShipmentNumber><cis:shipmentNumber>SHP123</cis:shipmentNumber></ShipmentNumber>
    <Labelurl>https://labels.example/SHP123</Labelurl>
  </CreationState>
</CreateShipmentResponse>"#;

    #[test]
    fn test_parse_and_find_path() {
        let root = parse(RESPONSE).unwrap();
        assert_eq!(root.name(), "CreateShipmentResponse");
        assert_eq!(root.text_at(&["status", "StatusCode"]), Some("0"));
        assert_eq!(
            root.text_at(&["CreationState", "ShipmentNumber", "shipmentNumber"]),
            Some("SHP123")
        );
        assert_eq!(
            root.find(&["Version", "majorRelease"]).unwrap().namespace(),
            Some("http://dhl.de/webservice/cisbase")
        );
    }

    #[test]
    fn test_lookup_ignores_ascii_case() {
        let root = parse(RESPONSE).unwrap();
        assert_eq!(
            root.text_at(&["creationstate", "labelURL"]),
            Some("https://labels.example/SHP123")
        );
    }

    #[test]
    fn test_find_all_fans_out() {
        let root = parse(RESPONSE).unwrap();
        let messages: Vec<_> = root
            .find_all(&["CreationState", "StatusMessage"])
            .into_iter()
            .filter_map(XmlNode::text)
            .collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_whitespace_only_text_is_none() {
        let root = parse("<a>  <b/>  </a>").unwrap();
        assert_eq!(root.text(), None);
        assert!(root.has_children());
    }

    #[test]
    fn test_inner_xml_is_the_received_markup() {
        let label = r#"<lbl:Label xmlns:lbl="urn:label" lbl:v="2"><lbl:Barcode>0034</lbl:Barcode>tail &amp; more</lbl:Label>"#;
        let root = parse(&format!("<XMLLabel>{label}</XMLLabel>")).unwrap();

        assert_eq!(root.inner_xml(), label);
        assert_eq!(root.child("Label").unwrap().to_xml_string(), label);
    }

    #[test]
    fn test_inner_xml_keeps_leading_text_and_comments() {
        let root = parse("<XMLLabel>head<!-- c --><a/>tail</XMLLabel>").unwrap();
        assert_eq!(root.inner_xml(), "head<!-- c --><a/>tail");

        let empty = parse("<XMLLabel/>").unwrap();
        assert_eq!(empty.inner_xml(), "");
    }

    #[test]
    fn test_synthesized_wrapper_embeds_parsed_markup() {
        let parsed = parse(r#"<x:Status xmlns:x="urn:x"><x:Code>0</x:Code></x:Status>"#).unwrap();
        let body = XmlNode::new("Body").with_child(parsed);
        assert_eq!(
            body.to_xml_string(),
            r#"<Body><x:Status xmlns:x="urn:x"><x:Code>0</x:Code></x:Status></Body>"#
        );
        assert_eq!(
            body.inner_xml(),
            r#"<x:Status xmlns:x="urn:x"><x:Code>0</x:Code></x:Status>"#
        );
    }

    #[test]
    fn test_descendants_named() {
        let root = parse(
            "<DeletionState><Status><StatusCode>2</StatusCode><StatusMessage>unknown</StatusMessage></Status></DeletionState>",
        )
        .unwrap();
        let found: Vec<_> = root
            .descendants_named("StatusMessage")
            .into_iter()
            .filter_map(XmlNode::text)
            .collect();
        assert_eq!(found, vec!["unknown"]);
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        assert!(matches!(parse("<a><b></a>"), Err(XmlError::ParserError(_))));
    }
}
