//! A small owned-or-borrowed XML element builder.
//!
//! Elements carry a [`Namespace`] and are rendered with the alias declared
//! for it by an ancestor (or by the enclosing [`Fragment`]).
#[allow(clippy::module_inception)]
mod builder;
mod declaration;
mod element;
mod namespace;

use std::{borrow::Cow, collections::HashMap};

pub use self::builder::*;
pub use self::declaration::*;
pub use self::element::*;
pub use self::namespace::*;

pub type AliasMap<'a> = HashMap<Namespace<'a>, Option<&'a str>>;

#[derive(Debug, thiserror::Error)]
pub enum XmlBuilderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("UTF-8 error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
    #[error("Missing alias map for element '{tag}' in namespace '{ns}'")]
    MissingAliasMapForElement { tag: String, ns: String },
    #[error("Namespace '{ns}' not declared for tag '{tag}'")]
    NamespaceNotDeclared { tag: String, ns: String },
}

pub trait NamespaceWrite<'a> {
    fn ns_write<W: std::io::Write>(
        &self,
        w: &mut W,
        aliases: Option<&AliasMap<'a>>,
    ) -> Result<(), XmlBuilderError>;
}

/// Escapes the five predefined XML entities.
pub fn escape(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CIS: &str = "http://dhl.de/webservice/cisbase";

    #[test]
    fn test_simple_xml() {
        let xml_string = Element::new("root").to_xml_string().unwrap();
        assert_eq!(xml_string, "<root/>");
    }

    #[test]
    fn test_element_with_nested_children() {
        let grandchild = Element::new("grandchild").set_text("Deep content");
        let child1 = Element::new("child1").add_child(grandchild);
        let child2 = Element::new("child2").set_text("Child 2 content");
        let element = Element::new("root").add_child(child1).add_child(child2);

        assert_eq!(
            element.to_xml_string().unwrap(),
            "<root><child1><grandchild>Deep content</grandchild></child1><child2>Child 2 content</child2></root>"
        );
    }

    #[test]
    fn test_setting_text_overwrites_children() {
        let element = Element::new("container")
            .add_child(Element::new("item"))
            .set_text("New text");
        assert_eq!(element.to_xml_string().unwrap(), "<container>New text</container>");
    }

    #[test]
    fn test_text_is_escaped() {
        let element = Element::new("name1").set_text("Müller & Söhne <\"GmbH\">");
        assert_eq!(
            element.to_xml_string().unwrap(),
            "<name1>Müller &amp; Söhne &lt;&quot;GmbH&quot;&gt;</name1>"
        );
    }

    #[test]
    fn test_raw_content_is_not_escaped() {
        let element = Element::new("Body").set_raw("<a>1</a>");
        assert_eq!(element.to_xml_string().unwrap(), "<Body><a>1</a></Body>");
    }

    #[test]
    fn test_namespace_alias_inherited_by_children() {
        let element = Element::new("Version")
            .set_namespace(CIS)
            .add_namespace_declaration(CIS, Some("cis"))
            .add_child(Element::new("majorRelease").set_namespace(CIS).set_text("1"));

        assert_eq!(
            element.to_xml_string().unwrap(),
            r#"<cis:Version xmlns:cis="http://dhl.de/webservice/cisbase"><cis:majorRelease>1</cis:majorRelease></cis:Version>"#
        );
    }

    #[test]
    fn test_undeclared_namespace_is_an_error() {
        let element = Element::new("root")
            .add_namespace_declaration("http://example.com/other", Some("o"))
            .add_child(Element::new("child").set_namespace(CIS));

        assert!(matches!(
            element.to_xml_string(),
            Err(XmlBuilderError::NamespaceNotDeclared { .. })
        ));
    }

    #[test]
    fn test_namespace_without_alias_map_is_an_error() {
        let element = Element::new("child").set_namespace(CIS);
        assert!(matches!(
            element.to_xml_string(),
            Err(XmlBuilderError::MissingAliasMapForElement { .. })
        ));
    }

    #[test]
    fn test_fragment_uses_aliases_without_declaring_them() {
        let fragment = Fragment::new()
            .with_alias(CIS, "cis")
            .push(Element::new("shipmentNumber").set_namespace(CIS).set_text("123"))
            .push(Element::new("Plain"));

        assert_eq!(
            fragment.to_xml_string().unwrap(),
            "<cis:shipmentNumber>123</cis:shipmentNumber><Plain/>"
        );
    }

    #[test]
    fn test_default_namespace_declaration() {
        let element = Element::new("root")
            .set_namespace("http://example.com")
            .add_namespace_declaration("http://example.com", None);
        assert_eq!(
            element.to_xml_string().unwrap(),
            r#"<root xmlns="http://example.com"/>"#
        );
    }

    #[test]
    fn test_add_child_optional() {
        let element = Element::new("Communication")
            .add_child_optional(None)
            .add_child_optional(Some(Element::new("phone").set_text("0221")));
        assert_eq!(
            element.to_xml_string().unwrap(),
            "<Communication><phone>0221</phone></Communication>"
        );
    }
}
