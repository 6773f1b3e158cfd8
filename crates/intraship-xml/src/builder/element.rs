use std::borrow::Cow;

use crate::builder::{escape, AliasMap, Namespace, NamespaceWrite, XmlBuilderError};

#[derive(Debug, Clone)]
enum Content<'a> {
    /// Text content, escaped on write.
    Text(Cow<'a, str>),
    /// Pre-serialized markup written verbatim.
    Raw(Cow<'a, str>),
    /// Child elements.
    Elements(Vec<Element<'a>>),

    None,
}

/// Represents an XML element.
#[derive(Debug, Clone)]
pub struct Element<'a> {
    /// The local name of the element.
    name: &'a str,
    /// The namespace the element belongs to, rendered through the alias map.
    namespace: Option<Namespace<'a>>,
    /// `xmlns` declarations emitted on this element and inherited by its children.
    namespace_declarations: Vec<(Namespace<'a>, Option<&'a str>)>,
    content: Content<'a>,
}

impl<'a> Element<'a> {
    /// Creates a new instance of `Element` with the given name.
    ///
    /// # Example
    ///
    /// ```
    /// use intraship_xml::builder::Element;
    /// let element = Element::new("ShipmentOrder");
    /// ```
    pub fn new(name: &'a str) -> Self {
        Element {
            name,
            namespace: None,
            namespace_declarations: Vec::new(),
            content: Content::None,
        }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn set_namespace(mut self, namespace: impl Into<Namespace<'a>>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Declares `xmlns:alias="url"` (or a default namespace when `alias` is `None`).
    ///
    /// # Example
    ///
    /// ```
    /// use intraship_xml::builder::Element;
    /// let element = Element::new("Envelope")
    ///     .set_namespace("http://schemas.xmlsoap.org/soap/envelope/")
    ///     .add_namespace_declaration("http://schemas.xmlsoap.org/soap/envelope/", Some("soapenv"));
    /// assert_eq!(
    ///     element.to_xml_string().unwrap(),
    ///     r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/"/>"#
    /// );
    /// ```
    pub fn add_namespace_declaration(mut self, url: &'a str, alias: Option<&'a str>) -> Self {
        self.namespace_declarations
            .push((Namespace::new(url), alias));
        self
    }

    /// Adds a child element. Any text content set before is replaced.
    pub fn add_child(mut self, child: Element<'a>) -> Self {
        match self.content {
            Content::None | Content::Text(_) | Content::Raw(_) => {
                self.content = Content::Elements(vec![child]);
            }
            Content::Elements(ref mut children) => {
                children.push(child);
            }
        }
        self
    }

    pub fn add_children(mut self, children: impl IntoIterator<Item = Element<'a>>) -> Self {
        for child in children {
            self = self.add_child(child);
        }
        self
    }

    /// Adds the child only when it is `Some`.
    pub fn add_child_optional(self, child: Option<Element<'a>>) -> Self {
        match child {
            Some(child) => self.add_child(child),
            None => self,
        }
    }

    /// Sets the text content. Any children added before are dropped.
    pub fn set_text(mut self, text: impl Into<Cow<'a, str>>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    /// Sets markup that is written as-is, without escaping.
    pub fn set_raw(mut self, markup: impl Into<Cow<'a, str>>) -> Self {
        self.content = Content::Raw(markup.into());
        self
    }

    pub fn write_to<W: std::io::Write>(&self, mut w: W) -> Result<(), XmlBuilderError> {
        self.ns_write(&mut w, None)
    }

    pub fn to_xml_string(&self) -> Result<String, XmlBuilderError> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    fn qualified_name(&self, alias_map: Option<&AliasMap<'a>>) -> Result<String, XmlBuilderError> {
        let Some(ns) = &self.namespace else {
            return Ok(self.name.to_string());
        };

        let Some(map) = alias_map else {
            return Err(XmlBuilderError::MissingAliasMapForElement {
                tag: self.name.to_string(),
                ns: ns.url.to_string(),
            });
        };

        match map.get(ns) {
            Some(Some(alias)) => Ok(format!("{alias}:{}", self.name)),
            Some(None) => Ok(self.name.to_string()),
            None => Err(XmlBuilderError::NamespaceNotDeclared {
                tag: self.name.to_string(),
                ns: ns.url.to_string(),
            }),
        }
    }
}

impl<'a> NamespaceWrite<'a> for Element<'a> {
    fn ns_write<W: std::io::Write>(
        &self,
        w: &mut W,
        alias_map: Option<&AliasMap<'a>>,
    ) -> Result<(), XmlBuilderError> {
        let scoped;
        let alias_map = if self.namespace_declarations.is_empty() {
            alias_map
        } else {
            let mut map = alias_map.cloned().unwrap_or_default();
            map.extend(self.namespace_declarations.iter().copied());
            scoped = map;
            Some(&scoped)
        };

        let name = self.qualified_name(alias_map)?;
        write!(w, "<{name}")?;

        for (ns, alias) in &self.namespace_declarations {
            match alias {
                Some(alias) => write!(w, " xmlns:{alias}=\"{}\"", escape(ns.url))?,
                None => write!(w, " xmlns=\"{}\"", escape(ns.url))?,
            }
        }

        match &self.content {
            Content::None => w.write_all(b"/>")?,
            Content::Text(text) => write!(w, ">{}</{name}>", escape(text))?,
            Content::Raw(markup) => write!(w, ">{markup}</{name}>")?,
            Content::Elements(children) => {
                w.write_all(b">")?;
                for child in children {
                    child.ns_write(w, alias_map)?;
                }
                write!(w, "</{name}>")?;
            }
        }
        Ok(())
    }
}
