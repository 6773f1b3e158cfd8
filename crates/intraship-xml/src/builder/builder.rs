use crate::builder::{AliasMap, Declaration, Element, Namespace, NamespaceWrite, XmlBuilderError};

/// Represents a builder for constructing a complete XML document.
pub struct Builder<'a> {
    /// The XML declaration.
    declaration: Option<Declaration<'a>>,
    /// The root element of the XML document.
    element: Element<'a>,
}

impl<'a> Builder<'a> {
    /// Creates a new instance of `Builder` with the given declaration and root element.
    ///
    /// # Example
    ///
    /// ```
    /// use intraship_xml::builder::{Builder, Declaration, Element};
    /// let declaration = Declaration::new("1.0", "UTF-8");
    /// let builder = Builder::new(Some(declaration), Element::new("root"));
    /// assert_eq!(
    ///     builder.to_xml_string().unwrap(),
    ///     r#"<?xml version="1.0" encoding="UTF-8"?><root/>"#
    /// );
    /// ```
    pub const fn new(declaration: Option<Declaration<'a>>, element: Element<'a>) -> Self {
        Builder {
            declaration,
            element,
        }
    }

    pub fn write_to<W: std::io::Write>(&self, mut w: W) -> Result<(), XmlBuilderError> {
        if let Some(decl) = &self.declaration {
            decl.write(&mut w)?;
        }
        self.element.ns_write(&mut w, None)
    }

    pub fn to_xml_string(&self) -> Result<String, XmlBuilderError> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

/// A sequence of sibling elements without a common root.
///
/// Namespaces are resolved through aliases that are declared by whatever
/// document the fragment is eventually embedded in, so no `xmlns` attribute
/// is written for them.
#[derive(Debug, Clone, Default)]
pub struct Fragment<'a> {
    aliases: AliasMap<'a>,
    elements: Vec<Element<'a>>,
}

impl<'a> Fragment<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alias(mut self, url: &'a str, alias: &'a str) -> Self {
        self.aliases.insert(Namespace::new(url), Some(alias));
        self
    }

    pub fn push(mut self, element: Element<'a>) -> Self {
        self.elements.push(element);
        self
    }

    pub fn extend(mut self, elements: impl IntoIterator<Item = Element<'a>>) -> Self {
        self.elements.extend(elements);
        self
    }

    pub fn write_to<W: std::io::Write>(&self, mut w: W) -> Result<(), XmlBuilderError> {
        for element in &self.elements {
            element.ns_write(&mut w, Some(&self.aliases))?;
        }
        Ok(())
    }

    pub fn to_xml_string(&self) -> Result<String, XmlBuilderError> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}
