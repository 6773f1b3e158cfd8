use core::fmt;
use std::hash::Hash;

/// Represents a namespace in XML, identified by its URL.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Namespace<'a> {
    pub url: &'a str,
}

impl PartialEq for Namespace<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl fmt::Display for Namespace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.url.fmt(f)
    }
}

impl Hash for Namespace<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.url.hash(state);
    }
}

impl<'a> Namespace<'a> {
    /// Creates a new instance of `Namespace` with the given URI.
    ///
    /// # Example
    ///
    /// ```
    /// use intraship_xml::builder::Namespace;
    /// let namespace = Namespace::new("http://dhl.de/webservice/cisbase");
    /// ```
    pub const fn new(uri: &'a str) -> Self {
        Namespace { url: uri }
    }
}

impl<'a> From<&'a str> for Namespace<'a> {
    fn from(url: &'a str) -> Self {
        Namespace::new(url)
    }
}
