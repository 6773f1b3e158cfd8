/// Represents an XML declaration.
#[derive(Debug, Clone)]
pub struct Declaration<'a> {
    /// The XML version.
    version: &'a str,
    /// The encoding used for the XML document.
    encoding: &'a str,
    /// The standalone status of the XML document (optional).
    standalone: Option<bool>,
}

impl<'a> Declaration<'a> {
    /// Creates a new instance of `Declaration` with the given version and encoding.
    ///
    /// # Example
    ///
    /// ```
    /// use intraship_xml::builder::Declaration;
    /// let declaration = Declaration::new("1.0", "UTF-8");
    /// ```
    pub const fn new(version: &'a str, encoding: &'a str) -> Self {
        Declaration {
            version,
            encoding,
            standalone: None,
        }
    }

    pub const fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = Some(standalone);
        self
    }

    pub fn write<W: std::io::Write>(&self, w: &mut W) -> std::io::Result<()> {
        write!(
            w,
            "<?xml version=\"{}\" encoding=\"{}\"",
            self.version, self.encoding
        )?;
        if let Some(standalone) = self.standalone {
            let s = if standalone { "yes" } else { "no" };
            write!(w, " standalone=\"{s}\"")?;
        }
        w.write_all(b"?>")?;
        Ok(())
    }
}
