//! XML primitives for the Intraship client.
//!
//! [`builder`] assembles request documents from borrowed value objects,
//! [`parser`] turns a response document into an owned [`parser::XmlNode`] tree
//! that can be navigated by element path.

pub mod builder;
pub mod parser;

#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    #[error("Invalid XML: {0}")]
    ParserError(#[from] roxmltree::Error),

    #[error("XML Builder error: {0}")]
    BuilderError(#[from] crate::builder::XmlBuilderError),
}
