//! Error types for epidoc operations.

use thiserror::Error;

/// Errors that can occur while reading a TEI document.
///
/// These surface only at the parse boundary. Once a document tree has been
/// built, rendering never fails: missing structure renders as an empty
/// contribution instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Not a TEI document: root element is <{0}>")]
    NotTei(String),

    #[error("Empty document")]
    EmptyDocument,

    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;
