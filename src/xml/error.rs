/// Errors that can occur while building a document tree
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// Error reported by the underlying XML reader
    #[error("XML parsing error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// UTF-8 encoding error in a tag name or CDATA section
    #[error("UTF-8 encoding error: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),

    /// Input ended while an element was still open
    #[error("Unclosed element: {0}")]
    UnclosedElement(String),

    /// Non-whitespace text found outside of any element
    #[error("Text outside of any element: {0}")]
    StrayText(String),
}
