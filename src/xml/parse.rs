use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::{Document, Element, Node, XmlError};

/// Parse XML text holding zero or more top-level elements.
///
/// Declarations, comments, processing instructions and whitespace between
/// top-level elements are ignored. Mismatched end tags, unclosed elements
/// and non-whitespace text outside any element are errors.
pub fn parse_fragment(text: &str) -> Result<Document, XmlError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(false);

    let mut roots = Vec::new();
    let mut open: Vec<Element> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => open.push(Element::new(element_name(e)?)),
            Event::Empty(ref e) => {
                let element = Element::new(element_name(e)?);
                attach(&mut open, &mut roots, element);
            }
            Event::End(_) => {
                // quick-xml validates end names, so the top of the stack matches
                if let Some(element) = open.pop() {
                    attach(&mut open, &mut roots, element);
                }
            }
            Event::Text(ref t) => {
                let text = t.unescape()?;
                push_text(&mut open, &text)?;
            }
            Event::CData(ref c) => {
                let text = std::str::from_utf8(c)?;
                push_text(&mut open, text)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(element) = open.pop() {
        return Err(XmlError::UnclosedElement(element.name));
    }

    Ok(Document { roots })
}

fn element_name(e: &BytesStart) -> Result<String, XmlError> {
    Ok(std::str::from_utf8(e.name().as_ref())?.to_string())
}

fn attach(open: &mut [Element], roots: &mut Vec<Element>, element: Element) {
    match open.last_mut() {
        Some(parent) => parent.push(Node::Element(element)),
        None => roots.push(element),
    }
}

fn push_text(open: &mut [Element], text: &str) -> Result<(), XmlError> {
    match open.last_mut() {
        Some(parent) => {
            if !text.is_empty() {
                parent.push(Node::Text(text.to_string()));
            }
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(XmlError::StrayText(text.trim().to_string())),
    }
}
