//! Owned XML element tree built with quick-xml
//!
//! Record lines are small, self-contained elements, so each one is parsed
//! into a tiny tree and queried with DOM-style lookups:
//!
//! - [`Element::descendants`] walks every nested element with a given
//!   qualified name (e.g. `pms:sourcedId`) in document order, like
//!   `getElementsByTagName`.
//! - [`Element::text_content`] concatenates all nested text, like the DOM
//!   `textContent` property. Whitespace is preserved.
//!
//! Namespace prefixes are kept verbatim in element names and are never
//! resolved, so a line lifted out of its envelope still parses even though
//! its `xmlns:*` declarations live on the wrapper element.

pub use error::XmlError;
pub use parse::parse_fragment;

mod error;
mod parse;


/// A node inside an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Nested element
    Element(Element),
    /// Text or CDATA content, already unescaped
    Text(String),
}

/// An XML element with its qualified name and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    children: Vec<Node>,
}

impl Element {
    /// Create an empty element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Qualified tag name, including any namespace prefix
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct child nodes
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub(crate) fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    /// All nested elements named `name`, in document order (self excluded)
    pub fn descendants<'a, 'n>(&'a self, name: &'n str) -> Descendants<'a, 'n> {
        Descendants {
            stack: vec![self.children.iter()],
            name,
        }
    }

    /// First nested element named `name`
    pub fn first(&self, name: &str) -> Option<&Element> {
        self.descendants(name).next()
    }

    /// Concatenated text of this element and everything below it
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Element(element) => element.collect_text(out),
                Node::Text(text) => out.push_str(text),
            }
        }
    }

    /// Follow a chain of first-descendant lookups and return the text found there.
    ///
    /// Returns an empty string as soon as any step along `path` is missing.
    pub fn text_at(&self, path: &[&str]) -> String {
        let mut current = self;
        for name in path {
            match current.first(name) {
                Some(element) => current = element,
                None => return String::new(),
            }
        }
        current.text_content()
    }
}

/// Pre-order iterator over nested elements matching one name
pub struct Descendants<'a, 'n> {
    stack: Vec<std::slice::Iter<'a, Node>>,
    name: &'n str,
}

impl<'a, 'n> Iterator for Descendants<'a, 'n> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let siblings = self.stack.last_mut()?;
            match siblings.next() {
                Some(Node::Element(element)) => {
                    self.stack.push(element.children.iter());
                    if element.name == self.name {
                        return Some(element);
                    }
                }
                Some(Node::Text(_)) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Top-level elements parsed from one piece of XML text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    roots: Vec<Element>,
}

impl Document {
    /// First top-level element (the document element for a well-formed document)
    pub fn root(&self) -> Option<&Element> {
        self.roots.first()
    }

    /// All top-level elements
    pub fn roots(&self) -> &[Element] {
        &self.roots
    }

    /// Every element named `name`, top-level elements included, in document order
    pub fn elements_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.roots.iter().flat_map(move |root| {
            let own = (root.name() == name).then_some(root);
            own.into_iter().chain(root.descendants(name))
        })
    }
}
