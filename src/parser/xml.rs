//! Minimal element tree over quick-xml events.
//!
//! Package parts are small enough to hold in memory, and the body walk
//! needs parent/child relationships (text boxes nest paragraphs inside
//! runs), so events are folded into a tree keyed by local names.

use std::borrow::Cow;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, Result};

/// An XML element with namespace prefixes stripped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlElement {
    /// Local element name
    pub name: String,
    /// Attributes as (local name, unescaped value)
    pub attributes: Vec<(String, String)>,
    /// Child nodes in document order
    pub children: Vec<XmlNode>,
}

/// A node in the element tree.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    /// A child element
    Element(XmlElement),
    /// Character data
    Text(String),
}

impl XmlElement {
    fn from_start(start: &BytesStart) -> Result<Self> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            attributes.push((key, value));
        }
        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
        })
    }

    /// Look up an attribute by local name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(e) => Some(e),
            XmlNode::Text(_) => None,
        })
    }

    /// Child elements with the given local name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.elements().filter(move |e| e.name == name)
    }

    /// First child element with the given local name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.elements().find(|e| e.name == name)
    }

    /// `val` attribute of the first child with the given local name.
    pub fn child_val(&self, name: &str) -> Option<&str> {
        self.child(name).and_then(|c| c.attr("val"))
    }

    /// Character data directly inside this element.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                XmlNode::Text(t) => Some(t.as_str()),
                XmlNode::Element(_) => None,
            })
            .collect()
    }
}

/// Parse an XML document into its root element.
pub fn parse_document(xml: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                stack.push(XmlElement::from_start(e)?);
            }
            Event::Empty(ref e) => {
                let element = XmlElement::from_start(e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| Error::Xml("unbalanced closing tag".into()))?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(e) => {
                if let Some(parent) = stack.last_mut() {
                    push_text(parent, e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(parent) = stack.last_mut() {
                    let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                    push_text(parent, Cow::Owned(text));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err(Error::Xml("unexpected end of document".into()));
    }
    root.ok_or_else(|| Error::Xml("document has no root element".into()))
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(XmlNode::Element(element));
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(element);
            Ok(())
        }
        None => Err(Error::Xml("multiple root elements".into())),
    }
}

fn push_text(parent: &mut XmlElement, text: Cow<'_, str>) {
    if let Some(XmlNode::Text(existing)) = parent.children.last_mut() {
        existing.push_str(&text);
    } else {
        parent.children.push(XmlNode::Text(text.into_owned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_prefixes() {
        let xml = r#"<?xml version="1.0"?>
<w:document xmlns:w="urn:w"><w:body><w:p><w:r><w:t xml:space="preserve"> Hi &amp; bye </w:t></w:r></w:p></w:body></w:document>"#;
        let root = parse_document(xml).unwrap();
        assert_eq!(root.name, "document");

        let t = root
            .child("body")
            .and_then(|b| b.child("p"))
            .and_then(|p| p.child("r"))
            .and_then(|r| r.child("t"))
            .unwrap();
        assert_eq!(t.text(), " Hi & bye ");
        assert_eq!(t.attr("space"), Some("preserve"));
    }

    #[test]
    fn test_child_val() {
        let root = parse_document(r#"<pPr><jc val="center"/><pStyle w:val="Title"/></pPr>"#)
            .unwrap();
        assert_eq!(root.child_val("jc"), Some("center"));
        assert_eq!(root.child_val("pStyle"), Some("Title"));
        assert_eq!(root.child_val("ind"), None);
    }

    #[test]
    fn test_children_named_keeps_order() {
        let root = parse_document("<tr><tc>a</tc><x/><tc>b</tc></tr>").unwrap();
        let texts: Vec<_> = root.children_named("tc").map(|c| c.text()).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn test_mismatched_tags_fail() {
        assert!(parse_document("<a><b></a>").is_err());
    }

    #[test]
    fn test_truncated_document_fails() {
        assert!(parse_document("<a><b/>").is_err());
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(parse_document("").is_err());
    }
}
