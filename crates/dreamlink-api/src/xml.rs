// Generic XML tree parsing for device responses.
//
// The box's control API wraps every answer in a small ad hoc XML
// document (e2powerstate, e2simplexmlresult, ...). No schema is
// enforced: any well-formed document parses into a generic tree, and
// callers extract fields by path.

use std::collections::BTreeMap;

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::Error;

/// A parsed XML node: either leaf text or a tag → child mapping.
///
/// Repeated sibling tags keep only the last occurrence; the device
/// protocol never relies on element lists. Mixed content is resolved in
/// favor of child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Text(String),
    Element(BTreeMap<String, XmlNode>),
}

impl XmlNode {
    /// Extract the text value at `segments`, failing with
    /// [`Error::MissingField`] when any step is absent or the path ends
    /// on a non-leaf node.
    pub fn path(&self, segments: &[&str]) -> Result<&str, Error> {
        let missing = || Error::MissingField {
            path: segments.join("/"),
        };

        let mut node = self;
        for segment in segments {
            let XmlNode::Element(children) = node else {
                return Err(missing());
            };
            node = children.get(*segment).ok_or_else(missing)?;
        }

        match node {
            XmlNode::Text(value) => Ok(value),
            XmlNode::Element(_) => Err(missing()),
        }
    }

    /// Absent-tolerant variant of [`path`](Self::path).
    pub fn find(&self, segments: &[&str]) -> Option<&str> {
        self.path(segments).ok()
    }
}

/// Parse an XML document into a generic [`XmlNode`] tree.
///
/// The returned node is a synthetic root element whose children are the
/// document's top-level tags, so extraction paths start at the document
/// root tag (e.g. `["e2powerstate", "e2instandby"]`).
pub fn parse(input: &str) -> Result<XmlNode, Error> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(true);

    // (tag name, accumulated children, accumulated text) per open element;
    // index 0 is the synthetic document root.
    let mut stack: Vec<(String, BTreeMap<String, XmlNode>, String)> =
        vec![(String::new(), BTreeMap::new(), String::new())];

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                stack.push((name, BTreeMap::new(), String::new()));
            }
            Ok(Event::Empty(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if let Some(top) = stack.last_mut() {
                    top.1.insert(name, XmlNode::Text(String::new()));
                }
            }
            Ok(Event::Text(t)) => {
                let text = t.unescape().map_err(|e| Error::Xml {
                    message: e.to_string(),
                })?;
                if let Some(top) = stack.last_mut() {
                    top.2.push_str(&text);
                }
            }
            Ok(Event::CData(t)) => {
                if let Some(top) = stack.last_mut() {
                    top.2.push_str(&String::from_utf8_lossy(&t.into_inner()));
                }
            }
            Ok(Event::End(_)) => {
                let Some((name, children, text)) = stack.pop() else {
                    return Err(unbalanced(&reader));
                };
                if stack.is_empty() {
                    return Err(unbalanced(&reader));
                }
                let node = if children.is_empty() {
                    XmlNode::Text(text.trim().to_owned())
                } else {
                    XmlNode::Element(children)
                };
                if let Some(top) = stack.last_mut() {
                    top.1.insert(name, node);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(Error::Xml {
                    message: format!("parse error at byte {}: {e}", reader.buffer_position()),
                });
            }
        }
    }

    match stack.pop() {
        Some((_, children, _)) if stack.is_empty() => Ok(XmlNode::Element(children)),
        _ => Err(Error::Xml {
            message: "unclosed element at end of document".into(),
        }),
    }
}

fn unbalanced(reader: &Reader<&[u8]>) -> Error {
    Error::Xml {
        message: format!("unbalanced element at byte {}", reader.buffer_position()),
    }
}
