// SPDX-License-Identifier: GPL-3.0-or-later

//! Minimal owned XML tree and the path accessors entity schemas are written in.

use std::fmt::Display;
use std::str::FromStr;

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;

use crate::date::FlexibleDate;
use crate::error::{MusicBrainzError, Result};

/// Something that can be decoded from one XML element.
pub trait FromXml: Sized {
    fn from_xml(element: &XmlElement) -> Result<Self>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlAttribute {
    /// Qualified name as written, e.g. `ext:score`.
    pub name: String,
    pub local_name: String,
    /// Namespace URI the prefix resolved to, if any.
    pub namespace: Option<String>,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<XmlAttribute>,
    text: String,
    children: Vec<XmlElement>,
}

fn malformed(err: impl Display) -> MusicBrainzError {
    MusicBrainzError::MalformedDocument(err.to_string())
}

fn utf8(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(malformed)
}

/// Prefixes the field of a decode error raised inside the element at `path`,
/// so the error names the full path from the decoded entity.
fn nested(path: &str, err: MusicBrainzError) -> MusicBrainzError {
    match err {
        MusicBrainzError::FieldDecode { field, raw, reason } => {
            let field = if field.starts_with('@') {
                format!("{path}{field}")
            } else {
                format!("{path}/{field}")
            };
            MusicBrainzError::FieldDecode { field, raw, reason }
        }
        other => other,
    }
}

impl XmlElement {
    /// Parses a complete document and returns its root element.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let mut reader = NsReader::from_reader(bytes);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event_into(&mut buf).map_err(malformed)? {
                Event::Start(ref e) => {
                    let element = Self::open(&reader, e)?;
                    stack.push(element);
                }
                Event::Empty(ref e) => {
                    let element = Self::open(&reader, e)?;
                    Self::close(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| malformed("closing tag without matching opening tag"))?;
                    Self::close(&mut stack, &mut root, element)?;
                }
                Event::Text(ref e) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&e.unescape().map_err(malformed)?);
                    }
                }
                Event::CData(ref e) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&utf8(e)?);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = stack.last() {
            return Err(malformed(format!("unclosed element <{}>", open.name)));
        }
        root.ok_or_else(|| malformed("document has no root element"))
    }

    fn open<R>(reader: &NsReader<R>, start: &BytesStart) -> Result<Self> {
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(malformed)?;
            let (resolved, local) = reader.resolve_attribute(attr.key);
            let namespace = match resolved {
                ResolveResult::Bound(ns) => Some(utf8(ns.as_ref())?),
                _ => None,
            };
            attributes.push(XmlAttribute {
                name: utf8(attr.key.as_ref())?,
                local_name: utf8(local.as_ref())?,
                namespace,
                value: attr.unescape_value().map_err(malformed)?.into_owned(),
            });
        }

        Ok(Self {
            name: utf8(start.name().as_ref())?,
            attributes,
            text: String::new(),
            children: Vec::new(),
        })
    }

    fn close(stack: &mut [XmlElement], root: &mut Option<XmlElement>, element: Self) -> Result<()> {
        match stack.last_mut() {
            Some(parent) => parent.children.push(element),
            None if root.is_none() => *root = Some(element),
            None => return Err(malformed("more than one root element")),
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Concatenated, unescaped text directly inside this element.
    pub fn text_content(&self) -> &str {
        &self.text
    }

    pub fn attributes(&self) -> &[XmlAttribute] {
        &self.attributes
    }

    /// Attribute by qualified name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Attribute by namespace URI and local name, regardless of prefix.
    pub fn attr_ns(&self, namespace: &str, local_name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.local_name == local_name && a.namespace.as_deref() == Some(namespace))
            .map(|a| a.value.as_str())
    }

    /// Direct children with the given name, in document order.
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// First element reached by following a `/`-separated path of child names.
    pub fn child(&self, path: &str) -> Option<&XmlElement> {
        path.split('/').try_fold(self, |node, segment| {
            node.children.iter().find(|c| c.name == segment)
        })
    }

    /// Text at `path`, or an empty string when the element is missing.
    pub fn text(&self, path: &str) -> String {
        self.text_opt(path).unwrap_or_default()
    }

    /// Text at `path`; `None` when the element is missing or empty.
    pub fn text_opt(&self, path: &str) -> Option<String> {
        self.child(path)
            .map(|c| c.text.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
    }

    /// Parses the text at `path`; missing or empty text yields `None`.
    pub fn parse_text<T>(&self, path: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.text_opt(path)
            .map(|raw| raw.parse().map_err(|e| MusicBrainzError::field(path, &raw, e)))
            .transpose()
    }

    /// Parses an attribute of this element; a missing attribute yields `None`.
    pub fn parse_attr<T>(&self, name: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.attr(name)
            .map(|raw| {
                raw.trim()
                    .parse()
                    .map_err(|e| MusicBrainzError::field(&format!("@{name}"), raw, e))
            })
            .transpose()
    }

    /// Date at `path`. Both a missing and an empty element decode to
    /// [`FlexibleDate::Absent`].
    pub fn date(&self, path: &str) -> Result<FlexibleDate> {
        match self.child(path) {
            None => Ok(FlexibleDate::Absent),
            Some(node) => FlexibleDate::parse(&node.text)
                .map_err(|e| MusicBrainzError::field(path, node.text.trim(), e)),
        }
    }

    /// `true`/`false` text at `path`; missing means `false`.
    pub fn flag(&self, path: &str) -> Result<bool> {
        Ok(self.parse_text::<bool>(path)?.unwrap_or(false))
    }

    /// Parses attribute `name` of the element at `path`; a missing element or
    /// attribute yields `None`.
    pub fn parse_child_attr<T>(&self, path: &str, name: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.child(path) {
            Some(node) => node.parse_attr(name).map_err(|e| nested(path, e)),
            None => Ok(None),
        }
    }

    /// Decodes the element at `path` if present.
    pub fn decode<T: FromXml>(&self, path: &str) -> Result<Option<T>> {
        self.child(path)
            .map(|node| T::from_xml(node).map_err(|e| nested(path, e)))
            .transpose()
    }

    /// Decodes every element named by the last segment of `path` inside the
    /// parent the rest of the path leads to, e.g. `alias-list/alias`.
    pub fn repeated<T: FromXml>(&self, path: &str) -> Result<Vec<T>> {
        let (parent, name) = match path.rsplit_once('/') {
            Some((parent, name)) => match self.child(parent) {
                Some(node) => (node, name),
                None => return Ok(Vec::new()),
            },
            None => (self, path),
        };
        parent
            .children(name)
            .map(|node| T::from_xml(node).map_err(|e| nested(path, e)))
            .collect()
    }

    /// Text of every element named by the last segment of `path`.
    pub fn repeated_text(&self, path: &str) -> Vec<String> {
        let (parent, name) = match path.rsplit_once('/') {
            Some((parent, name)) => match self.child(parent) {
                Some(node) => (node, name),
                None => return Vec::new(),
            },
            None => (self, path),
        };
        parent
            .children(name)
            .map(|c| c.text.trim().to_owned())
            .filter(|t| !t.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<metadata xmlns="http://musicbrainz.org/ns/mmd-2.0#" xmlns:ext="http://musicbrainz.org/ns/ext#-2.0">
  <artist id="a1" type="Group" ext:score="97">
    <name>Gopher &amp; Friends</name>
    <life-span><begin>2007-09-21</begin><end/><ended>false</ended></life-span>
    <alias-list count="2">
      <alias sort-name="B">Beta</alias>
      <alias sort-name="A"><![CDATA[Alpha]]></alias>
    </alias-list>
  </artist>
</metadata>"#;

    #[test]
    fn test_builds_tree_with_text_and_attributes() {
        let root = XmlElement::parse(DOC.as_bytes()).unwrap();
        assert_eq!(root.name(), "metadata");

        let artist = root.child("artist").unwrap();
        assert_eq!(artist.attr("id"), Some("a1"));
        assert_eq!(artist.attr("type"), Some("Group"));
        assert_eq!(artist.text("name"), "Gopher & Friends");
        assert_eq!(artist.text("missing"), "");
        assert_eq!(artist.text_opt("life-span/end"), None);
    }

    #[test]
    fn test_namespaced_attribute_resolves_by_uri() {
        let root = XmlElement::parse(DOC.as_bytes()).unwrap();
        let artist = root.child("artist").unwrap();
        assert_eq!(
            artist.attr_ns("http://musicbrainz.org/ns/ext#-2.0", "score"),
            Some("97")
        );
        assert_eq!(artist.attr_ns("http://example.org/other", "score"), None);
        assert_eq!(artist.attr("ext:score"), Some("97"));
    }

    #[test]
    fn test_repeated_text_keeps_document_order() {
        let root = XmlElement::parse(DOC.as_bytes()).unwrap();
        let artist = root.child("artist").unwrap();
        assert_eq!(artist.repeated_text("alias-list/alias"), vec!["Beta", "Alpha"]);
        assert!(artist.repeated_text("tag-list/tag").is_empty());
    }

    #[test]
    fn test_date_and_flag_accessors() {
        let root = XmlElement::parse(DOC.as_bytes()).unwrap();
        let artist = root.child("artist").unwrap();
        assert_eq!(artist.date("life-span/begin").unwrap().to_string(), "2007-09-21");
        assert!(artist.date("life-span/end").unwrap().is_absent());
        assert!(artist.date("life-span/nowhere").unwrap().is_absent());
        assert!(!artist.flag("life-span/ended").unwrap());
    }

    #[test]
    fn test_bad_date_names_the_field() {
        let root = XmlElement::parse(b"<x><date>1991-4-30</date></x>").unwrap();
        match root.date("date").unwrap_err() {
            MusicBrainzError::FieldDecode { field, raw, .. } => {
                assert_eq!(field, "date");
                assert_eq!(raw, "1991-4-30");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_attr_reports_bad_numbers() {
        let root = XmlElement::parse(br#"<list count="many"/>"#).unwrap();
        let err = root.parse_attr::<u32>("count").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FieldDecode);
        assert_eq!(root.parse_attr::<u32>("offset").unwrap(), None);
    }

    #[test]
    fn test_rejects_documents_that_are_not_well_formed() {
        for doc in [
            "",
            "just text",
            "<a><b></a>",
            "<a>",
            "<a/><b/>",
        ] {
            let err = XmlElement::parse(doc.as_bytes()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedDocument, "doc: {doc:?}");
        }
    }
}
