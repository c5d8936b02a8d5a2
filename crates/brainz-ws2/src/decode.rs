// SPDX-License-Identifier: GPL-3.0-or-later

//! Generic decoding of `<entity-list>` envelopes and single-entity lookups.

use serde::Serialize;
use tracing::debug;

use crate::entities::Entity;
use crate::error::{MusicBrainzError, Result};
use crate::xml::XmlElement;

/// Namespace of the `score` attribute on search results.
pub const EXT_NAMESPACE: &str = "http://musicbrainz.org/ns/ext#-2.0";

const METADATA: &str = "metadata";

/// One page of results together with the server's pagination counters.
///
/// `count` and `offset` are reported verbatim; they are not derived from
/// `items.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEnvelope<T> {
    /// Total number of matches on the server.
    pub count: u32,
    /// Index of the first item of this page.
    pub offset: u32,
    pub items: Vec<T>,
}

impl<T> ListEnvelope<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Offset to request for the following page, if the server reported more.
    pub fn next_offset(&self) -> Option<u32> {
        let decoded = u32::try_from(self.items.len()).unwrap_or(u32::MAX);
        let next = self.offset.saturating_add(decoded);
        (!self.items.is_empty() && next < self.count).then_some(next)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ListEnvelope<U> {
        ListEnvelope {
            count: self.count,
            offset: self.offset,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

impl<T> IntoIterator for ListEnvelope<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// A search hit with its relevance score (0-100).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scored<T> {
    pub score: u8,
    pub entity: T,
}

/// Decodes a list envelope, keeping each item's score if it carried one.
pub fn decode_list<E: Entity>(body: &[u8]) -> Result<ListEnvelope<(E, Option<u8>)>> {
    let root = XmlElement::parse(body)?;
    let list_name = E::KIND.list_element();
    let list = locate(&root, &list_name).ok_or_else(|| {
        MusicBrainzError::MalformedDocument(format!(
            "expected <{list_name}> container, found <{}>",
            root.name()
        ))
    })?;

    let count = counter(list, &list_name, "count")?;
    let offset = counter(list, &list_name, "offset")?;

    let items = list
        .children(E::KIND.as_str())
        .map(|child| Ok((E::from_xml(child)?, score(child)?)))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        target: "musicbrainz",
        entity = %E::KIND,
        count,
        offset,
        decoded = items.len(),
        "decoded list envelope"
    );

    Ok(ListEnvelope {
        count,
        offset,
        items,
    })
}

/// Decodes a search page; an item without a score gets 0.
pub fn decode_search<E: Entity>(body: &[u8]) -> Result<ListEnvelope<Scored<E>>> {
    Ok(decode_list::<E>(body)?.map(|(entity, score)| Scored {
        score: score.unwrap_or(0),
        entity,
    }))
}

/// Decodes a browse page; scores are not meaningful there and are dropped.
pub fn decode_browse<E: Entity>(body: &[u8]) -> Result<ListEnvelope<E>> {
    Ok(decode_list::<E>(body)?.map(|(entity, _)| entity))
}

/// Decodes a lookup response holding a single entity.
pub fn decode_entity<E: Entity>(body: &[u8]) -> Result<E> {
    let root = XmlElement::parse(body)?;
    let element = locate(&root, E::KIND.as_str()).ok_or_else(|| {
        MusicBrainzError::MalformedDocument(format!(
            "expected <{}> element, found <{}>",
            E::KIND,
            root.name()
        ))
    })?;
    E::from_xml(element)
}

fn locate<'a>(root: &'a XmlElement, name: &'a str) -> Option<&'a XmlElement> {
    if root.name() == name {
        Some(root)
    } else if root.name() == METADATA {
        root.children(name).next()
    } else {
        None
    }
}

fn counter(list: &XmlElement, list_name: &str, attribute: &str) -> Result<u32> {
    let field = format!("{list_name}@{attribute}");
    let raw = list
        .attr(attribute)
        .ok_or_else(|| MusicBrainzError::field(&field, "", "missing required attribute"))?;
    raw.trim()
        .parse()
        .map_err(|e| MusicBrainzError::field(&field, raw, e))
}

fn score(element: &XmlElement) -> Result<Option<u8>> {
    let Some(raw) = element.attr_ns(EXT_NAMESPACE, "score") else {
        return Ok(None);
    };
    match raw.trim().parse::<u8>() {
        Ok(score) if score <= 100 => Ok(Some(score)),
        Ok(_) => Err(MusicBrainzError::field("@ext:score", raw, "score above 100")),
        Err(e) => Err(MusicBrainzError::field("@ext:score", raw, e)),
    }
}
