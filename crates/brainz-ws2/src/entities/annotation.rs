// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;

use super::Entity;
use crate::error::Result;
use crate::kind::EntityKind;
use crate::xml::{FromXml, XmlElement};

/// Wiki-style note attached to another entity. Only reachable through search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// Type of the annotated entity (e.g., "artist", "release").
    pub kind: String,
    /// MBID of the annotated entity.
    pub entity: String,
    pub name: String,
    pub text: String,
}

impl Entity for Annotation {
    const KIND: EntityKind = EntityKind::Annotation;
}

impl FromXml for Annotation {
    fn from_xml(element: &XmlElement) -> Result<Self> {
        Ok(Self {
            kind: element.attr("type").unwrap_or_default().to_string(),
            entity: element.text("entity"),
            name: element.text("name"),
            text: element.text("text"),
        })
    }
}
