// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;

use super::{Alias, Entity, Lifespan};
use crate::error::Result;
use crate::kind::EntityKind;
use crate::xml::{FromXml, XmlElement};

/// A person, group, orchestra or other musical act.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Artist {
    /// MusicBrainz artist ID (MBID).
    pub id: String,
    /// Artist type (e.g., "Person", "Group").
    pub kind: Option<String>,
    pub name: String,
    pub sort_name: String,
    /// Disambiguation comment (e.g., "US hip hop artist").
    pub disambiguation: Option<String>,
    /// Country code (ISO 3166-1 alpha-2).
    pub country: Option<String>,
    pub gender: Option<String>,
    pub lifespan: Lifespan,
    pub aliases: Vec<Alias>,
}

impl Entity for Artist {
    const KIND: EntityKind = EntityKind::Artist;
}

impl FromXml for Artist {
    fn from_xml(element: &XmlElement) -> Result<Self> {
        Ok(Self {
            id: element.attr("id").unwrap_or_default().to_string(),
            kind: element.attr("type").map(str::to_owned),
            name: element.text("name"),
            sort_name: element.text("sort-name"),
            disambiguation: element.text_opt("disambiguation"),
            country: element.text_opt("country"),
            gender: element.text_opt("gender"),
            lifespan: element.decode("life-span")?.unwrap_or_default(),
            aliases: element.repeated("alias-list/alias")?,
        })
    }
}
