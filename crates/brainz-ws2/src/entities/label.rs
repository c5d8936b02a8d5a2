// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;

use super::{Alias, Entity, Lifespan};
use crate::error::Result;
use crate::kind::EntityKind;
use crate::xml::{FromXml, XmlElement};

/// A record label or imprint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Label {
    pub id: String,
    /// Label type (e.g., "Original Production", "Imprint").
    pub kind: Option<String>,
    pub name: String,
    pub sort_name: String,
    pub disambiguation: Option<String>,
    /// The "LC" code without its prefix.
    pub label_code: Option<u32>,
    pub country: Option<String>,
    pub lifespan: Lifespan,
    pub aliases: Vec<Alias>,
}

impl Entity for Label {
    const KIND: EntityKind = EntityKind::Label;
}

impl FromXml for Label {
    fn from_xml(element: &XmlElement) -> Result<Self> {
        Ok(Self {
            id: element.attr("id").unwrap_or_default().to_string(),
            kind: element.attr("type").map(str::to_owned),
            name: element.text("name"),
            sort_name: element.text("sort-name"),
            disambiguation: element.text_opt("disambiguation"),
            label_code: element.parse_text("label-code")?,
            country: element.text_opt("country"),
            lifespan: element.decode("life-span")?.unwrap_or_default(),
            aliases: element.repeated("alias-list/alias")?,
        })
    }
}
