// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;

use super::Entity;
use crate::error::Result;
use crate::kind::EntityKind;
use crate::xml::{FromXml, XmlElement};

/// A distinct intellectual or artistic creation, such as a song.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Work {
    pub id: String,
    pub kind: Option<String>,
    pub title: String,
    /// ISO 639-3 language of the lyrics.
    pub language: Option<String>,
    pub iswcs: Vec<String>,
    pub disambiguation: Option<String>,
}

impl Entity for Work {
    const KIND: EntityKind = EntityKind::Work;
}

impl FromXml for Work {
    fn from_xml(element: &XmlElement) -> Result<Self> {
        // Older responses carry a bare <iswc> instead of an <iswc-list>.
        let mut iswcs = element.repeated_text("iswc-list/iswc");
        if iswcs.is_empty() {
            iswcs = element.repeated_text("iswc");
        }

        Ok(Self {
            id: element.attr("id").unwrap_or_default().to_string(),
            kind: element.attr("type").map(str::to_owned),
            title: element.text("title"),
            language: element.text_opt("language"),
            iswcs,
            disambiguation: element.text_opt("disambiguation"),
        })
    }
}
