// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;

use super::{ArtistCredit, Entity, Release};
use crate::error::Result;
use crate::kind::EntityKind;
use crate::xml::{FromXml, XmlElement};

/// A distinct piece of recorded audio; a track on a medium points at one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Recording {
    pub id: String,
    pub title: String,
    /// Duration in milliseconds.
    pub length_ms: Option<u32>,
    pub disambiguation: Option<String>,
    pub artist_credit: ArtistCredit,
    pub releases: Vec<Release>,
}

impl Entity for Recording {
    const KIND: EntityKind = EntityKind::Recording;
}

impl FromXml for Recording {
    fn from_xml(element: &XmlElement) -> Result<Self> {
        Ok(Self {
            id: element.attr("id").unwrap_or_default().to_string(),
            title: element.text("title"),
            length_ms: element.parse_text("length")?,
            disambiguation: element.text_opt("disambiguation"),
            artist_credit: element.decode("artist-credit")?.unwrap_or_default(),
            releases: element.repeated("release-list/release")?,
        })
    }
}
