// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;

use super::{ArtistCredit, Entity, Release};
use crate::date::FlexibleDate;
use crate::error::Result;
use crate::kind::EntityKind;
use crate::xml::{FromXml, XmlElement};

/// Groups the releases of one album, single or other product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReleaseGroup {
    pub id: String,
    /// Legacy combined type attribute (e.g., "Album", "Single").
    pub kind: Option<String>,
    /// Primary type (e.g., "Album", "EP", "Single").
    pub primary_type: Option<String>,
    /// Secondary types (e.g., ["Compilation", "Live"]).
    pub secondary_types: Vec<String>,
    pub title: String,
    pub disambiguation: Option<String>,
    pub first_release_date: FlexibleDate,
    pub artist_credit: ArtistCredit,
    pub releases: Vec<Release>,
}

impl Entity for ReleaseGroup {
    const KIND: EntityKind = EntityKind::ReleaseGroup;
}

impl FromXml for ReleaseGroup {
    fn from_xml(element: &XmlElement) -> Result<Self> {
        Ok(Self {
            id: element.attr("id").unwrap_or_default().to_string(),
            kind: element.attr("type").map(str::to_owned),
            primary_type: element.text_opt("primary-type"),
            secondary_types: element.repeated_text("secondary-type-list/secondary-type"),
            title: element.text("title"),
            disambiguation: element.text_opt("disambiguation"),
            first_release_date: element.date("first-release-date")?,
            artist_credit: element.decode("artist-credit")?.unwrap_or_default(),
            releases: element.repeated("release-list/release")?,
        })
    }
}
