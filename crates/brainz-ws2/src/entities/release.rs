// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;

use super::{ArtistCredit, Entity, Label, ReleaseGroup};
use crate::date::FlexibleDate;
use crate::error::Result;
use crate::kind::EntityKind;
use crate::xml::{FromXml, XmlElement};

/// A unique issue of a product, e.g. one particular CD pressing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Release {
    pub id: String,
    pub title: String,
    /// Release status (e.g., "Official", "Bootleg").
    pub status: Option<String>,
    pub disambiguation: Option<String>,
    pub text_representation: TextRepresentation,
    pub artist_credit: ArtistCredit,
    pub release_group: Option<ReleaseGroup>,
    pub date: FlexibleDate,
    pub country: Option<String>,
    pub barcode: Option<String>,
    pub asin: Option<String>,
    pub label_infos: Vec<LabelInfo>,
    pub media: Vec<Medium>,
}

impl Entity for Release {
    const KIND: EntityKind = EntityKind::Release;
}

impl FromXml for Release {
    fn from_xml(element: &XmlElement) -> Result<Self> {
        Ok(Self {
            id: element.attr("id").unwrap_or_default().to_string(),
            title: element.text("title"),
            status: element.text_opt("status"),
            disambiguation: element.text_opt("disambiguation"),
            text_representation: element
                .decode("text-representation")?
                .unwrap_or_default(),
            artist_credit: element.decode("artist-credit")?.unwrap_or_default(),
            release_group: element.decode("release-group")?,
            date: element.date("date")?,
            country: element.text_opt("country"),
            barcode: element.text_opt("barcode"),
            asin: element.text_opt("asin"),
            label_infos: element.repeated("label-info-list/label-info")?,
            media: element.repeated("medium-list/medium")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextRepresentation {
    /// ISO 639-3 language code.
    pub language: Option<String>,
    /// ISO 15924 script code.
    pub script: Option<String>,
}

impl FromXml for TextRepresentation {
    fn from_xml(element: &XmlElement) -> Result<Self> {
        Ok(Self {
            language: element.text_opt("language"),
            script: element.text_opt("script"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LabelInfo {
    pub catalog_number: Option<String>,
    pub label: Option<Label>,
}

impl FromXml for LabelInfo {
    fn from_xml(element: &XmlElement) -> Result<Self> {
        Ok(Self {
            catalog_number: element.text_opt("catalog-number"),
            label: element.decode("label")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Medium {
    pub position: Option<u32>,
    /// Physical format (e.g., "CD", "12\" Vinyl").
    pub format: Option<String>,
    pub track_count: Option<u32>,
}

impl FromXml for Medium {
    fn from_xml(element: &XmlElement) -> Result<Self> {
        Ok(Self {
            position: element.parse_text("position")?,
            format: element.text_opt("format"),
            track_count: element.parse_child_attr("track-list", "count")?,
        })
    }
}
