// SPDX-License-Identifier: GPL-3.0-or-later

//! Entity records and their XML field mappings.
//!
//! Each type declares where its fields live through [`XmlElement`] path
//! accessors; the envelope decoder only needs the [`Entity::KIND`] to find them.

mod annotation;
mod artist;
mod label;
mod recording;
mod release;
mod release_group;
mod work;

use serde::Serialize;

pub use annotation::Annotation;
pub use artist::Artist;
pub use label::Label;
pub use recording::Recording;
pub use release::{LabelInfo, Medium, Release, TextRepresentation};
pub use release_group::ReleaseGroup;
pub use work::Work;

use crate::date::FlexibleDate;
use crate::error::Result;
use crate::kind::EntityKind;
use crate::xml::{FromXml, XmlElement};

/// A top-level record the service can return in a list or lookup response.
pub trait Entity: FromXml {
    const KIND: EntityKind;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Lifespan {
    pub begin: FlexibleDate,
    pub end: FlexibleDate,
    pub ended: bool,
}

impl FromXml for Lifespan {
    fn from_xml(element: &XmlElement) -> Result<Self> {
        Ok(Self {
            begin: element.date("begin")?,
            end: element.date("end")?,
            ended: element.flag("ended")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Alias {
    pub name: String,
    pub sort_name: String,
    pub locale: Option<String>,
    pub kind: Option<String>,
    pub primary: bool,
}

impl FromXml for Alias {
    fn from_xml(element: &XmlElement) -> Result<Self> {
        Ok(Self {
            name: element.text_content().trim().to_string(),
            sort_name: element.attr("sort-name").unwrap_or_default().to_string(),
            locale: element.attr("locale").map(str::to_owned),
            kind: element.attr("type").map(str::to_owned),
            primary: element.attr("primary") == Some("primary"),
        })
    }
}

/// One credited artist; `name` is the credited spelling when it differs from
/// the artist's own name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NameCredit {
    pub name: Option<String>,
    pub join_phrase: String,
    pub artist: Artist,
}

impl FromXml for NameCredit {
    fn from_xml(element: &XmlElement) -> Result<Self> {
        Ok(Self {
            name: element.text_opt("name"),
            join_phrase: element.attr("joinphrase").unwrap_or_default().to_string(),
            artist: element.decode("artist")?.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArtistCredit {
    pub name_credits: Vec<NameCredit>,
}

impl ArtistCredit {
    /// Credit as printed, e.g. `"Simon & Garfunkel"`.
    pub fn display_name(&self) -> String {
        self.name_credits
            .iter()
            .map(|credit| {
                let name = credit.name.as_deref().unwrap_or(&credit.artist.name);
                format!("{name}{}", credit.join_phrase)
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.name_credits.is_empty()
    }
}

impl FromXml for ArtistCredit {
    fn from_xml(element: &XmlElement) -> Result<Self> {
        Ok(Self {
            name_credits: element.repeated("name-credit")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(doc: &str) -> XmlElement {
        XmlElement::parse(doc.as_bytes()).unwrap()
    }

    #[test]
    fn test_lifespan_with_partial_dates() {
        let lifespan = Lifespan::from_xml(&parse(
            "<life-span><begin>1985</begin><end>1991-04</end><ended>true</ended></life-span>",
        ))
        .unwrap();
        assert_eq!(lifespan.begin, FlexibleDate::Year(1985));
        assert_eq!(lifespan.end, FlexibleDate::YearMonth(1991, 4));
        assert!(lifespan.ended);
    }

    #[test]
    fn test_empty_lifespan_is_default() {
        let lifespan = Lifespan::from_xml(&parse("<life-span/>")).unwrap();
        assert_eq!(lifespan, Lifespan::default());
    }

    #[test]
    fn test_alias_attributes() {
        let alias = Alias::from_xml(&parse(
            r#"<alias sort-name="Beatles, The" locale="en" type="Artist name" primary="primary">The Beatles</alias>"#,
        ))
        .unwrap();
        assert_eq!(alias.name, "The Beatles");
        assert_eq!(alias.sort_name, "Beatles, The");
        assert_eq!(alias.locale.as_deref(), Some("en"));
        assert_eq!(alias.kind.as_deref(), Some("Artist name"));
        assert!(alias.primary);
    }

    #[test]
    fn test_artist_credit_display_name() {
        let credit = ArtistCredit::from_xml(&parse(
            r#"<artist-credit>
                 <name-credit joinphrase=" &amp; "><artist id="1"><name>Paul Simon</name></artist></name-credit>
                 <name-credit><name>Art</name><artist id="2"><name>Art Garfunkel</name></artist></name-credit>
               </artist-credit>"#,
        ))
        .unwrap();
        assert_eq!(credit.name_credits.len(), 2);
        assert_eq!(credit.display_name(), "Paul Simon & Art");
    }
}
