// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;
use std::str::FromStr;

use crate::error::MusicBrainzError;

/// Entity collections known to the web service, named as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Annotation,
    Area,
    Artist,
    Collection,
    Label,
    Recording,
    Release,
    ReleaseGroup,
    Work,
}

impl EntityKind {
    pub const ALL: [EntityKind; 9] = [
        EntityKind::Annotation,
        EntityKind::Area,
        EntityKind::Artist,
        EntityKind::Collection,
        EntityKind::Label,
        EntityKind::Recording,
        EntityKind::Release,
        EntityKind::ReleaseGroup,
        EntityKind::Work,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Annotation => "annotation",
            Self::Area => "area",
            Self::Artist => "artist",
            Self::Collection => "collection",
            Self::Label => "label",
            Self::Recording => "recording",
            Self::Release => "release",
            Self::ReleaseGroup => "release-group",
            Self::Work => "work",
        }
    }

    /// Name of the list element wrapping browse and search results.
    pub fn list_element(&self) -> String {
        format!("{}-list", self.as_str())
    }

    /// Relations this collection can be browsed by.
    pub fn browse_relations(&self) -> &'static [EntityKind] {
        use EntityKind::*;
        match self {
            Artist => &[Area, Collection, Recording, Release, ReleaseGroup, Work],
            Label => &[Area, Collection, Release],
            Recording => &[Artist, Collection, Release, Work],
            Release => &[Area, Artist, Collection, Label, Recording, ReleaseGroup],
            ReleaseGroup => &[Artist, Collection, Release],
            Work => &[Artist, Collection],
            Annotation | Area | Collection => &[],
        }
    }

    pub fn supports_lookup(&self) -> bool {
        !matches!(self, Self::Annotation | Self::Area | Self::Collection)
    }

    pub fn supports_search(&self) -> bool {
        !matches!(self, Self::Area | Self::Collection)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = MusicBrainzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| MusicBrainzError::InvalidQuery(format!("unknown entity `{s}`")))
    }
}
