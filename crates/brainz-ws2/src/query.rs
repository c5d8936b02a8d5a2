// SPDX-License-Identifier: GPL-3.0-or-later

//! Maps a [`QuerySpec`] to a request path and query parameters without any I/O.

use url::Url;

use crate::error::{MusicBrainzError, Result};
use crate::kind::EntityKind;

/// Largest page size the service accepts.
pub const MAX_LIMIT: i32 = 100;

const INC_SEPARATOR: &str = ",";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessPattern {
    Lookup { id: String },
    Browse { relation: EntityKind, id: String },
    /// `query` is sent verbatim; escaping Lucene syntax is up to the caller.
    Search { query: String },
}

/// Description of a single request.
///
/// A negative `limit` or `offset` leaves the parameter out so the server
/// applies its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    entity: EntityKind,
    pattern: AccessPattern,
    limit: i32,
    offset: i32,
    includes: Vec<String>,
}

impl QuerySpec {
    fn new(entity: EntityKind, pattern: AccessPattern) -> Self {
        Self {
            entity,
            pattern,
            limit: -1,
            offset: -1,
            includes: Vec::new(),
        }
    }

    pub fn lookup(entity: EntityKind, id: impl Into<String>) -> Self {
        Self::new(entity, AccessPattern::Lookup { id: id.into() })
    }

    pub fn browse(entity: EntityKind, relation: EntityKind, id: impl Into<String>) -> Self {
        Self::new(
            entity,
            AccessPattern::Browse {
                relation,
                id: id.into(),
            },
        )
    }

    pub fn search(entity: EntityKind, query: impl Into<String>) -> Self {
        Self::new(
            entity,
            AccessPattern::Search {
                query: query.into(),
            },
        )
    }

    pub fn limit(mut self, limit: i32) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: i32) -> Self {
        self.offset = offset;
        self
    }

    pub fn include(mut self, relation: impl Into<String>) -> Self {
        self.includes.push(relation.into());
        self
    }

    pub fn includes<I, S>(mut self, relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.includes.extend(relations.into_iter().map(Into::into));
        self
    }

    pub fn entity(&self) -> EntityKind {
        self.entity
    }

    pub fn pattern(&self) -> &AccessPattern {
        &self.pattern
    }

    /// Validates the query and produces the request target.
    pub fn build(&self) -> Result<RequestTarget> {
        self.validate()?;

        let entity = self.entity.as_str();
        let mut params = Vec::new();

        let path = match &self.pattern {
            AccessPattern::Lookup { id } => {
                self.push_includes(&mut params);
                format!("/{entity}/{id}")
            }
            AccessPattern::Browse { relation, id } => {
                params.push((relation.as_str().to_string(), id.clone()));
                self.push_paging(&mut params);
                self.push_includes(&mut params);
                format!("/{entity}")
            }
            AccessPattern::Search { query } => {
                params.push(("query".to_string(), query.clone()));
                self.push_paging(&mut params);
                format!("/{entity}")
            }
        };

        Ok(RequestTarget { path, params })
    }

    fn validate(&self) -> Result<()> {
        let entity = self.entity;
        match &self.pattern {
            AccessPattern::Lookup { id } => {
                if !entity.supports_lookup() {
                    return Err(invalid(format!("{entity} cannot be looked up")));
                }
                validate_id(id)?;
            }
            AccessPattern::Browse { relation, id } => {
                if !entity.browse_relations().contains(relation) {
                    return Err(invalid(format!("{entity} cannot be browsed by {relation}")));
                }
                validate_id(id)?;
            }
            AccessPattern::Search { query } => {
                if !entity.supports_search() {
                    return Err(invalid(format!("{entity} cannot be searched")));
                }
                if query.trim().is_empty() {
                    return Err(invalid("search query is empty"));
                }
                if !self.includes.is_empty() {
                    return Err(invalid("includes are not supported on search"));
                }
            }
        }

        if self.limit > MAX_LIMIT {
            return Err(invalid(format!(
                "limit {} exceeds maximum of {MAX_LIMIT}",
                self.limit
            )));
        }
        if self.includes.iter().any(|inc| inc.trim().is_empty()) {
            return Err(invalid("include relation names must not be empty"));
        }
        Ok(())
    }

    fn push_paging(&self, params: &mut Vec<(String, String)>) {
        if let Some(limit) = non_negative(self.limit) {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = non_negative(self.offset) {
            params.push(("offset".to_string(), offset.to_string()));
        }
    }

    fn push_includes(&self, params: &mut Vec<(String, String)>) {
        if !self.includes.is_empty() {
            params.push(("inc".to_string(), self.includes.join(INC_SEPARATOR)));
        }
    }
}

fn non_negative(value: i32) -> Option<u32> {
    u32::try_from(value).ok()
}

fn invalid(message: impl Into<String>) -> MusicBrainzError {
    MusicBrainzError::InvalidQuery(message.into())
}

fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(invalid("identifier is empty"));
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(invalid(format!("identifier {id:?} is not a valid path segment")));
    }
    Ok(())
}

/// Path (relative to the service root) and ordered query parameters of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget {
    pub path: String,
    pub params: Vec<(String, String)>,
}

impl RequestTarget {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Resolves the target against a service root such as
    /// `https://musicbrainz.org/ws/2`; the root's own path is kept.
    pub fn to_url(&self, root: &Url) -> Result<Url> {
        if root.cannot_be_a_base() {
            return Err(invalid(format!("{root} cannot be used as a service root")));
        }

        let mut url = root.clone();
        let base = root.path().trim_end_matches('/');
        url.set_path(&format!("{base}{}", self.path));
        url.set_query(None);
        url.set_fragment(None);
        if !self.params.is_empty() {
            url.query_pairs_mut().extend_pairs(self.params.iter());
        }
        Ok(url)
    }
}
