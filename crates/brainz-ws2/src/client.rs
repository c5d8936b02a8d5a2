// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

use brainz_config::{MusicBrainzConfig, DEFAULT_BASE_URL};
use tracing::{debug, instrument, trace};
use url::Url;

use crate::decode::{decode_browse, decode_entity, decode_search, ListEnvelope, Scored};
use crate::entities::{Annotation, Artist, Entity, Label, Recording, Release, ReleaseGroup, Work};
use crate::error::{MusicBrainzError, Result};
use crate::kind::EntityKind;
use crate::query::QuerySpec;
use crate::transport::{HttpTransport, Transport};

const USER_AGENT: &str = concat!("brainz-ws2/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client for the MusicBrainz XML web service.
///
/// Every call issues exactly one GET and either returns a fully decoded
/// result or a single error. Nothing is cached, retried or throttled.
#[derive(Debug, Clone)]
pub struct MusicBrainzClient<T = HttpTransport> {
    transport: T,
    base_url: Url,
}

impl MusicBrainzClient<HttpTransport> {
    /// Create a new MusicBrainz client with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a client builder for custom configuration.
    pub fn builder() -> MusicBrainzClientBuilder {
        MusicBrainzClientBuilder::default()
    }
}

impl<T: Transport> MusicBrainzClient<T> {
    /// Wrap an arbitrary transport, e.g. a test double or a custom HTTP stack.
    pub fn with_transport(base_url: &str, transport: T) -> Result<Self> {
        Ok(Self {
            transport,
            base_url: parse_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Look up one entity by MBID, optionally embedding related entities.
    ///
    /// # Example
    /// ```no_run
    /// # use brainz_ws2::{entities::Artist, MusicBrainzClient};
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = MusicBrainzClient::new()?;
    /// let artist: Artist = client.lookup("a74b1b7f-71a5-4011-9441-d0b5e4122711", &["aliases"])?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(level = "debug", skip(self), fields(entity = %E::KIND))]
    pub fn lookup<E: Entity>(&self, id: &str, includes: &[&str]) -> Result<E> {
        let spec = QuerySpec::lookup(E::KIND, id).includes(includes.iter().copied());
        let body = self.fetch(&spec)?;
        decode_entity(&body)
    }

    /// List entities related to `relation` entity `id`. Negative `limit` or
    /// `offset` leaves the choice to the server.
    #[instrument(level = "debug", skip(self), fields(entity = %E::KIND))]
    pub fn browse<E: Entity>(
        &self,
        relation: EntityKind,
        id: &str,
        limit: i32,
        offset: i32,
        includes: &[&str],
    ) -> Result<ListEnvelope<E>> {
        let spec = QuerySpec::browse(E::KIND, relation, id)
            .limit(limit)
            .offset(offset)
            .includes(includes.iter().copied());
        let body = self.fetch(&spec)?;
        decode_browse(&body)
    }

    /// Full-text search. `query` uses the service's Lucene syntax and must be
    /// escaped by the caller.
    ///
    /// # Example
    /// ```no_run
    /// # use brainz_ws2::MusicBrainzClient;
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = MusicBrainzClient::new()?;
    /// let page = client.search_artist("Radiohead", 10, -1)?;
    /// for hit in &page.items {
    ///     println!("{} ({})", hit.entity.name, hit.score);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(level = "debug", skip(self), fields(entity = %E::KIND))]
    pub fn search<E: Entity>(
        &self,
        query: &str,
        limit: i32,
        offset: i32,
    ) -> Result<ListEnvelope<Scored<E>>> {
        let spec = QuerySpec::search(E::KIND, query)
            .limit(limit)
            .offset(offset);
        let body = self.fetch(&spec)?;
        decode_search(&body)
    }

    pub fn lookup_artist(&self, id: &str, includes: &[&str]) -> Result<Artist> {
        self.lookup(id, includes)
    }

    pub fn lookup_release(&self, id: &str, includes: &[&str]) -> Result<Release> {
        self.lookup(id, includes)
    }

    pub fn lookup_release_group(&self, id: &str, includes: &[&str]) -> Result<ReleaseGroup> {
        self.lookup(id, includes)
    }

    pub fn lookup_label(&self, id: &str, includes: &[&str]) -> Result<Label> {
        self.lookup(id, includes)
    }

    pub fn lookup_recording(&self, id: &str, includes: &[&str]) -> Result<Recording> {
        self.lookup(id, includes)
    }

    pub fn lookup_work(&self, id: &str, includes: &[&str]) -> Result<Work> {
        self.lookup(id, includes)
    }

    pub fn browse_artists(
        &self,
        relation: EntityKind,
        id: &str,
        limit: i32,
        offset: i32,
        includes: &[&str],
    ) -> Result<ListEnvelope<Artist>> {
        self.browse(relation, id, limit, offset, includes)
    }

    pub fn browse_releases(
        &self,
        relation: EntityKind,
        id: &str,
        limit: i32,
        offset: i32,
        includes: &[&str],
    ) -> Result<ListEnvelope<Release>> {
        self.browse(relation, id, limit, offset, includes)
    }

    pub fn browse_release_groups(
        &self,
        relation: EntityKind,
        id: &str,
        limit: i32,
        offset: i32,
        includes: &[&str],
    ) -> Result<ListEnvelope<ReleaseGroup>> {
        self.browse(relation, id, limit, offset, includes)
    }

    pub fn browse_labels(
        &self,
        relation: EntityKind,
        id: &str,
        limit: i32,
        offset: i32,
        includes: &[&str],
    ) -> Result<ListEnvelope<Label>> {
        self.browse(relation, id, limit, offset, includes)
    }

    pub fn browse_recordings(
        &self,
        relation: EntityKind,
        id: &str,
        limit: i32,
        offset: i32,
        includes: &[&str],
    ) -> Result<ListEnvelope<Recording>> {
        self.browse(relation, id, limit, offset, includes)
    }

    pub fn browse_works(
        &self,
        relation: EntityKind,
        id: &str,
        limit: i32,
        offset: i32,
        includes: &[&str],
    ) -> Result<ListEnvelope<Work>> {
        self.browse(relation, id, limit, offset, includes)
    }

    pub fn search_artist(
        &self,
        query: &str,
        limit: i32,
        offset: i32,
    ) -> Result<ListEnvelope<Scored<Artist>>> {
        self.search(query, limit, offset)
    }

    pub fn search_release(
        &self,
        query: &str,
        limit: i32,
        offset: i32,
    ) -> Result<ListEnvelope<Scored<Release>>> {
        self.search(query, limit, offset)
    }

    pub fn search_release_group(
        &self,
        query: &str,
        limit: i32,
        offset: i32,
    ) -> Result<ListEnvelope<Scored<ReleaseGroup>>> {
        self.search(query, limit, offset)
    }

    pub fn search_label(
        &self,
        query: &str,
        limit: i32,
        offset: i32,
    ) -> Result<ListEnvelope<Scored<Label>>> {
        self.search(query, limit, offset)
    }

    pub fn search_recording(
        &self,
        query: &str,
        limit: i32,
        offset: i32,
    ) -> Result<ListEnvelope<Scored<Recording>>> {
        self.search(query, limit, offset)
    }

    pub fn search_work(
        &self,
        query: &str,
        limit: i32,
        offset: i32,
    ) -> Result<ListEnvelope<Scored<Work>>> {
        self.search(query, limit, offset)
    }

    pub fn search_annotation(
        &self,
        query: &str,
        limit: i32,
        offset: i32,
    ) -> Result<ListEnvelope<Scored<Annotation>>> {
        self.search(query, limit, offset)
    }

    /// Builds the request, performs the GET and returns the body of a
    /// successful response. Error statuses never reach the decoder.
    fn fetch(&self, spec: &QuerySpec) -> Result<Vec<u8>> {
        let target = spec.build()?;
        let url = target.to_url(&self.base_url)?;

        trace!(target: "musicbrainz", "GET {}", url);

        let response = self.transport.get(&url)?;
        debug!(target: "musicbrainz", "response status: {}", response.status);

        match response.status {
            404 => Err(MusicBrainzError::NotFound(url.to_string())),
            503 => Err(MusicBrainzError::RateLimitExceeded),
            _ if !response.is_success() => Err(MusicBrainzError::ApiError {
                status: response.status,
                message: String::from_utf8_lossy(&response.body).into_owned(),
            }),
            _ => {
                trace!(target: "musicbrainz", "response body: {} bytes", response.body.len());
                Ok(response.body)
            }
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)?;
    if url.cannot_be_a_base() {
        return Err(MusicBrainzError::InvalidQuery(format!(
            "{raw} cannot be used as a service root"
        )));
    }
    Ok(url)
}

/// Builder for configuring a MusicBrainz client.
#[derive(Debug)]
pub struct MusicBrainzClientBuilder {
    base_url: String,
    user_agent: String,
    timeout: Duration,
}

impl Default for MusicBrainzClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl MusicBrainzClientBuilder {
    /// Start from loaded configuration; unset values keep their defaults.
    pub fn from_config(config: &MusicBrainzConfig) -> Self {
        let mut builder = Self::default()
            .base_url(config.base_url.clone())
            .timeout(Duration::from_secs(config.timeout_secs));
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        builder
    }

    /// Set a custom base URL (useful for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// MusicBrainz asks clients to identify themselves with contact details.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set request timeout duration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the MusicBrainz client.
    pub fn build(self) -> Result<MusicBrainzClient> {
        let transport = HttpTransport::new(&self.user_agent, self.timeout)?;
        MusicBrainzClient::with_transport(&self.base_url, transport)
    }
}
