// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed client for the MusicBrainz XML web service (WS/2).
//!
//! Supports lookup by MBID, browsing by relation and relevance-scored
//! search. Requests are described by a [`QuerySpec`], sent through a
//! blocking [`Transport`], and the XML envelope is decoded into typed
//! entities with [`ListEnvelope`] pagination counters. Dates of partial
//! precision decode into [`FlexibleDate`].

pub mod client;
pub mod date;
pub mod decode;
pub mod entities;
pub mod error;
pub mod kind;
pub mod query;
#[cfg(test)]
mod test_fixtures;
pub mod transport;
pub mod xml;

pub use client::{MusicBrainzClient, MusicBrainzClientBuilder};
pub use date::{DatePrecision, FlexibleDate};
pub use decode::{ListEnvelope, Scored};
pub use entities::Entity;
pub use error::{ErrorKind, MusicBrainzError, Result};
pub use kind::EntityKind;
pub use query::{AccessPattern, QuerySpec, RequestTarget};
pub use transport::{HttpTransport, Transport, TransportResponse};
