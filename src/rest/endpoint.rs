//! Endpoint accessors: the chainable, I/O-free side of a call chain.
//!
//! An [`Endpoint`] pairs a path prefix with its [`EndpointDescriptor`].
//! Creating one performs no network I/O; its call-shape methods produce
//! [`PendingRequest`] handles that defer the request until forced.

use std::fmt::Display;

use crate::clients::HttpClient;
use crate::query::RequestOptions;
use crate::rest::handle::PendingRequest;
use crate::schema::EndpointDescriptor;

/// An accessor for one endpoint at one position in a call chain.
///
/// Obtained from [`ApiClient::endpoint`](crate::ApiClient::endpoint) for
/// root resources, or from [`PendingRequest::child`] for nested ones. The
/// call shape chosen here determines the handle's semantics:
///
/// - [`all`](Self::all) / [`many`](Self::many) — collection request
///   (no id appended); the handle remains chainable
/// - [`get`](Self::get) — record request (`<path>/<id>`); chainable
/// - [`get_with`](Self::get_with) — record request with options; this call
///   shape forbids further chaining
#[derive(Debug)]
pub struct Endpoint<'a> {
    client: &'a HttpClient,
    path: String,
    descriptor: &'static EndpointDescriptor,
}

impl<'a> Endpoint<'a> {
    pub(crate) const fn new(
        client: &'a HttpClient,
        path: String,
        descriptor: &'static EndpointDescriptor,
    ) -> Self {
        Self {
            client,
            path,
            descriptor,
        }
    }

    /// Returns the path this accessor targets.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the endpoint's descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &'static EndpointDescriptor {
        self.descriptor
    }

    /// Builds a collection request with default options.
    #[must_use]
    pub fn all(&self) -> PendingRequest<'a> {
        self.many(RequestOptions::new())
    }

    /// Builds a collection request with the given options.
    ///
    /// No id is appended to the path; the separator is omitted for
    /// index/collection requests.
    #[must_use]
    pub fn many(&self, options: RequestOptions) -> PendingRequest<'a> {
        PendingRequest::new(self.client, self.path.clone(), self.descriptor, options, true)
    }

    /// Builds a record request for the given id.
    ///
    /// The handle stays chainable: child endpoints declared in the schema
    /// are reachable through [`PendingRequest::child`].
    #[must_use]
    pub fn get(&self, id: impl Display) -> PendingRequest<'a> {
        PendingRequest::new(
            self.client,
            format!("{}/{id}", self.path),
            self.descriptor,
            RequestOptions::new(),
            true,
        )
    }

    /// Builds a record request for the given id with options.
    ///
    /// This call shape forbids further chaining; the returned handle
    /// exposes no child accessors.
    #[must_use]
    pub fn get_with(&self, id: impl Display, options: RequestOptions) -> PendingRequest<'a> {
        PendingRequest::new(
            self.client,
            format!("{}/{id}", self.path),
            self.descriptor,
            options,
            false,
        )
    }
}
