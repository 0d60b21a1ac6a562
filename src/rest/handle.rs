//! Deferred request handles.
//!
//! A [`PendingRequest`] is an explicit pending-request value: it holds the
//! target path, the resolved options and the endpoint descriptor, and runs
//! the request executor only when forced. Forcing is single-shot and
//! memoized — the network request fires on the first forcing, and every
//! later observation sees the same settled outcome.

use std::future::{Future, IntoFuture};
use std::pin::Pin;

use tokio::sync::OnceCell;

use crate::clients::{ApiError, HttpClient};
use crate::query::{compose_query, RequestOptions};
use crate::rest::endpoint::Endpoint;
use crate::rest::errors::EndpointError;
use crate::schema::EndpointDescriptor;

/// A lazily-evaluated request handle.
///
/// Created by the call-shape methods on [`Endpoint`]; performs no I/O until
/// awaited or [`force`](Self::force)d.
///
/// # Forcing
///
/// - `handle.await` (via [`IntoFuture`]) consumes the handle and yields
///   `Result<serde_json::Value, ApiError>`. If the handle was already
///   forced, the memoized outcome is returned without touching the network.
/// - [`force`](Self::force) borrows the handle and can be called any number
///   of times; the executor runs on the first call only and every call
///   observes the same settled outcome.
///
/// # Chaining
///
/// While the handle is chainable (any call shape except id-plus-options),
/// [`child`](Self::child) resolves a nested endpoint without forcing this
/// handle.
#[derive(Debug)]
pub struct PendingRequest<'a> {
    client: &'a HttpClient,
    path: String,
    descriptor: &'static EndpointDescriptor,
    options: RequestOptions,
    chainable: bool,
    outcome: OnceCell<Result<serde_json::Value, ApiError>>,
}

// Verify PendingRequest is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PendingRequest<'static>>();
};

impl<'a> PendingRequest<'a> {
    pub(crate) const fn new(
        client: &'a HttpClient,
        path: String,
        descriptor: &'static EndpointDescriptor,
        options: RequestOptions,
        chainable: bool,
    ) -> Self {
        Self {
            client,
            path,
            descriptor,
            options,
            chainable,
            outcome: OnceCell::const_new(),
        }
    }

    /// Returns the path this handle targets.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns `true` if child accessors are available on this handle.
    #[must_use]
    pub const fn is_chainable(&self) -> bool {
        self.chainable
    }

    /// Returns `true` once the handle has been forced.
    #[must_use]
    pub fn is_forced(&self) -> bool {
        self.outcome.initialized()
    }

    /// Resolves a child endpoint accessor rooted at this handle's path.
    ///
    /// Never forces this handle: `parent.get(id).child("x")` issues no
    /// request for the parent.
    ///
    /// # Errors
    ///
    /// Returns [`EndpointError::NotChainable`] when the handle was built
    /// with the id-plus-options call shape, and
    /// [`EndpointError::UnknownChild`] when the descriptor declares no
    /// child with the given segment.
    pub fn child(&self, segment: &str) -> Result<Endpoint<'a>, EndpointError> {
        if !self.chainable {
            return Err(EndpointError::NotChainable {
                shape: self.descriptor.shape,
            });
        }
        let child =
            self.descriptor
                .child(segment)
                .ok_or_else(|| EndpointError::UnknownChild {
                    parent: self.descriptor.segment,
                    segment: segment.to_string(),
                })?;
        Ok(Endpoint::new(
            self.client,
            format!("{}/{}", self.path, child.segment),
            child,
        ))
    }

    /// Forces the handle, running the request executor at most once.
    ///
    /// Repeated calls observe the same settled outcome; only the first call
    /// performs network I/O.
    ///
    /// # Errors
    ///
    /// Returns a reference to the classified [`ApiError`] when the request
    /// failed.
    pub async fn force(&self) -> Result<&serde_json::Value, &ApiError> {
        self.outcome
            .get_or_init(|| execute_once(self.client, &self.path, self.descriptor, &self.options))
            .await
            .as_ref()
    }
}

impl<'a> IntoFuture for PendingRequest<'a> {
    type Output = Result<serde_json::Value, ApiError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send + 'a>>;

    fn into_future(self) -> Self::IntoFuture {
        let Self {
            client,
            path,
            descriptor,
            options,
            outcome,
            ..
        } = self;
        Box::pin(async move {
            if let Some(settled) = outcome.into_inner() {
                return settled;
            }
            execute_once(client, &path, descriptor, &options).await
        })
    }
}

/// Composes the query string and runs one executor call.
async fn execute_once(
    client: &HttpClient,
    path: &str,
    descriptor: &EndpointDescriptor,
    options: &RequestOptions,
) -> Result<serde_json::Value, ApiError> {
    let query = compose_query(&descriptor.capabilities, options);
    client
        .execute(path, &query, options.cancel.as_ref(), options.max_retries)
        .await
}
