//! Per-call request options and query-string composition.
//!
//! [`RequestOptions`] carries everything a caller can vary per request:
//! pagination fields, a sort order, filters, arbitrary extra query pairs,
//! a cancellation token, and a retry-budget override. [`compose_query`]
//! turns the query-relevant parts into the canonical query string,
//! consulting the target endpoint's [`Capabilities`] and silently dropping
//! fields the endpoint does not declare.

use std::fmt;

use crate::clients::CancelToken;
use crate::query::filter::{encode_filters, Filter, FilterMap};
use crate::schema::Capabilities;

/// Sort direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

/// A sort field, serialized as `<field>:asc` or `<field>:desc`.
///
/// # Example
///
/// ```rust
/// use restpath::Sort;
///
/// assert_eq!(Sort::asc("title").to_string(), "title:asc");
/// assert_eq!(Sort::desc("created").to_string(), "created:desc");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sort {
    field: String,
    direction: SortDirection,
}

impl Sort {
    /// Sorts ascending by the given field.
    #[must_use]
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Sorts descending by the given field.
    #[must_use]
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }

    /// Encodes the sort value for the query string, percent-encoding the
    /// field name while keeping the `:` separator literal.
    #[must_use]
    pub fn encode(&self) -> String {
        format!("{}:{}", urlencoding::encode(&self.field), self.direction)
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.direction)
    }
}

/// Options for a single request.
///
/// Pagination, sorting and filtering only take effect when the target
/// endpoint declares the matching capability; undeclared fields are dropped
/// at composition time. The cancellation token and retry-budget override
/// always apply.
///
/// # Example
///
/// ```rust
/// use restpath::{Filter, RequestOptions, Sort};
///
/// let options = RequestOptions::new()
///     .limit(25)
///     .page(2)
///     .order(Sort::asc("title"))
///     .filter("author", Filter::eq("gandhi"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    /// Cancellation token raced against the request's suspend points.
    pub cancel: Option<CancelToken>,
    /// Per-call override of the configured retry budget.
    pub max_retries: Option<u32>,
    /// Maximum number of records per page.
    pub limit: Option<u64>,
    /// Page number.
    pub page: Option<u64>,
    /// Record offset.
    pub offset: Option<u64>,
    /// Sort order.
    pub order: Option<Sort>,
    /// Field filters, insertion-ordered.
    pub filter: FilterMap,
    /// Arbitrary extra query pairs, appended after the declared fields.
    pub query: Vec<(String, String)>,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cancellation token.
    #[must_use]
    pub fn cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Overrides the retry budget for this call.
    #[must_use]
    pub const fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the page number.
    #[must_use]
    pub const fn page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the record offset.
    #[must_use]
    pub const fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub fn order(mut self, sort: Sort) -> Self {
        self.order = Some(sort);
        self
    }

    /// Adds a filter on the given field, preserving insertion order.
    #[must_use]
    pub fn filter(mut self, field: impl Into<String>, filter: Filter) -> Self {
        self.filter.insert(field, filter);
        self
    }

    /// Adds an arbitrary query pair.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// Composes the canonical query string for a request.
///
/// Serialization order is fixed: `limit`, `page`, `offset`, `order`, then
/// any arbitrary query pairs, then the filter fragment. Absent fields are
/// omitted entirely (never `field=null`), and fields whose capability the
/// endpoint does not declare are dropped. The result carries no leading
/// `?` and no trailing `&`.
#[must_use]
pub fn compose_query(capabilities: &Capabilities, options: &RequestOptions) -> String {
    let mut parts: Vec<String> = Vec::new();

    if capabilities.pagination {
        if let Some(limit) = options.limit {
            parts.push(format!("limit={limit}"));
        }
        if let Some(page) = options.page {
            parts.push(format!("page={page}"));
        }
        if let Some(offset) = options.offset {
            parts.push(format!("offset={offset}"));
        }
    }

    if capabilities.sortable {
        if let Some(order) = &options.order {
            parts.push(format!("order={}", order.encode()));
        }
    }

    for (key, value) in &options.query {
        parts.push(format!(
            "{}={}",
            urlencoding::encode(key),
            urlencoding::encode(value)
        ));
    }

    if capabilities.filtering {
        let fragment = encode_filters(&options.filter);
        if !fragment.is_empty() {
            parts.push(fragment);
        }
    }

    parts.join("&")
}
