//! Declarative query construction.
//!
//! This module translates a declarative query — pagination, sort, filters —
//! into the canonical query string appended to a request path.
//!
//! - [`Filter`] / [`FilterMap`]: structured filter expressions and their
//!   query-fragment encoding
//! - [`RequestOptions`]: the per-call option set
//! - [`compose_query`]: merges pagination/sort/filter fragments into one
//!   query string, honoring the endpoint's declared capabilities

mod filter;
mod options;

pub use filter::{encode_filters, Comparison, Filter, FilterMap, FilterValue};
pub use options::{compose_query, RequestOptions, Sort, SortDirection};
