//! Filter expressions and their query-string encoding.
//!
//! A [`Filter`] describes one condition on one field. Filters are collected
//! into a [`FilterMap`] (insertion-ordered, since field order is
//! caller-significant) and encoded into a query-string fragment by
//! [`encode_filters`].
//!
//! # Encoding rules
//!
//! | Filter | Fragment |
//! |---|---|
//! | `Exists(true)` | `field` |
//! | `Exists(false)` | `!field` |
//! | `Value(v)` | `field=value` |
//! | `Not(v)` | `field!=value` |
//! | `In([a, b])` | `field=a,b` |
//! | `NotIn([a, b])` | `field!=a,b` |
//! | `Compare { gt: 20, .. }` | `words>20` (one fragment per bound) |
//!
//! String and pattern values are percent-encoded exactly once; numbers and
//! null are emitted verbatim. Patterns encode their literal source text
//! (`/abc/i` encodes the seven characters of that text).

use std::fmt;

/// A primitive value usable inside a filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// A string value, percent-encoded on output.
    Str(String),
    /// A numeric value, emitted verbatim.
    Num(serde_json::Number),
    /// A null value, emitted as `null`.
    Null,
    /// The literal source text of a pattern (e.g. `/abc/i`),
    /// percent-encoded on output like a string.
    Pattern(String),
}

impl FilterValue {
    /// Encodes the value for use in a query-string fragment.
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Self::Str(s) | Self::Pattern(s) => urlencoding::encode(s).into_owned(),
            Self::Num(n) => n.to_string(),
            Self::Null => "null".to_string(),
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) | Self::Pattern(s) => f.write_str(s),
            Self::Num(n) => write!(f, "{n}"),
            Self::Null => f.write_str("null"),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Num(value.into())
    }
}

impl From<u64> for FilterValue {
    fn from(value: u64) -> Self {
        Self::Num(value.into())
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value).map_or(Self::Null, Self::Num)
    }
}

/// Numeric comparison bounds.
///
/// Any non-empty subset of the four bounds may be populated. Bounds are
/// encoded in the fixed order `>`, `<`, `>=`, `<=`, each as a separate
/// top-level fragment. Logical consistency between bounds is deliberately
/// not validated: `gt: 10, lt: 5` encodes both fragments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comparison {
    /// Strictly greater than.
    pub gt: Option<serde_json::Number>,
    /// Strictly less than.
    pub lt: Option<serde_json::Number>,
    /// Greater than or equal.
    pub gte: Option<serde_json::Number>,
    /// Less than or equal.
    pub lte: Option<serde_json::Number>,
}

impl Comparison {
    /// Creates an empty comparison.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the strict lower bound.
    #[must_use]
    pub fn gt(mut self, value: impl Into<serde_json::Number>) -> Self {
        self.gt = Some(value.into());
        self
    }

    /// Sets the strict upper bound.
    #[must_use]
    pub fn lt(mut self, value: impl Into<serde_json::Number>) -> Self {
        self.lt = Some(value.into());
        self
    }

    /// Sets the inclusive lower bound.
    #[must_use]
    pub fn gte(mut self, value: impl Into<serde_json::Number>) -> Self {
        self.gte = Some(value.into());
        self
    }

    /// Sets the inclusive upper bound.
    #[must_use]
    pub fn lte(mut self, value: impl Into<serde_json::Number>) -> Self {
        self.lte = Some(value.into());
        self
    }
}

/// A single filter condition. Exactly one shape per instance.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Exact match against a primitive value.
    Value(FilterValue),
    /// Negated match.
    Not(FilterValue),
    /// Existence (`true`) or absence (`false`) of the field.
    Exists(bool),
    /// Inclusion in a list of primitives.
    In(Vec<FilterValue>),
    /// Exclusion from a list of primitives.
    NotIn(Vec<FilterValue>),
    /// Numeric comparison bounds.
    Compare(Comparison),
}

impl Filter {
    /// Exact-match filter.
    #[must_use]
    pub fn eq(value: impl Into<FilterValue>) -> Self {
        Self::Value(value.into())
    }

    /// Negated-match filter.
    #[must_use]
    pub fn ne(value: impl Into<FilterValue>) -> Self {
        Self::Not(value.into())
    }

    /// Existence filter: the field must be present.
    #[must_use]
    pub const fn exists() -> Self {
        Self::Exists(true)
    }

    /// Absence filter: the field must not be present.
    #[must_use]
    pub const fn absent() -> Self {
        Self::Exists(false)
    }

    /// Inclusion filter over a list of primitives.
    #[must_use]
    pub fn one_of<V: Into<FilterValue>>(values: impl IntoIterator<Item = V>) -> Self {
        Self::In(values.into_iter().map(Into::into).collect())
    }

    /// Exclusion filter over a list of primitives.
    #[must_use]
    pub fn none_of<V: Into<FilterValue>>(values: impl IntoIterator<Item = V>) -> Self {
        Self::NotIn(values.into_iter().map(Into::into).collect())
    }

    /// Pattern match against the literal source text of a pattern.
    #[must_use]
    pub fn pattern(source: impl Into<String>) -> Self {
        Self::Value(FilterValue::Pattern(source.into()))
    }

    /// Numeric comparison filter.
    #[must_use]
    pub const fn compare(comparison: Comparison) -> Self {
        Self::Compare(comparison)
    }

    /// Appends this filter's fragments for `field` onto `fragments`.
    fn push_fragments(&self, field: &str, fragments: &mut Vec<String>) {
        match self {
            Self::Exists(true) => fragments.push(field.to_string()),
            Self::Exists(false) => fragments.push(format!("!{field}")),
            Self::Value(value) => fragments.push(format!("{field}={}", value.encode())),
            Self::Not(value) => fragments.push(format!("{field}!={}", value.encode())),
            Self::In(values) => fragments.push(format!("{field}={}", join_encoded(values))),
            Self::NotIn(values) => fragments.push(format!("{field}!={}", join_encoded(values))),
            Self::Compare(comparison) => {
                // Fixed bound order: >, <, >=, <=. Every populated bound is
                // emitted as its own fragment; consistency is not validated.
                let bounds: [(&str, &Option<serde_json::Number>); 4] = [
                    (">", &comparison.gt),
                    ("<", &comparison.lt),
                    (">=", &comparison.gte),
                    ("<=", &comparison.lte),
                ];
                for (op, bound) in bounds {
                    if let Some(value) = bound {
                        fragments.push(format!("{field}{op}{value}"));
                    }
                }
            }
        }
    }
}

/// Percent-encodes each value independently, then joins with commas.
fn join_encoded(values: &[FilterValue]) -> String {
    values
        .iter()
        .map(FilterValue::encode)
        .collect::<Vec<_>>()
        .join(",")
}

/// An insertion-ordered mapping of field name to [`Filter`].
///
/// Field order is caller-significant and preserved through encoding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterMap(Vec<(String, Filter)>);

impl FilterMap {
    /// Creates an empty filter map.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a filter for the given field, preserving insertion order.
    pub fn insert(&mut self, field: impl Into<String>, filter: Filter) {
        self.0.push((field.into(), filter));
    }

    /// Chainable form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, filter: Filter) -> Self {
        self.insert(field, filter);
        self
    }

    /// Returns `true` if no filters are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Filter)> {
        self.0.iter().map(|(field, filter)| (field.as_str(), filter))
    }
}

impl<S: Into<String>> FromIterator<(S, Filter)> for FilterMap {
    fn from_iter<T: IntoIterator<Item = (S, Filter)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, filter)| (field.into(), filter))
                .collect(),
        )
    }
}

/// Encodes a filter map into a single query-string fragment.
///
/// Fragments across all fields are joined with `&`, in map order. Empty
/// fragments are dropped before joining, so the result never carries a
/// dangling `&`. The result has no leading `?` or `&`.
#[must_use]
pub fn encode_filters(filters: &FilterMap) -> String {
    let mut fragments = Vec::new();
    for (field, filter) in filters.iter() {
        filter.push_fragments(field, &mut fragments);
    }
    fragments.retain(|fragment| !fragment.is_empty());
    fragments.join("&")
}
