//! Shared query infrastructure: the [`Query`] trait, the [`QueryValues`]
//! encoder, base [`ListOptions`] and [`SortDirection`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Trait implemented by all list options. Provides query string serialization.
///
/// Object safe, so the transport accepts `Option<&dyn Query>`. The
/// `Send + Sync` bound keeps request futures spawnable.
pub trait Query: Send + Sync {
    /// Collects the non-empty parameters of this value.
    fn values(&self) -> QueryValues;

    /// Encodes the parameters as a query string without the leading `?`.
    /// Returns an empty string when nothing is set.
    fn encode(&self) -> String {
        self.values().encode()
    }
}

/// Builder methods for options that embed [`ListOptions`].
pub trait Paginate: Query {
    /// Returns a mutable reference to the pagination fields.
    fn list_options(&mut self) -> &mut ListOptions;

    /// Sets the maximum number of items per page.
    fn with_limit(mut self, limit: u32) -> Self
    where
        Self: Sized,
    {
        self.list_options().limit = limit;
        self
    }

    /// Sets how many items to skip.
    fn with_offset(mut self, offset: u32) -> Self
    where
        Self: Sized,
    {
        self.list_options().offset = offset;
        self
    }
}

/// Sort order for list results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order. This is the default.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        })
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// Pagination shared by every list endpoint. Zero means "not set".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Maximum number of items to return (server maximum is 500).
    pub limit: u32,
    /// Number of items to skip.
    pub offset: u32,
}

impl ListOptions {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    /// Adds the pagination parameters to `values`.
    pub fn append_to(&self, values: &mut QueryValues) {
        values.number("limit", self.limit);
        values.number("offset", self.offset);
    }
}

impl Query for ListOptions {
    fn values(&self) -> QueryValues {
        let mut values = QueryValues::new();
        self.append_to(&mut values);
        values
    }
}

impl Paginate for ListOptions {
    fn list_options(&mut self) -> &mut ListOptions {
        self
    }
}

/// Query parameters kept in key order, so encoding is deterministic.
///
/// Every setter skips the "not provided" value of its input kind: `None`,
/// an empty string or list, or the zero value of a number.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryValues {
    pairs: BTreeMap<String, String>,
}

impl QueryValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a string parameter unless it is `None` or empty.
    pub fn string(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.pairs.insert(key.to_string(), value.to_string());
        }
        self
    }

    /// Sets a numeric parameter unless it equals zero.
    pub fn number<T>(&mut self, key: &str, value: T) -> &mut Self
    where
        T: fmt::Display + Default + PartialEq,
    {
        if value != T::default() {
            self.pairs.insert(key.to_string(), value.to_string());
        }
        self
    }

    /// Sets a numeric parameter whenever it is present, zero included.
    pub fn opt_number<T: fmt::Display>(&mut self, key: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.pairs.insert(key.to_string(), value.to_string());
        }
        self
    }

    /// Sets a numeric enum parameter only when it is one of `allowed`.
    /// Out-of-range values are dropped silently.
    pub fn number_in<T>(&mut self, key: &str, value: Option<T>, allowed: &[T]) -> &mut Self
    where
        T: fmt::Display + PartialEq,
    {
        match value {
            Some(value) if allowed.contains(&value) => self.opt_number(key, Some(value)),
            _ => self,
        }
    }

    /// Sets a boolean parameter as `1` or `0`.
    pub fn flag(&mut self, key: &str, value: Option<bool>) -> &mut Self {
        self.opt_number(key, value.map(u8::from))
    }

    /// Sets a list parameter, comma-joined, unless the list is empty.
    pub fn list<T: fmt::Display>(&mut self, key: &str, values: &[T]) -> &mut Self {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            self.pairs.insert(key.to_string(), joined);
        }
        self
    }

    /// Sets `orderBy` as `"<field> <direction>,..."` unless `fields` is empty.
    pub fn order_by<F: fmt::Display>(&mut self, fields: &[(F, SortDirection)]) -> &mut Self {
        let terms: Vec<String> = fields
            .iter()
            .map(|(field, direction)| format!("{} {}", field, direction))
            .collect();
        self.list("orderBy", &terms)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Form-urlencodes the parameters in key order.
    pub fn encode(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}
