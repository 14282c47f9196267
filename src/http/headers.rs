//! Header storage for [`Message`](crate::http::message::Message).
//!
//! Headers are keyed by their lower-cased name so lookups are case-insensitive,
//! while the casing a header was first given is kept for display. Each header
//! holds an ordered list of values; the order of values within one header is
//! significant, the order across different headers is not.
//!
//! Every mutation validates its input through the
//! [`validator`](crate::http::validator) module before touching the
//! collection, so a failed call never leaves a partial change behind.

use std::time::{SystemTime, UNIX_EPOCH};

use httpdate::HttpDate;
use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::{MessageError, Result};
use crate::http::validator::Validator;

/// A scalar that can be rendered as a single header value.
pub trait HeaderElement {
    fn into_element(self) -> String;
}

impl HeaderElement for &str {
    fn into_element(self) -> String {
        self.to_string()
    }
}

impl HeaderElement for String {
    fn into_element(self) -> String {
        self
    }
}

impl HeaderElement for &String {
    fn into_element(self) -> String {
        self.clone()
    }
}

/// Rendered as an IMF-fixdate, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`.
impl HeaderElement for HttpDate {
    fn into_element(self) -> String {
        self.to_string()
    }
}

// First second of year 10000; IMF-fixdate has a four digit year.
const MAX_HTTP_DATE_SECS: u64 = 253_402_300_800;

macro_rules! numeric_header_element {
    ($($ty:ty),*) => {
        $(
            impl HeaderElement for $ty {
                fn into_element(self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

numeric_header_element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Caller-supplied header value, resolved to a list of strings before it is
/// stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderValue {
    Single(String),
    List(Vec<String>),
    /// Rendered as `key=value` strings, in order.
    Pairs(Vec<(String, String)>),
}

impl HeaderValue {
    pub fn pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: HeaderElement,
        V: HeaderElement,
    {
        HeaderValue::Pairs(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into_element(), v.into_element()))
                .collect(),
        )
    }

    /// An IMF-fixdate value. Times before 1970 or past year 9999 cannot be
    /// written in that format and are refused.
    pub fn date(time: SystemTime) -> Result<Self> {
        match time.duration_since(UNIX_EPOCH) {
            Ok(since) if since.as_secs() < MAX_HTTP_DATE_SECS => {
                Ok(HeaderValue::from(HttpDate::from(time)))
            }
            _ => {
                debug!(?time, "rejecting date outside the IMF-fixdate range");
                Err(MessageError::InvalidHeaderValue {
                    value: format!("{time:?}"),
                })
            }
        }
    }

    pub fn into_values(self) -> Vec<String> {
        match self {
            HeaderValue::Single(value) => vec![value],
            HeaderValue::List(values) => values,
            HeaderValue::Pairs(pairs) => pairs
                .into_iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect(),
        }
    }
}

impl<T: HeaderElement> From<T> for HeaderValue {
    fn from(value: T) -> Self {
        HeaderValue::Single(value.into_element())
    }
}

impl<T: HeaderElement> From<Vec<T>> for HeaderValue {
    fn from(values: Vec<T>) -> Self {
        HeaderValue::List(values.into_iter().map(HeaderElement::into_element).collect())
    }
}

impl<T: HeaderElement, const N: usize> From<[T; N]> for HeaderValue {
    fn from(values: [T; N]) -> Self {
        HeaderValue::List(values.into_iter().map(HeaderElement::into_element).collect())
    }
}

impl<T: HeaderElement + Clone> From<&[T]> for HeaderValue {
    fn from(values: &[T]) -> Self {
        HeaderValue::List(values.iter().cloned().map(HeaderElement::into_element).collect())
    }
}

impl<K: HeaderElement, V: HeaderElement> From<IndexMap<K, V>> for HeaderValue {
    fn from(pairs: IndexMap<K, V>) -> Self {
        HeaderValue::pairs(pairs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    name: String,
    values: Vec<String>,
}

impl HeaderEntry {
    /// The casing the header was first stored with.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderCollection {
    entries: IndexMap<String, HeaderEntry>,
}

impl HeaderCollection {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Builds a collection from `(name, value)` pairs, applying [`set`](Self::set)
    /// to each in turn.
    pub fn from_pairs<I, N, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: Into<HeaderValue>,
    {
        let mut headers = Self::new();
        for (name, value) in pairs {
            headers.set(name.as_ref(), value)?;
        }
        Ok(headers)
    }

    /// Values of the header, or `None` when it is absent.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entry(name).map(HeaderEntry::values)
    }

    /// Values of the header; empty when it is absent.
    pub fn get_values(&self, name: &str) -> &[String] {
        self.get(name).unwrap_or_default()
    }

    pub fn get_line(&self, name: &str) -> String {
        self.get_values(name).join(", ")
    }

    pub fn entry(&self, name: &str) -> Option<&HeaderEntry> {
        self.entries.get(&name.to_ascii_lowercase())
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    /// Replaces every value of the header. An existing header keeps the casing
    /// it was first stored with.
    pub fn set(&mut self, name: &str, value: impl Into<HeaderValue>) -> Result<()> {
        let (key, values) = Self::validate(name, value)?;
        trace!(name, count = values.len(), "set header");

        match self.entries.get_mut(&key) {
            Some(entry) => entry.values = values,
            None => self.insert(key, name, values),
        }
        Ok(())
    }

    /// Adds values after the existing ones, or sets the header when absent.
    pub fn append(&mut self, name: &str, value: impl Into<HeaderValue>) -> Result<()> {
        let (key, values) = Self::validate(name, value)?;
        trace!(name, count = values.len(), "append header");

        match self.entries.get_mut(&key) {
            Some(entry) => entry.values.extend(values),
            None => self.insert(key, name, values),
        }
        Ok(())
    }

    /// Adds values before the existing ones, or sets the header when absent.
    pub fn prepend(&mut self, name: &str, value: impl Into<HeaderValue>) -> Result<()> {
        let (key, values) = Self::validate(name, value)?;
        trace!(name, count = values.len(), "prepend header");

        match self.entries.get_mut(&key) {
            Some(entry) => {
                let mut merged = values;
                merged.append(&mut entry.values);
                entry.values = merged;
            }
            None => self.insert(key, name, values),
        }
        Ok(())
    }

    /// Removes the header. Returns whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let removed = self.entries.shift_remove(&name.to_ascii_lowercase()).is_some();
        if removed {
            trace!(name, "removed header");
        }
        removed
    }

    /// Every header keyed by its display name.
    pub fn all(&self) -> IndexMap<String, Vec<String>> {
        self.entries
            .values()
            .map(|entry| (entry.name.clone(), entry.values.clone()))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .values()
            .map(|entry| (entry.name.as_str(), entry.values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn validate(name: &str, value: impl Into<HeaderValue>) -> Result<(String, Vec<String>)> {
        let key = Validator::validate_header_name(name)?;
        let values = Validator::validate_header_value(name, value.into())?;
        Ok((key, values))
    }

    fn insert(&mut self, key: String, name: &str, values: Vec<String>) {
        self.entries.insert(
            key,
            HeaderEntry {
                name: name.to_string(),
                values,
            },
        );
    }
}
