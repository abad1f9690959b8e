//! Header store for a multipart file-upload item.
//!
//! Header names are case-folded with ASCII lower-casing when stored and when
//! looked up, so `Content-Type`, `content-type` and `CONTENT-TYPE` address the
//! same entry. The original casing is not kept.
//!
//! A name may carry several values. Names are enumerated in the order they were
//! first added and values in the order they were added for that name.
//!
//! Neither names nor values are validated. The multipart parser that populates
//! the store is responsible for splitting header lines; this module only keeps
//! what it is given.
//!
//! The store may be shared between threads: every access goes through a single
//! [`RwLock`], and enumeration returns snapshots ([`Values`], [`Names`]) so no
//! lock is held while the caller iterates.

mod iter;
mod name;
mod wire;


use indexmap::IndexMap;
use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::{HeadersConfig, MAX_INITIAL_CAPACITY, with_current};
use crate::error::HeaderError;

pub use iter::{Names, Values};
pub use name::KnownHeader;

use name::fold;

type Entries = IndexMap<String, Vec<String>>;

/// Read access to the headers of a file-upload item.
pub trait FileItemHeaders {
    /// First value added for `name`, or `None` when the name is unknown.
    fn get_header(&self, name: &str) -> Option<String>;

    /// Every value added for `name`, in insertion order.
    ///
    /// An unknown name yields an empty iterator rather than `None`.
    fn get_headers(&self, name: &str) -> Values;

    /// Every distinct (case-folded) header name, in order of first insertion.
    fn get_header_names(&self) -> Names;
}

pub struct HeaderStore {
    entries: RwLock<Entries>,
}

impl HeaderStore {
    /// Creates an empty store sized by the process-wide config.
    ///
    /// Uses [`HeadersConfig::default`] when no config was installed with
    /// [`set_config`](crate::config::set_config), without installing it.
    pub fn new() -> Self {
        with_current(Self::with_config)
    }

    pub fn with_config(cfg: &HeadersConfig) -> Self {
        let capacity = cfg.initial_capacity.min(MAX_INITIAL_CAPACITY);
        Self {
            entries: RwLock::new(IndexMap::with_capacity(capacity)),
        }
    }

    /// Appends `value` to the values of `name`.
    ///
    /// Any name and value are accepted, empty strings included.
    pub fn add_header(&self, name: &str, value: impl Into<String>) {
        let name = fold(name);
        let value = value.into();
        tracing::trace!(name = %name, value_len = value.len(), "add header");

        self.write().entry(name).or_default().push(value);
    }

    pub fn add_known(&self, header: KnownHeader, value: impl Into<String>) {
        self.add_header(header.as_str(), value);
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(&fold(name))
    }

    pub fn content_type(&self) -> Option<String> {
        self.get_header(KnownHeader::ContentType.as_str())
    }

    pub fn content_disposition(&self) -> Option<String> {
        self.get_header(KnownHeader::ContentDisposition.as_str())
    }

    /// Parses the first `Content-Length` value.
    ///
    /// Returns `Ok(None)` when the header is absent.
    pub fn content_length(&self) -> Result<Option<u64>, HeaderError> {
        let Some(value) = self.get_header(KnownHeader::ContentLength.as_str()) else {
            return Ok(None);
        };

        match value.trim().parse::<u64>() {
            Ok(len) => Ok(Some(len)),
            Err(_) => Err(HeaderError::InvalidContentLength(value)),
        }
    }

    // A writer only ever pushes into a single entry, so the map is still
    // consistent after a panic while the lock was held.
    fn read(&self) -> RwLockReadGuard<'_, Entries> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FileItemHeaders for HeaderStore {
    fn get_header(&self, name: &str) -> Option<String> {
        self.read()
            .get(&fold(name))
            .and_then(|values| values.first().cloned())
    }

    fn get_headers(&self, name: &str) -> Values {
        match self.read().get(&fold(name)) {
            Some(values) => Values::new(values.clone()),
            None => Values::empty(),
        }
    }

    fn get_header_names(&self) -> Names {
        Names::new(self.read().keys().cloned().collect())
    }
}

impl Default for HeaderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for HeaderStore {
    fn clone(&self) -> Self {
        Self {
            entries: RwLock::new(self.read().clone()),
        }
    }
}

impl fmt::Debug for HeaderStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.read().iter()).finish()
    }
}

impl<N: AsRef<str>, V: Into<String>> Extend<(N, V)> for HeaderStore {
    fn extend<I: IntoIterator<Item = (N, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.add_header(name.as_ref(), value);
        }
    }
}

impl<N: AsRef<str>, V: Into<String>> FromIterator<(N, V)> for HeaderStore {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut store = HeaderStore::new();
        store.extend(iter);
        store
    }
}
