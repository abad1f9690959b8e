use std::fmt;

/// Headers a multipart part commonly carries.
///
/// Used by [`HeaderStore::add_known`](crate::HeaderStore::add_known) and the
/// typed accessors; any other name goes through the raw string API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownHeader {
    ContentDisposition,
    ContentType,
    ContentLength,
    ContentTransferEncoding,
}

impl KnownHeader {
    /// The case-folded name, as stored in a [`HeaderStore`](crate::HeaderStore).
    pub fn as_str(&self) -> &'static str {
        match self {
            KnownHeader::ContentDisposition => "content-disposition",
            KnownHeader::ContentType => "content-type",
            KnownHeader::ContentLength => "content-length",
            KnownHeader::ContentTransferEncoding => "content-transfer-encoding",
        }
    }
}

impl fmt::Display for KnownHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Folds a header name for storage and lookup.
///
/// Only ASCII letters are lowered, independent of any locale, so `"TITLE"`
/// and `"title"` match while `"İ"` is kept as is.
pub(crate) fn fold(name: &str) -> String {
    name.to_ascii_lowercase()
}
