//! Glue between file-upload items and their headers.

use crate::headers::HeaderStore;

/// Implemented by file-upload items that carry a header block.
///
/// The multipart parser fills a [`HeaderStore`] while reading a part's header
/// lines and hands it to the item with [`set_headers`](Self::set_headers).
pub trait HeadersProvider {
    fn headers(&self) -> &HeaderStore;

    fn set_headers(&mut self, headers: HeaderStore);
}
