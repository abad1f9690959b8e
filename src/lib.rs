//! Header storage for multipart file-upload items.
//!
//! A multipart part carries a small block of HTTP-style headers
//! (`Content-Disposition`, `Content-Type`, ...). The parser that reads that
//! block hands each line to a [`HeaderStore`], and consumers later query it
//! through the [`FileItemHeaders`] contract.
//!
//! ```
//! use fileupload_headers::{FileItemHeaders, HeaderStore};
//!
//! let headers = HeaderStore::new();
//! headers.add_header("Content-Type", "text/plain");
//! headers.add_header("X-Tag", "a");
//! headers.add_header("x-tag", "b");
//!
//! assert_eq!(headers.get_header("content-type").as_deref(), Some("text/plain"));
//! assert_eq!(headers.get_headers("X-TAG").collect::<Vec<_>>(), ["a", "b"]);
//! assert_eq!(headers.get_header_names().collect::<Vec<_>>(), ["content-type", "x-tag"]);
//! ```

pub mod config;
pub mod error;
pub mod headers;
pub mod item;

pub use config::{HeadersConfig, LineEnding};
pub use error::{ConfigError, HeaderError};
pub use headers::{FileItemHeaders, HeaderStore, KnownHeader, Names, Values};
pub use item::HeadersProvider;
