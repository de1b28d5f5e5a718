//! # transmap
//!
//! Bidirectional transforming views over key-value mappings.
//!
//! ## Overview
//!
//! A transformed view is a lightweight adapter that lets you read (and
//! optionally write) an existing mapping through a different key/value
//! vocabulary, without copying the underlying data and without eagerly
//! transforming every entry. It provides:
//!
//! - **Translates**: partial bidirectional conversions between the source
//!   and view vocabularies, with combinators (`reverse`, `compose`) and an
//!   identity default for every axis you don't customize
//! - **Mapping traits**: the small capability surface a container needs in
//!   order to be wrapped (implemented for `HashMap` and `BTreeMap`)
//! - **`TransformedView`**: lazy read-only access (lookup, membership,
//!   traversal), re-derived from the live mapping on every call
//! - **`TransformedViewMut`**: the same plus write-through insertion and
//!   deletion
//!
//! A source entry is visible through the view exactly when the forward key
//! translation accepts its key; declining the translation is the sole
//! filtering mechanism.
//!
//! ## Example
//!
//! Reading WSGI-style request headers through a friendlier vocabulary:
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use transmap::prelude::*;
//!
//! let mut environ = BTreeMap::new();
//! environ.insert("HTTP_USER_AGENT".to_string(), "Example User Agent".to_string());
//! environ.insert("HTTP_FOO_BAR".to_string(), "Example value".to_string());
//! environ.insert("wsgi.not_important".to_string(), "ignored".to_string());
//!
//! // 'HTTP_USER_AGENT' <-> 'user-agent'
//! let header_names = FunctionTranslate::new(
//!     |raw: String| {
//!         raw.strip_prefix("HTTP_")
//!             .map(|rest| rest.to_ascii_lowercase().replace('_', "-"))
//!     },
//!     |name: String| Some(format!("HTTP_{}", name.to_ascii_uppercase().replace('-', "_"))),
//! );
//!
//! let mut headers = TransformedViewMut::new(&mut environ, header_names, identity_translate());
//!
//! assert_eq!(
//!     headers.get("user-agent".to_string()),
//!     Some("Example User Agent".to_string())
//! );
//! assert!(headers.contains("foo-bar".to_string()));
//! assert!(!headers.contains("wsgi.not_important".to_string()));
//!
//! // Write-through: the insertion lands in the underlying mapping.
//! let previous = headers.set("referer".to_string(), "https://example.org/".to_string());
//! assert_eq!(previous, Ok(None));
//! drop(headers);
//! assert_eq!(
//!     environ.get("HTTP_REFERER").map(String::as_str),
//!     Some("https://example.org/")
//! );
//! ```
//!
//! Case-insensitive lookup over a plain map:
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use transmap::prelude::*;
//!
//! let mut map = BTreeMap::new();
//! map.insert("animal".to_string(), "cat".to_string());
//! map.insert("IGNORED".to_string(), "not lowercase".to_string());
//!
//! let casefold = FunctionTranslate::new(
//!     |key: String| (key == key.to_lowercase()).then_some(key),
//!     |key: String| Some(key.to_lowercase()),
//! );
//!
//! let view = TransformedView::new(&map, casefold, identity_translate());
//!
//! assert_eq!(view.get("Animal".to_string()), Some("cat".to_string()));
//! assert!(view.contains("aNiMaL".to_string()));
//! // 'IGNORED' is not its own lowercase form, so it is filtered out entirely.
//! assert!(!view.contains("IGNORED".to_string()));
//! assert_eq!(view.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use transmap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;
    pub use crate::mapping::*;
    pub use crate::translate::*;
    pub use crate::view::*;
}

pub mod error;
pub mod mapping;
pub mod translate;
pub mod view;
