//! fasttld - Fast URL component extraction backed by the Public Suffix List
//!
//! This library splits URL-like strings into their parts and finds the
//! registrable domain using the Mozilla Public Suffix List:
//! - Scheme, userinfo, port and path scanning without a full URL parser
//! - Longest-suffix matching with wildcard and exception rules
//! - IPv4 and bracketed IPv6 literals
//! - Optional punycode (IDNA) normalization of the host
//! - Concurrent extraction with atomic list updates
//!
//! # Example
//!
//! ```rust
//! use fasttld::{ExtractOptions, ExtractorOptions, MemoryPslLoader, TldExtractor};
//!
//! let loader = MemoryPslLoader::from_text(
//!     "
//! // ===BEGIN ICANN DOMAINS===
//! com
//! uk
//! co.uk
//! // ===END ICANN DOMAINS===
//! // ===BEGIN PRIVATE DOMAINS===
//! blogspot.co.uk
//! // ===END PRIVATE DOMAINS===
//! ",
//! );
//!
//! // Build the extractor
//! let extractor = TldExtractor::new(&loader, ExtractorOptions::default()).unwrap();
//!
//! // Extract components
//! let res = extractor.extract(
//!     "https://user@maps.google.co.uk:8080/a?b#c",
//!     ExtractOptions::default(),
//! );
//! assert_eq!(res.scheme, "https://");
//! assert_eq!(res.userinfo, "user");
//! assert_eq!(res.subdomain, "maps");
//! assert_eq!(res.domain, "google");
//! assert_eq!(res.suffix, "co.uk");
//! assert_eq!(res.port, "8080");
//! assert_eq!(res.path, "/a?b#c");
//! assert_eq!(res.registrable_domain, "google.co.uk");
//! ```
//!
//! # Result Fields
//!
//! | Field | Example | Description |
//! |-------|---------|-------------|
//! | scheme | `https://` | Scheme and separator run, verbatim |
//! | userinfo | `user:pw` | Text before the last `@` of the authority |
//! | subdomain | `www.maps` | Labels left of the domain |
//! | domain | `google` | Label right above the public suffix |
//! | suffix | `co.uk` | Longest matching public suffix |
//! | port | `8080` | Only when numeric and at most 65535 |
//! | path | `/a?b#c` | Everything from the first `/`, `\`, `?` or `#` |
//! | registrable_domain | `google.co.uk` | Domain and suffix |
//!
//! ## Loaders
//!
//! - `MemoryPslLoader` - rules held in memory
//! - `FilePslLoader` - a local `public_suffix_list.dat`
//! - `AutoPslLoader` - local copy refreshed from publicsuffix.org (feature `download`)
//! - `NilPslLoader` - no list available

pub mod error;
pub mod extractor;
pub mod parser;
pub mod psl;
pub mod trie;
pub mod types;

// Re-export commonly used items
pub use error::{HostError, PslErrorKind, Result, TldError};
pub use extractor::TldExtractor;
pub use types::{ExtractOptions, ExtractResult, ExtractorOptions};

// Re-export loader types
#[cfg(feature = "download")]
pub use psl::AutoPslLoader;
pub use psl::{
    FilePslLoader, MemoryPslLoader, NilPslLoader, PslLoader, Section, SuffixList,
    DEFAULT_PSL_FILENAME, DEFAULT_PSL_URL, DEFAULT_UPDATE_INTERVAL,
};

// Re-export trie types
pub use trie::{HostParts, SuffixTrie};
