use serde::{Deserialize, Serialize};

/// Components extracted from a URL-like string.
///
/// Every field is a plain string; a component that is absent or could not be
/// resolved is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtractResult {
    /// Scheme plus separator run, verbatim (e.g. `https://`, `//`)
    pub scheme: String,
    /// Everything before the last `@` of the authority
    pub userinfo: String,
    /// Labels left of the domain
    pub subdomain: String,
    /// Label immediately left of the public suffix, or an IP literal
    pub domain: String,
    /// Matched public suffix
    pub suffix: String,
    /// Port digits, only when valid
    pub port: String,
    /// Path, query and fragment, verbatim, starting at the first delimiter
    pub path: String,
    /// Domain, separator and suffix, or an IP literal
    pub registrable_domain: String,
}

/// Options fixed when an extractor is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractorOptions {
    /// Build the trie from the ICANN section only
    pub exclude_private_suffix: bool,
}

impl ExtractorOptions {
    /// Create new extractor options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignore the PRIVATE section of the list.
    pub fn with_exclude_private_suffix(mut self, exclude: bool) -> Self {
        self.exclude_private_suffix = exclude;
        self
    }
}

/// Per-call extraction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Compute the subdomain field (skipping it saves some work)
    pub include_subdomain: bool,
    /// Convert the host to its IDNA ASCII form before matching
    pub normalize_to_ascii: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            include_subdomain: true,
            normalize_to_ascii: false,
        }
    }
}

impl ExtractOptions {
    /// Create new extract options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the subdomain is computed.
    pub fn with_include_subdomain(mut self, include: bool) -> Self {
        self.include_subdomain = include;
        self
    }

    /// Set whether the host is punycode-normalized.
    pub fn with_normalize_to_ascii(mut self, normalize: bool) -> Self {
        self.normalize_to_ascii = normalize;
        self
    }
}
