use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, trace, warn};

use crate::error::{HostError, PslErrorKind, Result, TldError};
use crate::parser::{
    is_ipv4_literal, is_ipv6_literal, split_authority, split_port_and_path, split_scheme,
    split_userinfo, strip_input, to_ascii, LabelSequence,
};
use crate::psl::{PslLoader, SuffixList};
use crate::trie::SuffixTrie;
use crate::types::{ExtractOptions, ExtractResult, ExtractorOptions};

/// URL component extractor backed by a Public Suffix List trie.
///
/// The trie is shared behind an `Arc`; [`update`](Self::update) publishes a
/// new one without blocking callers that are already extracting.
#[derive(Debug)]
pub struct TldExtractor {
    trie: RwLock<Arc<SuffixTrie>>,
    options: ExtractorOptions,
}

impl TldExtractor {
    /// Load the list from `loader` and build the trie.
    pub fn new(loader: &dyn PslLoader, options: ExtractorOptions) -> Result<Self> {
        let list = loader.load()?;
        Self::from_suffix_list(&list, options)
    }

    /// Build the trie from an already loaded list.
    pub fn from_suffix_list(list: &SuffixList, options: ExtractorOptions) -> Result<Self> {
        let trie = build_trie(list, options)?;
        info!(
            rules = trie.rule_count(),
            exclude_private = options.exclude_private_suffix,
            "Suffix trie built"
        );
        Ok(Self {
            trie: RwLock::new(Arc::new(trie)),
            options,
        })
    }

    pub fn options(&self) -> ExtractorOptions {
        self.options
    }

    /// Snapshot of the trie currently in use.
    pub fn trie(&self) -> Arc<SuffixTrie> {
        self.trie.read().clone()
    }

    /// Refresh the loader's source, rebuild the trie and swap it in.
    ///
    /// On failure the current trie stays published.
    pub fn update(&self, loader: &dyn PslLoader) -> Result<()> {
        let result = loader
            .refresh()
            .and_then(|()| loader.load())
            .and_then(|list| build_trie(&list, self.options));

        match result {
            Ok(trie) => {
                info!(rules = trie.rule_count(), "Suffix trie updated");
                self.replace_trie(trie);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Suffix list update failed, keeping current trie");
                Err(e)
            }
        }
    }

    /// Publish `trie` for all subsequent extractions.
    pub fn replace_trie(&self, trie: SuffixTrie) {
        *self.trie.write() = Arc::new(trie);
    }

    /// Split `input` into its URL components.
    ///
    /// Malformed input never fails; unresolvable components are left empty.
    pub fn extract(&self, input: &str, options: ExtractOptions) -> ExtractResult {
        let trie = self.trie();
        let mut result = ExtractResult::default();

        if let Err(e) = extract_into(&trie, input, options, &mut result) {
            trace!(input, error = %e, "Host not resolved");
        }
        result
    }
}

fn build_trie(list: &SuffixList, options: ExtractorOptions) -> Result<SuffixTrie> {
    let trie = SuffixTrie::new(list.rules(options.exclude_private_suffix));
    if trie.is_empty() {
        return Err(TldError::psl(
            PslErrorKind::InvalidData,
            "Suffix list contains no rules",
        ));
    }
    Ok(trie)
}

/// Fill `result` step by step. Fields set before an error are kept.
fn extract_into(
    trie: &SuffixTrie,
    input: &str,
    options: ExtractOptions,
    result: &mut ExtractResult,
) -> std::result::Result<(), HostError> {
    let input = strip_input(input);

    let (scheme, rest) = split_scheme(input);
    result.scheme = scheme.to_string();

    let (userinfo, netloc) = split_userinfo(rest);
    result.userinfo = userinfo.to_string();

    let authority = split_authority(netloc)?;
    if authority.ipv6 && !is_ipv6_literal(authority.host) {
        return Err(HostError::InvalidIpv6Literal);
    }

    let tail = split_port_and_path(authority.after_host);
    result.port = tail.port.to_string();
    result.path = tail.path.to_string();

    if authority.ipv6 {
        result.domain = authority.host.to_string();
        result.registrable_domain = authority.host.to_string();
        return Ok(());
    }

    let ascii_host;
    let host = if options.normalize_to_ascii {
        ascii_host = to_ascii(authority.host)?;
        ascii_host.as_str()
    } else {
        authority.host
    };

    if is_ipv4_literal(host) {
        result.domain = host.to_string();
        result.registrable_domain = host.to_string();
        return Ok(());
    }

    let labels = LabelSequence::new(host);
    let parts = trie.split_host(&labels, options.include_subdomain);
    result.subdomain = parts.subdomain.to_string();
    result.domain = parts.domain.to_string();
    result.suffix = parts.suffix.to_string();
    result.registrable_domain = parts.registrable_domain.to_string();
    Ok(())
}
