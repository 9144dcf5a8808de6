use crate::parser::LabelSequence;

use super::{InternalNode, SuffixTrie};

/// Host split around its public suffix. All fields borrow from the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostParts<'a> {
    pub subdomain: &'a str,
    pub domain: &'a str,
    pub suffix: &'a str,
    pub registrable_domain: &'a str,
}

impl SuffixTrie {
    /// Split a labeled host into subdomain, domain and suffix.
    ///
    /// The subdomain is only computed when `include_subdomain` is set.
    pub fn split_host<'a>(
        &self,
        labels: &LabelSequence<'a>,
        include_subdomain: bool,
    ) -> HostParts<'a> {
        let total = labels.len();
        let mut matched = self.suffix_token_count(labels);

        // the suffix always starts on a label
        if matched > 0 && labels.is_separator(total - matched) {
            matched -= 1;
        }

        let mut parts = HostParts {
            suffix: labels.span(total - matched, total),
            ..HostParts::default()
        };

        if matched < total {
            // skip the separator between domain and suffix
            let domain_idx = if matched > 0 {
                total - matched - 2
            } else {
                total - 1
            };
            parts.domain = labels.token(domain_idx);

            if include_subdomain && domain_idx > 0 {
                parts.subdomain = labels.span(0, domain_idx - 1);
            }
            if !parts.domain.is_empty() && !parts.suffix.is_empty() {
                parts.registrable_domain = labels.span(domain_idx, total);
            }
        }

        parts
    }

    /// Number of trailing tokens (labels and separators) covered by the
    /// longest matching rule.
    fn suffix_token_count(&self, labels: &LabelSequence<'_>) -> usize {
        let mut node: Option<&InternalNode> = Some(self.root());
        let mut count = 0;

        for idx in (0..labels.len()).rev() {
            if labels.is_separator(idx) {
                count += 1;
                continue;
            }
            let label = labels.token(idx);

            // leaf: nothing extends this suffix
            let Some(inner) = node else {
                break;
            };

            // `cn` and `gov.cn` both present
            if inner.has_end {
                if let Some(child) = inner.child(label) {
                    count += 1;
                    node = child.as_internal();
                    continue;
                }
            }

            // a wildcard consumes exactly one more label unless it is excepted
            if inner.wildcard {
                if !inner.is_exception(label) {
                    count += 1;
                }
                break;
            }

            match inner.child(label) {
                Some(child) => {
                    count += 1;
                    node = child.as_internal();
                }
                None => break,
            }
        }

        count
    }
}
