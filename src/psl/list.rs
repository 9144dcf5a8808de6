use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PslErrorKind, Result, TldError};

const ICANN_BEGIN: &str = "===BEGIN ICANN DOMAINS===";
const PRIVATE_BEGIN: &str = "===BEGIN PRIVATE DOMAINS===";
const ICANN_END: &str = "===END ICANN DOMAINS===";
const PRIVATE_END: &str = "===END PRIVATE DOMAINS===";

/// Section a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// ICANN rules, and rules outside any section marker
    Public,
    /// Rules submitted by private parties (`blogspot.com`, `github.io`, ...)
    Private,
}

/// Public Suffix List rules split into their ICANN and PRIVATE sections.
///
/// Rules keep their PSL spelling (`co.uk`, `*.ck`, `!www.ck`). A rule with
/// non-ASCII labels is stored together with its punycode form so that hosts
/// normalized to ASCII still match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixList {
    public: Vec<String>,
    private: Vec<String>,
}

impl SuffixList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from already separated rules.
    pub fn from_rules<P, Q>(public: P, private: Q) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        Q: IntoIterator,
        Q::Item: AsRef<str>,
    {
        let mut list = Self::new();
        for rule in public {
            list.push(Section::Public, rule.as_ref());
        }
        for rule in private {
            list.push(Section::Private, rule.as_ref());
        }
        list
    }

    /// Parse the `public_suffix_list.dat` text format.
    ///
    /// Each non-comment line contributes its first whitespace-delimited token.
    /// The `===BEGIN ...===` comment markers switch sections.
    pub fn parse(text: &str) -> Self {
        let mut list = Self::new();
        let mut section = Section::Public;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(comment) = line.strip_prefix("//") {
                let comment = comment.trim();
                if comment.starts_with(PRIVATE_BEGIN) {
                    section = Section::Private;
                } else if comment.starts_with(ICANN_BEGIN)
                    || comment.starts_with(ICANN_END)
                    || comment.starts_with(PRIVATE_END)
                {
                    section = Section::Public;
                }
                continue;
            }

            if let Some(rule) = line.split_whitespace().next() {
                list.push(section, rule);
            }
        }

        list
    }

    /// Read and parse a PSL file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            TldError::psl(
                PslErrorKind::FileError,
                format!("Failed to read {}: {}", path.display(), e),
            )
        })?;
        Ok(Self::parse(&text))
    }

    /// Check that a PSL file parses and holds ICANN rules.
    pub fn verify_file(path: impl AsRef<Path>) -> Result<()> {
        let list = Self::from_file(path)?;
        if list.public.is_empty() {
            return Err(TldError::psl(
                PslErrorKind::InvalidData,
                "Suffix list has no ICANN rules",
            ));
        }
        Ok(())
    }

    /// Add one rule to `section`, with its punycode form when it differs.
    pub fn push(&mut self, section: Section, rule: &str) {
        let rule = rule.trim();
        if rule.is_empty() {
            return;
        }

        let ascii = if rule.is_ascii() {
            None
        } else {
            rule_to_ascii(rule)
        };

        let target = match section {
            Section::Public => &mut self.public,
            Section::Private => &mut self.private,
        };
        target.push(rule.to_string());
        if let Some(ascii) = ascii {
            target.push(ascii);
        }
    }

    /// ICANN rules.
    pub fn public(&self) -> &[String] {
        &self.public
    }

    /// PRIVATE rules.
    pub fn private(&self) -> &[String] {
        &self.private
    }

    /// ICANN rules followed by PRIVATE rules.
    pub fn all(&self) -> impl Iterator<Item = &str> + '_ {
        self.public
            .iter()
            .chain(self.private.iter())
            .map(String::as_str)
    }

    /// Rules the extractor should use.
    pub fn rules(&self, exclude_private: bool) -> Box<dyn Iterator<Item = &str> + '_> {
        if exclude_private {
            Box::new(self.public.iter().map(String::as_str))
        } else {
            Box::new(self.all())
        }
    }

    /// Total number of rules, punycode duplicates included.
    pub fn len(&self) -> usize {
        self.public.len() + self.private.len()
    }

    pub fn is_empty(&self) -> bool {
        self.public.is_empty() && self.private.is_empty()
    }
}

/// Punycode form of a rule, keeping its `*.` or `!` prefix.
fn rule_to_ascii(rule: &str) -> Option<String> {
    let (prefix, body) = if let Some(body) = rule.strip_prefix("*.") {
        ("*.", body)
    } else if let Some(body) = rule.strip_prefix('!') {
        ("!", body)
    } else {
        ("", rule)
    };

    match idna::domain_to_ascii(body) {
        Ok(ascii) if ascii != body => Some(format!("{prefix}{ascii}")),
        Ok(_) => None,
        Err(e) => {
            debug!(rule, error = ?e, "Skipping punycode form of suffix rule");
            None
        }
    }
}
