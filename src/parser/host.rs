use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::HostError;

/// Label separators: full stop, ideographic full stop, fullwidth full stop
/// and halfwidth ideographic full stop.
pub const LABEL_SEPARATORS: [char; 4] = ['\u{002e}', '\u{3002}', '\u{ff0e}', '\u{ff61}'];

/// Longest label allowed after IDNA encoding, in octets.
const MAX_LABEL_LEN: usize = 63;

static IPV4_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])[.\x{3002}\x{ff0e}\x{ff61}]){3}(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])$",
    )
    .expect("Invalid IPv4 regex")
});

#[inline]
pub fn is_label_separator(c: char) -> bool {
    LABEL_SEPARATORS.contains(&c)
}

/// Whether `host` is a dotted-quad IPv4 literal (any separator variant,
/// no leading zeros).
pub fn is_ipv4_literal(host: &str) -> bool {
    IPV4_REGEX.is_match(host)
}

#[derive(Debug, Clone, Copy)]
struct Token {
    start: usize,
    end: usize,
}

/// A host split into alternating label and separator tokens.
///
/// Labels sit at even indices and separators at odd ones, so the sequence
/// always has an odd, non-zero length: `"a.b"` is `[a, ., b]` and `""` is a
/// single empty label. Tokens are byte ranges into the host, which keeps the
/// original separator characters available for slicing.
#[derive(Debug, Clone)]
pub struct LabelSequence<'a> {
    host: &'a str,
    tokens: Vec<Token>,
}

impl<'a> LabelSequence<'a> {
    pub fn new(host: &'a str) -> Self {
        let mut tokens = Vec::new();
        let mut label_start = 0;

        for (i, c) in host.char_indices() {
            if is_label_separator(c) {
                tokens.push(Token {
                    start: label_start,
                    end: i,
                });
                label_start = i + c.len_utf8();
                tokens.push(Token {
                    start: i,
                    end: label_start,
                });
            }
        }
        tokens.push(Token {
            start: label_start,
            end: host.len(),
        });

        Self { host, tokens }
    }

    /// Number of tokens, labels and separators together.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Never true: an empty host still holds one empty label.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn is_separator(&self, idx: usize) -> bool {
        idx % 2 == 1
    }

    /// Text of the token at `idx`.
    #[inline]
    pub fn token(&self, idx: usize) -> &'a str {
        let token = self.tokens[idx];
        &self.host[token.start..token.end]
    }

    /// Host substring covering tokens `from..to`, empty when the range is.
    pub fn span(&self, from: usize, to: usize) -> &'a str {
        if from >= to {
            return "";
        }
        &self.host[self.tokens[from].start..self.tokens[to - 1].end]
    }

    /// Iterate over the labels only.
    pub fn labels(&self) -> impl Iterator<Item = &'a str> + '_ {
        (0..self.len()).step_by(2).map(|idx| self.token(idx))
    }

    pub fn host(&self) -> &'a str {
        self.host
    }
}

/// IDNA-encode a host label by label.
///
/// ASCII labels are kept as they are, case included. Non-ASCII labels go
/// through IDNA. Labels are rejoined with `.` whatever separator the input
/// used, and a single trailing separator survives as `.`.
pub fn to_ascii(host: &str) -> Result<String, HostError> {
    if host.is_empty() {
        return Ok(String::new());
    }

    let mut labels: Vec<&str> = host.split(is_label_separator).collect();
    let trailing_dot = labels.len() > 1 && labels.last().is_some_and(|l| l.is_empty());
    if trailing_dot {
        labels.pop();
    }

    let mut encoded = Vec::with_capacity(labels.len());
    for label in labels {
        encoded.push(label_to_ascii(label)?);
    }

    let mut out = encoded.join(".");
    if trailing_dot {
        out.push('.');
    }
    Ok(out)
}

fn label_to_ascii(label: &str) -> Result<String, HostError> {
    if label.is_ascii() {
        return if (1..=MAX_LABEL_LEN).contains(&label.len()) {
            Ok(label.to_string())
        } else {
            Err(HostError::InvalidIdnaHost)
        };
    }

    let encoded = idna::domain_to_ascii(label).map_err(|_| HostError::InvalidIdnaHost)?;
    // mapping may introduce a full stop (e.g. U+2488) or empty the label
    if encoded.is_empty() || encoded.len() > MAX_LABEL_LEN || encoded.contains('.') {
        return Err(HostError::InvalidIdnaHost);
    }
    Ok(encoded)
}
