//! Authority parsing.
//!
//! The input is consumed left to right by a chain of scanners, each one
//! returning the piece it recognized and the remainder:
//!
//! ```text
//! https://user:pw@www.example.co.uk:8080/a/b?q=1
//! \______/\_____/ \_______________/\___/\______/
//!  scheme userinfo       host       port  path
//! ```
//!
//! Every scanner works on byte offsets of ASCII delimiters, so the pieces are
//! always slices of the original string.

mod authority;
mod host;
mod scheme;
mod userinfo;

pub use authority::{is_ipv6_literal, split_authority, split_port_and_path, Authority, PortAndPath};
pub use host::{is_ipv4_literal, is_label_separator, to_ascii, LabelSequence, LABEL_SEPARATORS};
pub use scheme::split_scheme;
pub use userinfo::split_userinfo;

/// Characters stripped from both ends of the raw input.
pub const STRIP_CHARS: [char; 14] = [
    ' ', '\t', '\n', '\u{000b}', '\u{000c}', '\r', '\u{feff}', '\u{200b}', '\u{200c}',
    '\u{200d}', '\u{00a0}', '\u{1680}', '\u{0085}', '\u{0000}',
];

/// Trim whitespace and invisible characters from both ends.
pub fn strip_input(input: &str) -> &str {
    input.trim_matches(|c| STRIP_CHARS.contains(&c))
}

/// Characters that end the host part when no port is present.
#[inline]
pub(crate) fn is_path_delimiter(b: u8) -> bool {
    matches!(b, b'/' | b'\\' | b'?' | b'#')
}
