use std::net::Ipv6Addr;

use super::host::{is_label_separator, LABEL_SEPARATORS};
use super::is_path_delimiter;
use crate::error::HostError;

/// Host located by [`split_authority`] and the region that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Authority<'a> {
    /// Host text, without brackets for an IPv6 literal
    pub host: &'a str,
    /// Whether the host was written in brackets
    pub ipv6: bool,
    /// Port and path region, starting at `:` or a path delimiter
    pub after_host: &'a str,
}

/// Locate the host in `netloc` (the input after scheme and userinfo).
///
/// `[` is only accepted as the first character and must be closed. A stray
/// `]` or an unclosed `[` is a [`HostError::MalformedBracket`].
pub fn split_authority(netloc: &str) -> Result<Authority<'_>, HostError> {
    let bytes = netloc.as_bytes();
    let mut open = false;
    let mut close = None;
    let mut host_end = None;

    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'[' if i == 0 => open = true,
            b'[' => return Err(HostError::MalformedBracket),
            b']' if !open || close.is_some() => return Err(HostError::MalformedBracket),
            b']' => close = Some(i),
            // a path delimiter only ends the host outside an open bracket
            b if close.is_some() && is_path_delimiter(b) => break,
            b if !open && (b == b':' || is_path_delimiter(b)) => {
                host_end = Some(i);
                break;
            }
            _ => {}
        }
    }

    if open {
        let Some(close) = close else {
            return Err(HostError::MalformedBracket);
        };
        let after_host = &netloc[close + 1..];
        return Ok(Authority {
            host: &netloc[1..close],
            ipv6: true,
            after_host,
        });
    }

    let end = host_end.unwrap_or(netloc.len());
    Ok(Authority {
        host: &netloc[..end],
        ipv6: false,
        after_host: &netloc[end..],
    })
}

/// Whether `candidate` is a valid IPv6 address. Any label separator variant
/// is accepted in an embedded dotted quad.
pub fn is_ipv6_literal(candidate: &str) -> bool {
    if candidate.contains(&LABEL_SEPARATORS[1..]) {
        let normalized: String = candidate
            .chars()
            .map(|c| if is_label_separator(c) { '.' } else { c })
            .collect();
        return normalized.parse::<Ipv6Addr>().is_ok();
    }
    candidate.parse::<Ipv6Addr>().is_ok()
}

/// Port and path found after the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PortAndPath<'a> {
    pub port: &'a str,
    pub path: &'a str,
}

/// Split the region following the host into port and path.
///
/// An invalid port is dropped; the path is still returned.
pub fn split_port_and_path(after_host: &str) -> PortAndPath<'_> {
    let delimiter = after_host.bytes().position(is_path_delimiter);
    let path = delimiter.map_or("", |i| &after_host[i..]);

    let port = match after_host.strip_prefix(':') {
        Some(rest) => {
            let candidate = &rest[..delimiter.map_or(rest.len(), |i| i - 1)];
            if is_valid_port(candidate) {
                candidate
            } else {
                ""
            }
        }
        None => "",
    };

    PortAndPath { port, path }
}

fn is_valid_port(port: &str) -> bool {
    !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) && port.parse::<u16>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(netloc: &str) -> (&str, bool, &str) {
        let authority = split_authority(netloc).unwrap();
        (authority.host, authority.ipv6, authority.after_host)
    }

    #[test]
    fn test_plain_host() {
        assert_eq!(host("example.com"), ("example.com", false, ""));
        assert_eq!(host("example.com:8080/a"), ("example.com", false, ":8080/a"));
        assert_eq!(host("example.com/a:b"), ("example.com", false, "/a:b"));
        assert_eq!(host("example.com\\a"), ("example.com", false, "\\a"));
        assert_eq!(host("example.com?q"), ("example.com", false, "?q"));
        assert_eq!(host("example.com#f"), ("example.com", false, "#f"));
        assert_eq!(host(""), ("", false, ""));
    }

    #[test]
    fn test_bracketed_host() {
        assert_eq!(host("[::1]"), ("::1", true, ""));
        assert_eq!(host("[::]:5000"), ("::", true, ":5000"));
        assert_eq!(host("[aBcD:ef01::]/path"), ("aBcD:ef01::", true, "/path"));
        assert_eq!(host("[]"), ("", true, ""));
    }

    #[test]
    fn test_text_after_closing_bracket_kept() {
        // only delimiters are interpreted after the pair
        assert_eq!(host("[::1]junk:80"), ("::1", true, "junk:80"));
        assert_eq!(host("[::1]/[x]"), ("::1", true, "/[x]"));
        assert_eq!(host("example.com/[x]"), ("example.com", false, "/[x]"));
    }

    #[test]
    fn test_malformed_brackets() {
        for netloc in ["[", "[::1", "a[::1]", "]", "a]b:80", "[::1[]", "[::1]]", "[::1]x[/"] {
            assert_eq!(
                split_authority(netloc),
                Err(HostError::MalformedBracket),
                "netloc {netloc:?}"
            );
        }
    }

    #[test]
    fn test_ipv6_literals() {
        assert!(is_ipv6_literal("::"));
        assert!(is_ipv6_literal("::1"));
        assert!(is_ipv6_literal("2001:db8::ff00:42:8329"));
        assert!(is_ipv6_literal("aBcD:ef01:2345:6789:aBcD:ef01:2345:6789"));
        assert!(is_ipv6_literal("::ffff:192.168.1.1"));
        assert!(is_ipv6_literal("::ffff:192\u{3002}168\u{ff0e}1\u{ff61}1"));
    }

    #[test]
    fn test_invalid_ipv6_literals() {
        assert!(!is_ipv6_literal(""));
        assert!(!is_ipv6_literal("aBcD:ef01:2345:6789:aBcD:ef01:2345:6789:"));
        assert!(!is_ipv6_literal("127.0.0.1"));
        assert!(!is_ipv6_literal("::g"));
        assert!(!is_ipv6_literal("1:2:3:4:5:6:7:8:9"));
    }

    #[test]
    fn test_port_and_path() {
        assert_eq!(
            split_port_and_path(":8080/a/b"),
            PortAndPath {
                port: "8080",
                path: "/a/b"
            }
        );
        assert_eq!(split_port_and_path(":5000").port, "5000");
        assert_eq!(split_port_and_path("/p?q#f").path, "/p?q#f");
        assert_eq!(split_port_and_path(""), PortAndPath::default());
        assert_eq!(split_port_and_path(":0").port, "0");
        assert_eq!(split_port_and_path(":65535").port, "65535");
    }

    #[test]
    fn test_invalid_port_keeps_path() {
        assert_eq!(
            split_port_and_path(":65536/a"),
            PortAndPath { port: "", path: "/a" }
        );
        assert_eq!(split_port_and_path(":8a/b").path, "/b");
        assert_eq!(split_port_and_path(":8a/b").port, "");
        assert_eq!(split_port_and_path(":+80").port, "");
        assert_eq!(split_port_and_path(":/x"), PortAndPath { port: "", path: "/x" });
        assert_eq!(split_port_and_path(":").port, "");
    }

    #[test]
    fn test_region_not_starting_with_colon() {
        assert_eq!(
            split_port_and_path("junk:80/p"),
            PortAndPath { port: "", path: "/p" }
        );
    }
}
