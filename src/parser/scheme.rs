/// Split an optional scheme prefix off the input.
///
/// Recognized prefixes are `letter (letter | digit | + | - | .)* :` followed
/// by at least two `/` or `\`, or a bare run of at least two `/` or `\`.
/// The prefix is returned verbatim together with the remainder; anything else
/// yields an empty scheme.
pub fn split_scheme(input: &str) -> (&str, &str) {
    let end = scheme_end(input.as_bytes());
    input.split_at(end)
}

fn scheme_end(bytes: &[u8]) -> usize {
    let mut i = 0;

    if bytes.first().is_some_and(u8::is_ascii_alphabetic) {
        i = 1;
        while i < bytes.len() && is_scheme_char(bytes[i]) {
            i += 1;
        }
        if bytes.get(i) != Some(&b':') {
            return 0;
        }
        i += 1;
    }

    let slashes_start = i;
    while i < bytes.len() && is_slash(bytes[i]) {
        i += 1;
    }

    if i - slashes_start >= 2 {
        i
    } else {
        0
    }
}

#[inline]
fn is_scheme_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}

#[inline]
fn is_slash(b: u8) -> bool {
    b == b'/' || b == b'\\'
}
