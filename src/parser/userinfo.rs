/// Split an optional `user[:password]@` prefix off the authority.
///
/// The last `@` before any of `/ \ ? # [ ]` ends the userinfo. Userinfo may
/// itself contain `@` and `:`.
pub fn split_userinfo(netloc: &str) -> (&str, &str) {
    let mut at = None;
    for (i, b) in netloc.bytes().enumerate() {
        match b {
            b'/' | b'\\' | b'?' | b'#' | b'[' | b']' => break,
            b'@' => at = Some(i),
            _ => {}
        }
    }

    match at {
        Some(i) => (&netloc[..i], &netloc[i + 1..]),
        None => ("", netloc),
    }
}
