//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a URL path (separators stay intact)
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}');

/// Join a base URL with a site-relative path
///
/// # Examples
/// ```ignore
/// join_url("https://example.com", "a.html") // -> "https://example.com/a.html"
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", base)
    } else {
        format!("{}/{}", base, encode_path(path))
    }
}

/// Percent-encode a URL path, leaving `/` separators alone
pub fn encode_path(path: &str) -> String {
    utf8_percent_encode(path, PATH).to_string()
}
