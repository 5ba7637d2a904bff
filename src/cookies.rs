//! Cookie Reading
//!
//! Parses a raw `document.cookie` string. Used to pick up the CSRF token.

use percent_encoding::percent_decode_str;

/// Cookie carrying Django's anti-forgery token
pub const CSRF_COOKIE: &str = "csrftoken";

/// Value of cookie `name` from a `document.cookie`-style string.
///
/// Entries are `;`-separated and trimmed; the first entry starting with
/// `name=` wins. The value is percent-decoded, falling back to the raw text
/// when it is not valid UTF-8 after decoding.
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    if cookies.is_empty() || name.is_empty() {
        return None;
    }

    cookies
        .split(';')
        .map(str::trim)
        .find_map(|entry| entry.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| {
            percent_decode_str(raw)
                .decode_utf8()
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| raw.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_named_cookie() {
        assert_eq!(read_cookie("csrftoken=abc; sessionid=xyz", "csrftoken").as_deref(), Some("abc"));
        assert_eq!(read_cookie("sessionid=xyz; csrftoken=abc", "csrftoken").as_deref(), Some("abc"));
    }

    #[test]
    fn test_ignores_surrounding_whitespace() {
        assert_eq!(read_cookie("  a=1 ;   csrftoken=tok  ; b=2", "csrftoken").as_deref(), Some("tok"));
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(read_cookie("csrftoken=first; csrftoken=second", "csrftoken").as_deref(), Some("first"));
    }

    #[test]
    fn test_prefix_names_do_not_match() {
        // "csrftoken2" must not satisfy a lookup for "csrftoken"
        assert_eq!(read_cookie("csrftoken2=nope; csrftoken=yes", "csrftoken").as_deref(), Some("yes"));
        assert_eq!(read_cookie("xcsrftoken=nope", "csrftoken"), None);
    }

    #[test]
    fn test_missing_and_empty() {
        assert_eq!(read_cookie("", "csrftoken"), None);
        assert_eq!(read_cookie("sessionid=xyz", "csrftoken"), None);
        assert_eq!(read_cookie("csrftoken=", "csrftoken").as_deref(), Some(""));
    }

    #[test]
    fn test_percent_decoding() {
        assert_eq!(read_cookie("name=hello%20world", "name").as_deref(), Some("hello world"));
        // Invalid UTF-8 after decoding keeps the raw value
        assert_eq!(read_cookie("name=%FF", "name").as_deref(), Some("%FF"));
    }
}
