use once_cell::sync::Lazy;
use regex::Regex;

static URL_SCHEME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").expect("Invalid regex pattern for URL schemes")
});

/// Whether `location` already carries a URL scheme
pub fn has_url_scheme(location: &str) -> bool {
    URL_SCHEME_REGEX.is_match(location)
}

/// Turn a file location into the href written to `mets:FLocat`
///
/// URLs pass through unchanged; a bare storage path is joined onto
/// `file_uri_prefix` with exactly one separator.
pub fn normalize_location(location: &str, file_uri_prefix: &str) -> String {
    if has_url_scheme(location) {
        return location.to_string();
    }

    let path = location.trim_start_matches('/');
    if file_uri_prefix.ends_with('/') {
        format!("{}{}", file_uri_prefix, path)
    } else {
        format!("{}/{}", file_uri_prefix, path)
    }
}
