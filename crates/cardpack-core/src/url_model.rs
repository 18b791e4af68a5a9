//! Human-readable archive name from the source URL.

use percent_encoding::percent_decode_str;

/// Used in messages when the URL has no usable last path segment.
const FALLBACK_ARCHIVE_NAME: &str = "the downloaded archive";

/// Extracts the last path segment from a URL, percent-decoded.
///
/// Returns `None` if the URL cannot be parsed or the path is empty/root.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path_segments()?.filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    let decoded = percent_decode_str(segment).decode_utf8_lossy().into_owned();
    Some(decoded)
}

/// Name to show the user when suggesting they inspect the archive by hand,
/// e.g. `"Playing Cards.zip"`.
pub fn archive_display_name(url: &str) -> String {
    filename_from_url_path(url).unwrap_or_else(|| FALLBACK_ARCHIVE_NAME.to_string())
}
