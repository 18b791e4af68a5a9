//! Error types for the fetch → extract pipeline.
//!
//! Messages do not repeat their source; print with `{:#}` (anyhow) to get
//! the full chain.

use std::io;
use std::path::PathBuf;

/// Failure of the single archive GET.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Curl reported an error (DNS, connect, TLS, timeout, ...).
    #[error("GET {url} failed")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// Final response (after redirects) had a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Status { url: String, code: u32 },
}

/// Fatal errors for a run. Per-entry problems are not here; they are
/// collected as [`crate::extract::EntryWarning`]s.
#[derive(Debug, thiserror::Error)]
pub enum CardpackError {
    #[error("Error downloading card pack")]
    Network(#[from] FetchError),

    #[error(
        "Downloaded file is not a valid zip archive. It might be an HTML error page; \
         try opening {url} in your browser to confirm the file downloads correctly"
    )]
    InvalidArchive {
        url: String,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("could not create output directory {}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Anything else that stops the run.
    #[error("An unexpected error occurred")]
    Other(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn network_error_chain_names_url_and_code() {
        let err = CardpackError::from(FetchError::Status {
            url: "https://example.com/cards.zip".to_string(),
            code: 404,
        });
        assert_eq!(err.to_string(), "Error downloading card pack");
        let chained = format!("{:#}", anyhow::Error::from(err));
        assert!(chained.contains("https://example.com/cards.zip"));
        assert!(chained.contains("HTTP 404"));
    }

    #[test]
    fn invalid_archive_message_has_html_hint() {
        let err = CardpackError::InvalidArchive {
            url: "https://example.com/cards.zip".to_string(),
            source: zip::result::ZipError::FileNotFound,
        };
        let msg = err.to_string();
        assert!(msg.contains("not a valid zip archive"));
        assert!(msg.contains("HTML error page"));
        assert!(msg.contains("https://example.com/cards.zip in your browser"));
        assert!(err.source().is_some());
    }

    #[test]
    fn output_dir_error_keeps_io_source() {
        let err = CardpackError::OutputDir {
            path: PathBuf::from("img/cards"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "could not create output directory img/cards");
        assert_eq!(err.source().unwrap().to_string(), "denied");
    }

    #[test]
    fn other_error_is_generic_and_keeps_cause() {
        let err = CardpackError::from(anyhow::anyhow!("disk on fire"));
        assert!(matches!(err, CardpackError::Other(_)));
        assert_eq!(err.to_string(), "An unexpected error occurred");
        let chained = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chained, "An unexpected error occurred: disk on fire");
    }
}
