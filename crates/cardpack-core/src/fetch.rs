//! Single blocking HTTP GET that buffers the whole response body.
//!
//! Uses the curl crate (libcurl). The card pack is a few megabytes, so the
//! body is kept in memory and handed to the extractor as a byte slice.

use crate::error::FetchError;
use std::time::Duration;

/// Client settings for the archive request.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub user_agent: String,
    /// None leaves libcurl's default.
    pub connect_timeout: Option<Duration>,
    /// None means no overall limit.
    pub timeout: Option<Duration>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            user_agent: crate::BROWSER_USER_AGENT.to_string(),
            connect_timeout: None,
            timeout: None,
        }
    }
}

/// Downloads `url` and returns the response body.
///
/// Follows redirects. Any non-2xx final status is an error; the body of an
/// error response is discarded.
pub fn fetch_archive(url: &str, opts: &HttpOptions) -> Result<Vec<u8>, FetchError> {
    let transport = |source: curl::Error| FetchError::Transport {
        url: url.to_string(),
        source,
    };

    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(transport)?;
    easy.useragent(&opts.user_agent).map_err(transport)?;
    easy.follow_location(true).map_err(transport)?;
    easy.max_redirections(10).map_err(transport)?;
    if let Some(d) = opts.connect_timeout {
        easy.connect_timeout(d).map_err(transport)?;
    }
    if let Some(d) = opts.timeout {
        easy.timeout(d).map_err(transport)?;
    }

    tracing::debug!(url, user_agent = %opts.user_agent, "GET archive");

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(transport)?;
        transfer.perform().map_err(transport)?;
    }

    let code = easy.response_code().map_err(transport)?;
    if !(200..300).contains(&code) {
        tracing::warn!(url, code, "archive request rejected");
        return Err(FetchError::Status {
            url: url.to_string(),
            code,
        });
    }

    tracing::info!(url, code, bytes = body.len(), "archive downloaded");
    Ok(body)
}
