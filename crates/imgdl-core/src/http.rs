//! Blocking HTTP GET over libcurl.
//!
//! Both the search request and the image downloads go through [`get`]. The body
//! is buffered in memory and the status checked before the caller sees it, so
//! nothing is written anywhere for a non-2xx response.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    /// Curl reported an error (bad URL, DNS, connection refused, etc.).
    #[error("GET {url}: {source}")]
    Curl {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// Response had a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    Status { url: String, status: u32 },
}

/// Per-request options.
#[derive(Debug, Clone, Default)]
pub struct GetOptions<'a> {
    /// Extra request headers as (name, value).
    pub headers: Vec<(&'a str, &'a str)>,
    /// Ask for any encoding curl can decode (gzip, br, ...).
    pub accept_compressed: bool,
}

/// Successful (2xx) response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Performs a GET and returns the raw body of a 2xx response.
///
/// Follows redirects. No timeout is set; a stalled server blocks the caller.
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub fn get(url: &str, opts: &GetOptions<'_>) -> Result<HttpResponse, HttpError> {
    let curl_err = |source: curl::Error| HttpError::Curl {
        url: url.to_string(),
        source,
    };

    let mut body: Vec<u8> = Vec::new();
    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(curl_err)?;
    easy.get(true).map_err(curl_err)?;
    easy.follow_location(true).map_err(curl_err)?;
    easy.max_redirections(10).map_err(curl_err)?;
    if opts.accept_compressed {
        easy.accept_encoding("").map_err(curl_err)?;
    }

    let mut list = curl::easy::List::new();
    for (k, v) in &opts.headers {
        list.append(&format!("{}: {}", k.trim(), v.trim()))
            .map_err(curl_err)?;
    }
    if !opts.headers.is_empty() {
        easy.http_headers(list).map_err(curl_err)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(curl_err)?;
        transfer.perform().map_err(curl_err)?;
    }

    let status = easy.response_code().map_err(curl_err)?;
    if !(200..300).contains(&status) {
        return Err(HttpError::Status {
            url: url.to_string(),
            status,
        });
    }
    tracing::debug!(url, status, bytes = body.len(), "GET complete");

    Ok(HttpResponse { status, body })
}
