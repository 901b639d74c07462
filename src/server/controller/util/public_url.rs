use axum::http::{header, HeaderMap};

use crate::server::error::{short_code::ShortCodeError, Error};

const FORWARDED_PROTO_HEADER: &str = "x-forwarded-proto";

/// Builds the absolute `/s/{code}/` link for a short code
///
/// The host is taken from the request's `Host` header. The scheme is `https` when the
/// deployment sits behind a TLS terminating proxy or the proxy forwarded
/// `X-Forwarded-Proto: https`, otherwise `http`.
pub fn build_short_link(
    headers: &HeaderMap,
    secure_proxy_ssl: bool,
    code: &str,
) -> Result<String, Error> {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .filter(|host| !host.is_empty())
        .ok_or(ShortCodeError::MissingHost)?;

    let forwarded_https = headers
        .get(FORWARDED_PROTO_HEADER)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|proto| proto.eq_ignore_ascii_case("https"));

    let scheme = if secure_proxy_ssl || forwarded_https {
        "https"
    } else {
        "http"
    };

    Ok(format!("{}://{}/s/{}/", scheme, host, code))
}
