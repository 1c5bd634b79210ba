use axum::http::HeaderMap;

/// Header appended by reverse proxies; the left-most entry is the original client.
pub const FORWARDED_FOR: &str = "x-forwarded-for";

/// Pick the address to report for a request.
///
/// Takes the first comma-separated entry of `X-Forwarded-For` (trimmed) when the
/// header is present, otherwise the transport peer address verbatim.
#[must_use]
pub fn select_address(headers: &HeaderMap, peer: &str) -> String {
    headers.get(FORWARDED_FOR).map_or_else(
        || peer.to_string(),
        |value| {
            let value = String::from_utf8_lossy(value.as_bytes());
            value
                .split(',')
                .next()
                .map(str::trim)
                .unwrap_or_default()
                .to_string()
        },
    )
}

/// Reverse the `.`-separated parts of an address, e.g. `192.168.1.1` -> `1.1.168.192`.
///
/// No validation is applied; any string is accepted.
#[must_use]
pub fn reverse_address(address: &str) -> String {
    address.split('.').rev().collect::<Vec<_>>().join(".")
}
