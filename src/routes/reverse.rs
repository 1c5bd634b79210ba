use std::net::SocketAddr;

use axum::Router;
use axum::extract::ConnectInfo;
use axum::http::HeaderMap;
use axum::response::Html;
use axum::routing::get;

use crate::utils::{reverse_address, select_address};
use crate::views::render_page;

pub fn router() -> Router {
    Router::new().route("/", get(reversed_ip))
}

/// `GET /` — show the caller's address and its dot-reversed form.
///
/// Never fails: any header value or peer address yields a 200 page.
async fn reversed_ip(
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Html<String> {
    let client_ip = select_address(&headers, &peer.ip().to_string());
    tracing::info!(%client_ip, "Request received");

    let reversed = reverse_address(&client_ip);

    Html(render_page(&client_ip, &reversed))
}
