use axum::http::{header, HeaderName, HeaderValue};
use std::env;
use tower::layer::util::{Identity, Stack};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

const NOSNIFF: &str = "nosniff";
const DENY: &str = "DENY";
const HSTS_VALUE: &str = "max-age=31536000; includeSubDomains";
const CSP_API_VALUE: &str = "default-src 'none'; frame-ancestors 'none'";
const REFERRER_POLICY_VALUE: &str = "strict-origin-when-cross-origin";

type HeaderLayer = SetResponseHeaderLayer<Option<HeaderValue>>;

/// Stack of layers adding the API's security headers. Headers a handler
/// already set are left alone.
pub type SecurityHeadersLayer = Stack<
    HeaderLayer,
    Stack<HeaderLayer, Stack<HeaderLayer, Stack<HeaderLayer, Stack<HeaderLayer, Identity>>>>,
>;

fn header_layer(name: HeaderName, value: Option<&'static str>) -> HeaderLayer {
    SetResponseHeaderLayer::if_not_present(name, value.map(HeaderValue::from_static))
}

pub fn security_headers_layer(include_hsts: bool) -> SecurityHeadersLayer {
    let hsts = include_hsts.then_some(HSTS_VALUE);

    ServiceBuilder::new()
        .layer(header_layer(header::X_CONTENT_TYPE_OPTIONS, Some(NOSNIFF)))
        .layer(header_layer(header::X_FRAME_OPTIONS, Some(DENY)))
        .layer(header_layer(header::CONTENT_SECURITY_POLICY, Some(CSP_API_VALUE)))
        .layer(header_layer(header::REFERRER_POLICY, Some(REFERRER_POLICY_VALUE)))
        .layer(header_layer(header::STRICT_TRANSPORT_SECURITY, hsts))
        .into_inner()
}

pub fn create_security_headers_layer() -> SecurityHeadersLayer {
    let is_production = env::var("RUST_ENV")
        .map(|v| v.eq_ignore_ascii_case("production"))
        .unwrap_or(false);

    if is_production {
        tracing::info!("Security: HSTS header enabled (production mode)");
    } else {
        tracing::info!("Security: HSTS header disabled (development mode)");
    }

    security_headers_layer(is_production)
}
