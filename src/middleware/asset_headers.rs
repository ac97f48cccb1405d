use axum::{
    extract::Request,
    http::header::{self, HeaderValue},
    middleware::Next,
    response::Response,
};

/// Extensions treated as immutable build artifacts.
const LONG_LIVED_EXTENSIONS: &[&str] = &[
    "css", "js", "mjs", "png", "jpg", "jpeg", "gif", "svg", "webp", "ico", "woff", "woff2", "ttf",
    "otf",
];

const LONG_LIVED: &str = "public, max-age=31536000";
const SHORT_LIVED: &str = "max-age=3600";

/// Decorates successful static responses with caching and security headers.
/// Misses and errors pass through unmodified.
pub async fn asset_headers_middleware(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();

    let mut response = next.run(req).await;

    if !response.status().is_success() {
        return response;
    }

    let headers = response.headers_mut();
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(cache_control_for(&path)),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::X_XSS_PROTECTION,
        HeaderValue::from_static("1; mode=block"),
    );

    response
}

/// A year for style/script/binary assets, an hour for markup and anything
/// without a recognized extension. Only the last path segment counts.
fn cache_control_for(path: &str) -> &'static str {
    let name = path.rsplit('/').next().unwrap_or(path);
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some(ext) if LONG_LIVED_EXTENSIONS.contains(&ext) => LONG_LIVED,
        _ => SHORT_LIVED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_script_and_image_assets_cache_long() {
        assert_eq!(cache_control_for("/styles.css"), LONG_LIVED);
        assert_eq!(cache_control_for("/app.js"), LONG_LIVED);
        assert_eq!(cache_control_for("/logo.png"), LONG_LIVED);
        assert_eq!(cache_control_for("/fonts/body.woff2"), LONG_LIVED);
    }

    #[test]
    fn test_markup_and_unknown_extensions_cache_short() {
        assert_eq!(cache_control_for("/index.html"), SHORT_LIVED);
        assert_eq!(cache_control_for("/"), SHORT_LIVED);
        assert_eq!(cache_control_for("/about"), SHORT_LIVED);
    }

    #[test]
    fn test_only_last_segment_is_classified() {
        assert_eq!(cache_control_for("/img/LOGO.PNG"), LONG_LIVED);
        assert_eq!(cache_control_for("/v1.2/readme"), SHORT_LIVED);
    }
}
