//! Sign-in / sign-up page group.
//!
//! Every page in the group shares one layout and is rendered per request:
//! responses carry `Cache-Control: no-store` so nothing in front of the API
//! serves a prerendered copy. The pages only host the mount point of the
//! external identity provider's widget.

use axum::{
    http::{header::CACHE_CONTROL, HeaderValue},
    response::{Html, Response},
    routing::get,
    Router,
};
use tower::ServiceBuilder;

pub fn router() -> Router {
    Router::new()
        .route("/sign-in", get(sign_in))
        .route("/sign-up", get(sign_up))
        .layer(ServiceBuilder::new().layer(axum::middleware::map_response(no_store)))
}

async fn no_store(mut response: Response) -> Response {
    response
        .headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

async fn sign_in() -> Html<String> {
    layout("Sign in", r#"<div id="auth-widget" data-mode="sign-in"></div>"#)
}

async fn sign_up() -> Html<String> {
    layout("Sign up", r#"<div id="auth-widget" data-mode="sign-up"></div>"#)
}

/// Shared shell: centres the page body.
fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!doctype html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body><main class=\"auth-layout\">{body}</main></body>\n</html>\n"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_wraps_the_page_body() {
        let Html(page) = layout("Sign in", "<p>hello</p>");
        assert!(page.contains("<title>Sign in</title>"));
        assert!(page.contains("<main class=\"auth-layout\"><p>hello</p></main>"));
    }
}
