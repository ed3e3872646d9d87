use std::{path::Path as FsPath, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, get_service},
    Router,
};
use maud::Markup;
use tower_http::services::{ServeDir, ServeFile};
use tracing::debug;

use crate::content_loader::normalize_slug;
use crate::hot_reload::ws_handler;
use crate::pages::{blog_post, not_found, render_index};
use crate::state::{AppState, RouterState};

const HOT_RELOAD_SCRIPT: &str = r#"
<script>
    const socket = new WebSocket("ws://" + window.location.host + "/ws");
    socket.onmessage = (event) => {
        if (event.data === "reload") {
            window.location.reload();
        }
    };
</script>
"#;

fn finish(page: Markup, is_development: bool) -> Html<String> {
    let mut page = page.into_string();
    if is_development {
        page = page.replace("</body>", &format!("{}</body>", HOT_RELOAD_SCRIPT));
    }
    Html(page)
}

async fn homepage(State(state): State<Arc<AppState>>) -> Html<String> {
    let content = state.content.read().await;
    let location = content.site.root_path();
    finish(render_index(&*content, &location), state.is_development)
}

/// Resolves any other path against the site's path prefix: the prefix root
/// is the index, anything below it is looked up as a post slug.
async fn post_page(Path(path): Path<String>, State(state): State<Arc<AppState>>) -> Response {
    let content = state.content.read().await;
    let requested = format!("/{path}");

    let route = match requested.strip_prefix(content.site.path_prefix.as_str()) {
        Some(route) if route.is_empty() || route.starts_with('/') => route,
        _ => {
            debug!(path = %requested, "Path outside the site prefix");
            let page = not_found(&content.site, &requested);
            return (StatusCode::NOT_FOUND, finish(page, state.is_development)).into_response();
        }
    };

    let slug = normalize_slug(route);
    if slug == "/" {
        let location = content.site.root_path();
        return finish(render_index(&*content, &location), state.is_development).into_response();
    }

    match content.find_post(&slug) {
        Some((index, post)) => {
            let older = content.posts.get(index + 1).map(|p| &p.summary);
            let newer = index
                .checked_sub(1)
                .and_then(|i| content.posts.get(i))
                .map(|p| &p.summary);
            let page = blog_post(&content.site, post, older, newer);
            finish(page, state.is_development).into_response()
        }
        None => {
            debug!(%slug, "No post for requested path");
            let page = not_found(&content.site, &requested);
            (StatusCode::NOT_FOUND, finish(page, state.is_development)).into_response()
        }
    }
}

pub fn router(router_state: RouterState, content_dir: &FsPath) -> Router {
    let static_root = content_dir.join("static");
    let static_dir = get_service(ServeDir::new(&static_root));
    let favicon_ico = get_service(ServeFile::new(static_root.join("favicon.ico")));
    let favicon_png = get_service(ServeFile::new(static_root.join("favicon.png")));

    Router::new()
        .route("/", get(homepage))
        .route("/{*path}", get(post_page))
        .nest_service("/static", static_dir)
        .route_service("/favicon.ico", favicon_ico)
        .route_service("/favicon.png", favicon_png)
        .route("/ws", get(ws_handler))
        .with_state(router_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{fixtures, Content};
    use chrono::NaiveDate;
    use axum::body::Body;
    use axum::http::Request;
    use tokio::sync::broadcast;
    use tower::ServiceExt;

    fn app(is_development: bool) -> Router {
        app_with(fixtures::content(), is_development)
    }

    fn app_with(content: Content, is_development: bool) -> Router {
        let state = Arc::new(AppState::new(content, "content".into(), is_development));
        let (tx, _rx) = broadcast::channel(1);
        router(
            RouterState {
                app_state: state,
                broadcaster: tx,
            },
            FsPath::new("content"),
        )
    }

    async fn get_page(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn homepage_lists_posts_in_order() {
        let (status, body) = get_page(app(false), "/").await;
        assert_eq!(status, StatusCode::OK);
        let first = body.find("Bug X").unwrap();
        let second = body.find("Tip Y").unwrap();
        assert!(first < second);
        assert!(!body.contains("new WebSocket"));
    }

    #[tokio::test]
    async fn post_route_with_and_without_trailing_slash() {
        for uri in ["/bug-x/", "/bug-x"] {
            let (status, body) = get_page(app(false), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(body.contains(r#""@type":"Article""#));
        }
    }

    #[tokio::test]
    async fn unknown_post_is_404() {
        let (status, body) = get_page(app(false), "/nope/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("404: Not Found"));
    }

    #[tokio::test]
    async fn nested_slug_is_routed() {
        let mut content = fixtures::content();
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        content.posts.push(fixtures::post("/2020/z/", "Nested Z", date));

        let (_, index) = get_page(app_with(content.clone(), false), "/").await;
        assert!(index.contains(r#"href="/2020/z/""#));
        for uri in ["/2020/z/", "/2020/z"] {
            let (status, body) = get_page(app_with(content.clone(), false), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(body.contains("Body of Nested Z"));
        }
    }

    #[tokio::test]
    async fn path_prefix_is_stripped_before_lookup() {
        let mut content = fixtures::content();
        content.site.path_prefix = "/blog".to_string();

        let (_, index) = get_page(app_with(content.clone(), false), "/").await;
        assert!(index.contains(r#"href="/blog/bug-x/""#));

        let (status, body) = get_page(app_with(content.clone(), false), "/blog/bug-x/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Body of Bug X"));

        for uri in ["/blog/", "/blog"] {
            let (status, body) = get_page(app_with(content.clone(), false), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(body.contains("Tip Y"));
        }

        for uri in ["/bug-x/", "/blogger/bug-x/"] {
            let (status, _) = get_page(app_with(content.clone(), false), uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[tokio::test]
    async fn development_injects_reload_script() {
        let (_, body) = get_page(app(true), "/").await;
        assert!(body.contains("new WebSocket"));
        assert!(body.trim_end().ends_with("</body></html>"));
    }
}
