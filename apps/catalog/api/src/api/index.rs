use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Landing page of the catalog service
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
