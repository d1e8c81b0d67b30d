// Smoke-test page endpoint handler implementation

use axum::{extract::State, response::Html};

use crate::handlers::AppState;

/// Handler for GET / and GET /phptest.php
///
/// Always answers 200; a failed connection shows up only in the (truncated) body.
pub async fn smoke_page(State(state): State<AppState>) -> Html<String> {
    let rendered = state.page.render(&state.site_fqdn).await;
    Html(rendered.into_body())
}
