// Router construction shared by the binary and tests

use axum::routing::{get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{health_check, smoke_page, AppState};

/// Builds the HTTP router for the smoke-test page
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(smoke_page))
        .route("/phptest.php", get(smoke_page))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{ConnectionHandle, ConnectionParams, Connector, DbError};
    use crate::handlers::PageState;
    use crate::services::page::HealthPage;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct FixedConnector(Result<(), String>);

    #[async_trait]
    impl Connector for FixedConnector {
        async fn connect(&self, _params: &ConnectionParams) -> Result<ConnectionHandle, DbError> {
            match &self.0 {
                Ok(()) => Ok(ConnectionHandle::new(())),
                Err(message) => Err(DbError::ConnectionFailed(message.clone())),
            }
        }
    }

    fn app(outcome: Result<(), String>, site: &str) -> Router {
        let page = HealthPage::new(ConnectionParams::default(), Arc::new(FixedConnector(outcome)));
        router(Arc::new(PageState::new(page, site)))
    }

    async fn get_page(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn page_served_as_html_when_connected() {
        let (status, content_type, body) = get_page(app(Ok(()), "example.com"), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/html"));
        assert!(body.contains("Welcome to the Site example.com!"));
        assert!(body.contains("Connected successfully"));
        assert!(body.ends_with("</html>\n"));
    }

    #[tokio::test]
    async fn failed_connection_still_answers_ok_with_truncated_body() {
        let outcome = Err("Unknown MySQL server host 'localhost'".to_string());
        let (status, _, body) = get_page(app(outcome, "staging.internal"), "/phptest.php").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Welcome to the Site staging.internal!"));
        assert!(body.ends_with("Connection failed: Unknown MySQL server host 'localhost'</p>"));
        assert!(!body.contains("</html>"));
    }

    #[tokio::test]
    async fn health_does_not_depend_on_database() {
        let (status, content_type, body) =
            get_page(app(Err("down".to_string()), "example.com"), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("application/json"));
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert!(json["uptime_secs"].is_u64());
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let (status, _, _) = get_page(app(Ok(()), "example.com"), "/index.php").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
