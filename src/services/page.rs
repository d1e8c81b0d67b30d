// Smoke-test page renderer: welcome banner plus one database connection attempt

use std::sync::Arc;

use crate::db::{ConnectionParams, Connector, DbError};

pub const PAGE_TITLE: &str = "PHP Test";
pub const CONNECTED_MESSAGE: &str = "Connected successfully";
pub const FAILED_PREFIX: &str = "Connection failed: ";

const DOCUMENT_HEAD: &str = "<html>\n<head>\n    <title>PHP Test</title>\n</head>\n    <body>\n";
const DOCUMENT_TAIL: &str = "</body>\n</html>\n";

/// Which branch a render ended in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Connected,
    Failed(DbError),
}

/// Result of one render. On failure the document stops right after the
/// failure paragraph and is never closed.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    body: String,
    outcome: RenderOutcome,
}

impl RenderedPage {
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_body(self) -> String {
        self.body
    }

    pub fn outcome(&self) -> &RenderOutcome {
        &self.outcome
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.outcome, RenderOutcome::Connected)
    }

    /// True when the closing body/html tags were emitted
    pub fn is_complete(&self) -> bool {
        self.body.ends_with(DOCUMENT_TAIL)
    }
}

/// Renders the smoke-test page against a fixed set of connection parameters
#[derive(Clone)]
pub struct HealthPage {
    params: ConnectionParams,
    connector: Arc<dyn Connector>,
}

impl HealthPage {
    pub fn new(params: ConnectionParams, connector: Arc<dyn Connector>) -> Self {
        Self { params, connector }
    }

    pub fn params(&self) -> &ConnectionParams {
        &self.params
    }

    /// Renders the page for `hostname`, which is inserted verbatim.
    ///
    /// Exactly one connection attempt is made per call. The handle is dropped
    /// before returning; nothing is queried through it.
    pub async fn render(&self, hostname: &str) -> RenderedPage {
        let mut body = String::with_capacity(DOCUMENT_HEAD.len() + DOCUMENT_TAIL.len() + 128);
        body.push_str(DOCUMENT_HEAD);
        body.push_str(&format!("    <p>Welcome to the Site {}!</p>\n", hostname));

        let outcome = match self.connector.connect(&self.params).await {
            Ok(_handle) => {
                tracing::info!(
                    host = %self.params.host,
                    user = %self.params.username,
                    "Database connection established"
                );
                body.push_str(&format!("    <p>{}</p>\n", CONNECTED_MESSAGE));
                body.push_str(DOCUMENT_TAIL);
                RenderOutcome::Connected
            }
            Err(err) => {
                tracing::warn!(
                    host = %self.params.host,
                    user = %self.params.username,
                    error = %err,
                    "Database connection failed"
                );
                body.push_str(&format!("    <p>{}{}</p>", FAILED_PREFIX, err));
                RenderOutcome::Failed(err)
            }
        };

        RenderedPage { body, outcome }
    }
}
