// Handlers Module
// This module contains the HTTP endpoint handlers

pub mod health;
pub mod page;

use std::sync::Arc;

use crate::services::health::HealthChecker;
use crate::services::page::HealthPage;

pub use health::health_check;
pub use page::smoke_page;

/// Shared, read-only state for every request
pub struct PageState {
    pub page: HealthPage,
    pub site_fqdn: String,
    pub health: HealthChecker,
}

impl PageState {
    pub fn new(page: HealthPage, site_fqdn: impl Into<String>) -> Self {
        Self {
            page,
            site_fqdn: site_fqdn.into(),
            health: HealthChecker::new(),
        }
    }
}

// Type alias for the application state
pub type AppState = Arc<PageState>;
