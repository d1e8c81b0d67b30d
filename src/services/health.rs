// Liveness check for the page server process itself

use std::time::Instant;

/// Reports whether the server process is up. Never touches the database.
#[derive(Debug, Clone)]
pub struct HealthChecker {
    started_at: Instant,
}

impl HealthChecker {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    pub fn check(&self) -> bool {
        true
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

impl Default for HealthChecker {
    fn default() -> Self {
        Self::new()
    }
}
