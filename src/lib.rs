//! Smoke-test page for freshly provisioned LAMP hosts.
//!
//! Serves one HTML page that greets the configured site hostname and reports
//! whether the low-privilege web account can open a MySQL connection.

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod services;
