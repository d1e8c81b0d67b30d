// Database Module
// Connection parameters and the single connection attempt made per page render

pub mod connector;
pub mod error;

pub use connector::{ConnectionHandle, ConnectionParams, Connector, MySqlConnector};
pub use error::DbError;
