// Business logic service implementations

pub mod health;
pub mod page;
