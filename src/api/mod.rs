//! HTTP API Module
//! Mission: Translate HTTP requests into workflow calls and outcomes into responses

pub mod handlers;
pub mod models;
pub mod routes;
pub mod validation;

pub use handlers::AppState;
pub use routes::router;
