//! HTTP API exposing the conversion engine and input parser

pub mod handlers;
pub mod models;
pub mod routes;

pub use routes::create_router;
