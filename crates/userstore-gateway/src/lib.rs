//! userstore gateway library entry.
//!
//! This crate wires config, the shared record store, metrics and the HTTP
//! API into a servable axum `Router`. It is consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
pub mod server;
