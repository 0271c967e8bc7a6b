//! HTTP API: server, routing, and request/response mapping.
//!
//! The library target exists so integration tests can build the exact router
//! that production runs, bind it to an ephemeral port, and drive it over HTTP.

pub mod app;
