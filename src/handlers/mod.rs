//! HTTP handler modules.
//! Used by: server.

pub mod append;
pub mod health;
pub mod info;
pub mod metrics;
pub mod recent;
