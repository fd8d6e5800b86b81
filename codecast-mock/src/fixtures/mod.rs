//! Raw source payloads, shaped the way the HTTP API returns them.
//!
//! Payloads are kept as JSON and decoded through `codecast_core::payload` so the
//! mock exercises the same shape checks as a real connector.

pub mod forecast;
pub mod logs;
pub mod stats;
