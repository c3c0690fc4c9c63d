//! HTTP surface for the MediaLink proxy
//!
//! Exposes the streaming proxy (`GET|HEAD /{alias}`), the alias creation
//! endpoint, and the cookie-gated dashboard.

pub mod http;
