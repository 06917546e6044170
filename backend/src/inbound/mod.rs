//! Inbound adapters that translate external requests into domain calls.

pub mod http;
