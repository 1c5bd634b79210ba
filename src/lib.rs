//! IP Reverser - shows a caller's IP address next to its dot-reversed form
//!
//! This crate provides:
//! - Client address selection from `X-Forwarded-For` or the peer address
//! - Dot-wise address reversal
//! - A single HTML page plus a JSON health probe, served with Axum

pub mod config;
pub mod routes;
pub mod server;
pub mod utils;
pub mod views;
