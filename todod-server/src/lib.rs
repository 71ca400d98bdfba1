//! todod-server: HTTP API for a minimal todo list
//!
//! Routing, input validation, and result-code mapping over a single
//! SQLite-backed `items` table, plus a pass-through proxy for the Render
//! hosting API.

pub mod db;
pub mod http;
pub mod models;
pub mod render;
