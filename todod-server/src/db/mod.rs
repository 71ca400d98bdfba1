//! Database layer - connection pool, schema preparation, item repository
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections); each request checks out exactly
//!   one connection and holds it for the life of the request
//! - Every operation is a single parameterized statement - no transactions
//!   span multiple statements
//! - Existence is derived from affected-row counts, never from a separate
//!   check-then-act query

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::{DbError, ItemRepo};
