//! Cartwright server library.
//!
//! Everything except the binary entrypoint lives here so the CLI and
//! integration tests can reuse the pool, services, and repositories.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
