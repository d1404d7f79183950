//! Cartwright Core - Shared types library.
//!
//! Domain types shared by the server and CLI: newtype IDs, validated
//! `Email`/`Username` strings, and exact-decimal money helpers. No I/O, no
//! database access, no HTTP; the `postgres` feature only adds sqlx trait
//! impls to the ID types.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
