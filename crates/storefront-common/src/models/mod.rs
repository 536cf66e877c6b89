//! Core domain models shared across all Storefront crates.
//!
//! These are the "truth" types — what the database stores and the API
//! serializes.

pub mod product;

pub use product::*;
