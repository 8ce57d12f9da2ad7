//! The Conversion Kitchen Library
//!
//! Measurement conversion, recipe scaling and ingredient weights.

pub mod catalog;
pub mod kitchen;
pub mod mcp;
pub mod models;
pub mod tools;
