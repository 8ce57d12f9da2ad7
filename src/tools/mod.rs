//! Kitchen Tools module
//!
//! MCP tool implementations for the Conversion Kitchen.

pub mod convert;
pub mod recipes;
pub mod status;
pub mod weights;
