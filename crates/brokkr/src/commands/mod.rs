//! CLI command implementations

pub mod image;
pub mod push;
pub mod version;
