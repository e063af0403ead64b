//! # Command Implementations
//!
//! Each submodule handles one CLI command (train, embed, info).

pub mod embed;
pub mod info;
pub mod train;
