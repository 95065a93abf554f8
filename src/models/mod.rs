//! Domain models for the subnetting engine.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Block`] - aligned IPv4 block with CIDR notation support, plus the
//!   address parsing and formatting helpers
//! - [`SubnetInfo`] - an allocated subnet with its derived addresses
//! - [`Puzzle`], [`Difficulty`] and [`FieldSet`] - quiz state and answers

mod ipv4;
mod puzzle;
mod subnet;

// Re-export public types
pub use ipv4::{
    cut_addr, format_address, format_address_binary, mask_from_prefix, normalize_address_text,
    parse_address, Address, Block, MAX_LENGTH,
};
pub use puzzle::{Difficulty, FieldSet, Puzzle};
pub use subnet::SubnetInfo;
