//! Subnetting engine logic.
//!
//! This module contains the computation behind a puzzle:
//! - [`sizing`] - host count to prefix and block size math
//! - [`pool`] - assigned block selection from private ranges
//! - [`requirements`] - difficulty-tiered host requirement generation
//! - [`packer`] - VLSM packing with alignment and overflow detection
//! - [`puzzle`] - puzzle generation with the bounded retry loop
//! - [`validator`] - checking user answers against the allocation

mod packer;
mod pool;
mod puzzle;
mod requirements;
mod sizing;
mod validator;

// Re-export public functions
pub use packer::{align_up, pack, total_allocated_from_hosts};
pub use pool::{pick_assigned_block, PRIVATE_POOLS};
pub use puzzle::{
    fit_requirements, generate_puzzle, generate_puzzle_with_attempts, pick_assigned_prefix,
    pick_subnet_count, DEFAULT_MAX_ATTEMPTS,
};
pub use requirements::{
    gen_hosts_easy, gen_hosts_hard, gen_hosts_medium, generate_requirements, max_hosts_for_base,
    MEDIUM_MAX_HOSTS,
};
pub use sizing::{block_size, hosts_to_prefix, usable_hosts};
pub use validator::{check_subnet, normalize_cidr_text, validate_fields, FieldReport};
