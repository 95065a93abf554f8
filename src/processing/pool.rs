//! Assigned block selection from the RFC 1918 private ranges.

use super::sizing::block_size;
use crate::error::SubnetError;
use crate::models::{Block, MAX_LENGTH};
use rand::seq::SliceRandom;
use rand::Rng;

/// Reserved private pools a base block can be drawn from.
pub const PRIVATE_POOLS: [Block; 3] = [
    // 10.0.0.0/8
    Block {
        addr: 0x0A00_0000,
        prefix: 8,
    },
    // 172.16.0.0/12
    Block {
        addr: 0xAC10_0000,
        prefix: 12,
    },
    // 192.168.0.0/16
    Block {
        addr: 0xC0A8_0000,
        prefix: 16,
    },
];

/// Pick a random aligned block of `target_prefix` inside a private pool.
///
/// Only pools at least as large as the target are candidates. When the pool
/// is larger than the target a uniformly random sub-block is chosen.
pub fn pick_assigned_block<R: Rng>(
    rng: &mut R,
    target_prefix: u8,
) -> Result<Block, SubnetError> {
    if target_prefix > MAX_LENGTH {
        return Err(SubnetError::NoPoolForPrefix(target_prefix));
    }

    let candidates: Vec<&Block> = PRIVATE_POOLS
        .iter()
        .filter(|pool| pool.prefix <= target_prefix)
        .collect();

    let pool = candidates
        .choose(rng)
        .ok_or(SubnetError::NoPoolForPrefix(target_prefix))?;

    if pool.prefix == target_prefix {
        return Ok(**pool);
    }
    let target_size = block_size(target_prefix);
    let blocks_in_pool = pool.size() / target_size;
    let index = rng.gen_range(0..blocks_in_pool);
    // index * target_size < pool size, so the sum stays inside the pool
    let addr = u64::from(pool.addr) + index * target_size;

    log::debug!(
        "pick_assigned_block(/{target_prefix}) pool={pool} index={index}/{blocks_in_pool}"
    );

    Ok(Block::new(addr as u32, target_prefix)?)
}
