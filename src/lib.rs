//! VLSM subnetting quiz engine.
//!
//! Generates IPv4 subnetting puzzles (an assigned private block plus host
//! requirements), computes the expected VLSM allocation and checks user
//! answers given in dotted-decimal or dotted-binary notation.
//!
//! ```
//! use rand::SeedableRng;
//! use vlsm_quiz::{check_subnet, generate_puzzle, Difficulty, FieldSet};
//!
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
//! let puzzle = generate_puzzle(&mut rng, Difficulty::Easy).unwrap();
//! assert_eq!(puzzle.allocations.len(), 1);
//! assert!(!check_subnet(&puzzle.allocations[0], &FieldSet::default()));
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod session;

pub use error::{FormatError, SubnetError};
pub use models::{
    format_address, parse_address, Block, Difficulty, FieldSet, Puzzle, SubnetInfo,
};
pub use processing::{check_subnet, generate_puzzle, pack};
pub use session::{RoundResult, Session};

/// Pack host requirements into `base`, largest first.
///
/// Sorts a copy of `hosts` in descending order before packing, the way
/// generated puzzles are built.
pub fn solve(base: Block, hosts: &[u32]) -> Result<(Vec<u32>, Vec<SubnetInfo>), SubnetError> {
    let mut requirements = hosts.to_vec();
    requirements.sort_unstable_by(|a, b| b.cmp(a));
    let allocations = pack(base, &requirements)?;
    log::info!("Solved {base} for {requirements:?}");
    Ok((requirements, allocations))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_sorts_descending() {
        let base: Block = "192.168.1.0/24".parse().unwrap();
        let (requirements, allocations) = solve(base, &[20, 50]).unwrap();
        assert_eq!(requirements, vec![50, 20]);
        assert_eq!(allocations[0].network, parse_address("192.168.1.0").unwrap());
        assert_eq!(allocations[1].network, parse_address("192.168.1.64").unwrap());
    }

    #[test]
    fn test_solve_overflow() {
        let base: Block = "192.168.1.0/26".parse().unwrap();
        assert!(matches!(
            solve(base, &[60, 2]),
            Err(SubnetError::CapacityOverflow { .. })
        ));
    }
}
