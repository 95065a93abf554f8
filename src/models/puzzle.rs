//! Puzzle, difficulty and submitted-answer models.

use super::{Block, SubnetInfo};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Puzzle difficulty tier.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// One subnet.
    Easy,
    /// Several identical subnets.
    Medium,
    /// Several subnets of mixed sizes.
    Hard,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{other}'")),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// An assigned block, its host requirements and the expected allocation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Difficulty the puzzle was generated for.
    pub difficulty: Difficulty,
    /// Assigned base block.
    pub base: Block,
    /// Host requirements, largest first.
    pub requirements: Vec<u32>,
    /// Expected subnets, one per requirement in the same order.
    pub allocations: Vec<SubnetInfo>,
}

/// Free-text answers for one subnet, exactly as the user typed them.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    /// Subnet mask.
    pub mask: String,
    /// Prefix length, with or without a leading `/`.
    pub cidr: String,
    /// Network address.
    pub network: String,
    /// Broadcast address.
    pub broadcast: String,
    /// First usable address.
    pub gateway: String,
    /// Last usable address.
    pub last: String,
}
