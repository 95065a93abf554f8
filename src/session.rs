//! Quiz session state: the current puzzle and the answer streak.
//!
//! The engine functions are stateless; a front end owns one [`Session`] and
//! passes answers through it.

use crate::error::SubnetError;
use crate::models::{Difficulty, FieldSet, Puzzle};
use crate::processing::{generate_puzzle_with_attempts, validate_fields, FieldReport};
use rand::Rng;

/// Outcome of checking one round of answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// One report per subnet, in puzzle order.
    pub reports: Vec<FieldReport>,
    /// Whether every subnet was fully correct.
    pub all_correct: bool,
    /// Streak after this check.
    pub streak: u32,
    /// Best streak after this check.
    pub best_streak: u32,
}

/// Owns the random source, the current puzzle and the streak counters.
#[derive(Debug)]
pub struct Session<R: Rng> {
    rng: R,
    difficulty: Difficulty,
    max_attempts: usize,
    current: Option<Puzzle>,
    scored: bool,
    streak: u32,
    best_streak: u32,
}

impl<R: Rng> Session<R> {
    /// Create a session with no puzzle yet.
    pub fn new(rng: R, difficulty: Difficulty, max_attempts: usize) -> Session<R> {
        Session {
            rng,
            difficulty,
            max_attempts,
            current: None,
            scored: false,
            streak: 0,
            best_streak: 0,
        }
    }

    /// Start from a best streak loaded by the caller.
    pub fn with_best_streak(mut self, best_streak: u32) -> Session<R> {
        self.best_streak = best_streak;
        self
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Difficulty used for the next generated puzzle.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn current(&self) -> Option<&Puzzle> {
        self.current.as_ref()
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    /// Replace the current puzzle with a freshly generated one.
    ///
    /// On failure the previous puzzle is kept.
    pub fn new_puzzle(&mut self) -> Result<&Puzzle, SubnetError> {
        let puzzle = generate_puzzle_with_attempts(&mut self.rng, self.difficulty, self.max_attempts)?;
        self.scored = false;
        Ok(self.current.insert(puzzle))
    }

    /// Check answers for the current puzzle, one [`FieldSet`] per subnet.
    ///
    /// Missing answers count as wrong. Only the first check of a puzzle moves
    /// the streak. Returns `None` when no puzzle has been generated.
    pub fn check(&mut self, answers: &[FieldSet]) -> Option<RoundResult> {
        let puzzle = self.current.as_ref()?;
        let blank = FieldSet::default();

        let reports: Vec<FieldReport> = puzzle
            .allocations
            .iter()
            .enumerate()
            .map(|(i, expected)| validate_fields(expected, answers.get(i).unwrap_or(&blank)))
            .collect();
        let all_correct = reports.iter().all(FieldReport::all_correct);

        if !self.scored {
            self.scored = true;
            if all_correct {
                self.streak += 1;
                self.best_streak = self.best_streak.max(self.streak);
            } else {
                self.streak = 0;
            }
            log::info!(
                "Round checked: correct={all_correct} streak={} best={}",
                self.streak,
                self.best_streak
            );
        }

        Some(RoundResult {
            reports,
            all_correct,
            streak: self.streak,
            best_streak: self.best_streak,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{format_address, SubnetInfo};
    use crate::processing::DEFAULT_MAX_ATTEMPTS;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn answer(s: &SubnetInfo) -> FieldSet {
        FieldSet {
            mask: format_address(s.mask),
            cidr: format!("/{}", s.prefix),
            network: format_address(s.network),
            broadcast: format_address(s.broadcast),
            gateway: format_address(s.gateway),
            last: format_address(s.last),
        }
    }

    fn session(seed: u64) -> Session<ChaCha8Rng> {
        Session::new(
            ChaCha8Rng::seed_from_u64(seed),
            Difficulty::Medium,
            DEFAULT_MAX_ATTEMPTS,
        )
    }

    fn correct_answers(session: &Session<ChaCha8Rng>) -> Vec<FieldSet> {
        session
            .current()
            .unwrap()
            .allocations
            .iter()
            .map(answer)
            .collect()
    }

    #[test]
    fn test_check_without_puzzle() {
        let mut s = session(1);
        assert!(s.current().is_none());
        assert_eq!(s.check(&[]), None);
    }

    #[test]
    fn test_streak_counts_and_resets() {
        let mut s = session(2);

        for expected in 1..=3 {
            s.new_puzzle().unwrap();
            let answers = correct_answers(&s);
            let result = s.check(&answers).unwrap();
            assert!(result.all_correct);
            assert_eq!(result.streak, expected);
            assert_eq!(result.best_streak, expected);
        }

        s.new_puzzle().unwrap();
        let result = s.check(&[]).unwrap();
        assert!(!result.all_correct);
        assert_eq!(result.streak, 0);
        assert_eq!(result.best_streak, 3);
        assert!(result.reports.iter().all(|r| !r.all_correct()));
    }

    #[test]
    fn test_rechecking_does_not_inflate_streak() {
        let mut s = session(3);
        s.new_puzzle().unwrap();
        let answers = correct_answers(&s);
        assert_eq!(s.check(&answers).unwrap().streak, 1);
        assert_eq!(s.check(&answers).unwrap().streak, 1);
        assert_eq!(s.streak(), 1);
    }

    #[test]
    fn test_best_streak_only_grows() {
        let mut s = session(4).with_best_streak(10);
        s.new_puzzle().unwrap();
        let answers = correct_answers(&s);
        let result = s.check(&answers).unwrap();
        assert_eq!(result.streak, 1);
        assert_eq!(result.best_streak, 10);
    }

    #[test]
    fn test_set_difficulty() {
        let mut s = session(5);
        s.set_difficulty(Difficulty::Easy);
        assert_eq!(s.difficulty(), Difficulty::Easy);
        let puzzle = s.new_puzzle().unwrap();
        assert_eq!(puzzle.difficulty, Difficulty::Easy);
        assert_eq!(puzzle.allocations.len(), 1);
    }

    #[test]
    fn test_failed_generation_keeps_previous_puzzle() {
        let mut s = session(6);
        let first = s.new_puzzle().unwrap().clone();
        s.max_attempts = 0;
        assert_eq!(
            s.new_puzzle(),
            Err(SubnetError::GenerationExhausted { attempts: 0 })
        );
        assert_eq!(s.current(), Some(&first));
    }
}
