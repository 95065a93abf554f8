//! Output formatting for puzzles and allocations.
//!
//! This module handles rendering for the terminal front end:
//! - [`table`] - CSV-style allocation tables with gap rows
//! - [`terminal`] - puzzle text, answer reports and walkthroughs

mod table;
mod terminal;

pub use table::{allocation_rows, render_allocation_table, AllocationRow};
pub use terminal::{
    format_field, render_puzzle, render_report, render_walkthrough, AddressStyle,
};
