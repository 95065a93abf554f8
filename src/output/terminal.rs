//! Terminal rendering of puzzles, answer reports and walkthroughs.

use crate::models::{format_address, format_address_binary, Address, Puzzle, SubnetInfo};
use crate::processing::FieldReport;
use colored::Colorize;
use itertools::Itertools;

/// How addresses are written in rendered output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AddressStyle {
    #[default]
    Decimal,
    Binary,
}

impl AddressStyle {
    /// Render an address in this style.
    pub fn format(&self, addr: Address) -> String {
        match self {
            AddressStyle::Decimal => format_address(addr),
            AddressStyle::Binary => format_address_binary(addr),
        }
    }
}

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

/// The question text: assigned block and requirements, largest first.
pub fn render_puzzle(puzzle: &Puzzle, style: AddressStyle) -> String {
    let mut lines = vec![
        format!(
            "{} {}/{}",
            "Assigned block:".bold(),
            style.format(puzzle.base.addr),
            puzzle.base.prefix
        ),
        "Requirements (largest first):".to_string(),
    ];
    lines.extend(
        puzzle
            .requirements
            .iter()
            .enumerate()
            .map(|(i, hosts)| format!("  Subnet {}: {hosts} hosts", i + 1)),
    );
    if puzzle.requirements.len() > 1 {
        lines.push(
            "In VLSM, allocate address space from the largest requirement downward."
                .italic()
                .to_string(),
        );
    }
    lines.into_iter().join("\n")
}

/// One status line for a subnet, listing the wrong fields if any.
pub fn render_report(index: usize, hosts: u32, report: &FieldReport) -> String {
    if report.all_correct() {
        format!("Subnet {} ({hosts} hosts): {}", index + 1, "✔ Correct".green())
    } else {
        format!(
            "Subnet {} ({hosts} hosts): {} [{}]",
            index + 1,
            "✖ Incorrect".red(),
            report.wrong_fields().iter().join(", ")
        )
    }
}

/// Correct values and the solving method for one subnet.
pub fn render_walkthrough(
    index: usize,
    hosts: u32,
    subnet: &SubnetInfo,
    style: AddressStyle,
) -> String {
    [
        format!("Subnet {} ({hosts} hosts)", index + 1),
        String::new(),
        "Correct values:".to_string(),
        format!("  Mask: {}", style.format(subnet.mask)),
        format!("  CIDR: /{}", subnet.prefix),
        format!("  Network ID: {}", style.format(subnet.network)),
        format!("  Broadcast: {}", style.format(subnet.broadcast)),
        format!("  First usable (Gateway): {}", style.format(subnet.gateway)),
        format!("  Last usable: {}", style.format(subnet.last)),
        String::new(),
        "Solve method:".to_string(),
        format!("  1) Choose the smallest prefix that supports {hosts} hosts."),
        "  2) Allocate largest requirements first (VLSM).".to_string(),
        format!("  3) Block size = {} addresses.", subnet.block_size),
    ]
    .into_iter()
    .join("\n")
}
