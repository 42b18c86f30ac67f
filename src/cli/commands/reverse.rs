//! Reverse command - process lines from arguments or stdin

use std::io::{self, BufRead};

use wordrev::adapters::SpaceManipulator;
use wordrev::core::models::Bounds;
use wordrev::core::services;
use wordrev::output::{BatchResult, OutputMode};

/// Reverse the word order of the given lines
///
/// Falls back to reading lines from stdin when no arguments are given, so
/// the command works both directly and as a pipe target.
pub fn reverse(lines: &[String], bounds: Bounds, mode: OutputMode) -> anyhow::Result<()> {
    let lines = if lines.is_empty() {
        io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?
    } else {
        lines.to_vec()
    };

    log::debug!(
        "processing {} line(s) against bounds {}..={}",
        lines.len(),
        bounds.min(),
        bounds.max()
    );

    let manipulator = SpaceManipulator::new();
    let results = services::process_batch(&manipulator, bounds, &lines);
    BatchResult::from_cases(&results).render(mode);

    Ok(())
}
