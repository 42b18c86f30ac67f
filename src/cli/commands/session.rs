//! Session command - interactive line collection and reversal
//!
//! Prompts on stderr for a case count and then for each line, keeping
//! stdout clean for the results. The case count prompt repeats until a
//! positive integer arrives; collected lines are kept exactly as typed,
//! with only the line terminator stripped.

use std::io::{self, BufRead, Write};

use anyhow::bail;
use colored::Colorize;

use wordrev::adapters::SpaceManipulator;
use wordrev::core::models::Bounds;
use wordrev::core::services;
use wordrev::output::{BatchResult, OutputMode};

/// Run an interactive session
pub fn session(bounds: Bounds, mode: OutputMode) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let count = read_case_count(&mut input)?;
    let lines = read_cases(&mut input, count)?;

    log::debug!(
        "collected {count} line(s) against bounds {}..={}",
        bounds.min(),
        bounds.max()
    );

    let manipulator = SpaceManipulator::new();
    let results = services::process_batch(&manipulator, bounds, &lines);
    BatchResult::from_cases(&results).render(mode);

    Ok(())
}

/// Prompt for the number of cases until a positive integer arrives
fn read_case_count(input: &mut impl BufRead) -> anyhow::Result<usize> {
    loop {
        prompt("Enter the number of cases (N): ".bold());
        let Some(raw) = read_line(input)? else {
            bail!("input closed before a case count was given");
        };
        match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => return Ok(n),
            _ => eprintln!(
                "{}",
                "Invalid input. Please enter a positive integer.".yellow()
            ),
        }
    }
}

/// Prompt for each of `count` lines
fn read_cases(input: &mut impl BufRead, count: usize) -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::new();
    for i in 1..=count {
        prompt(format!("Enter line {i}: ").bold());
        let Some(line) = read_line(input)? else {
            bail!("input closed after {} of {count} line(s)", lines.len());
        };
        lines.push(line);
    }
    Ok(lines)
}

/// Write a prompt to stderr without a trailing newline
fn prompt(text: impl std::fmt::Display) {
    eprint!("{text}");
    io::stderr().flush().ok();
}

/// Read one line with the terminator stripped; `None` on end of input
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(Some(buf))
}
