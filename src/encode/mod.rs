//! Line splitting and run-length encoding.

use crate::domain::Run;

/// Split on `\n` only.
///
/// Whitespace inside lines (including a `\r` before the newline) is kept, a
/// trailing newline produces a trailing empty line, and empty input produces
/// exactly one empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Collapse consecutive identical lines into runs, preserving order.
///
/// Equality is exact string equality, so two empty lines form a run too.
pub fn run_length_encode<I, S>(lines: I) -> Vec<Run>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str> + Into<String>,
{
    let mut runs: Vec<Run> = Vec::new();
    for line in lines {
        if let Some(last) = runs.last_mut() {
            if last.text == line.as_ref() {
                last.count += 1;
                continue;
            }
        }
        runs.push(Run::new(line));
    }
    runs
}
