use anyhow::{Context, Result};
use std::io::{self, BufRead};

/// Non-blank lines of `reader`, trimmed.
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

/// Names given on the command line, or stdin lines when there are none.
pub fn read_inputs(args: &[String]) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }
    read_lines(io::stdin().lock()).context("Failed to read names from stdin")
}
