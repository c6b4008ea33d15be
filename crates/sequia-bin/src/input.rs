use std::fs;
use std::io;
use std::path::Path;

// one sequence per line, kept exactly as written; whitespace is part of a
// sequence, so only lines with nothing but whitespace are dropped
pub fn sequences_from_lines(contents: &str) -> impl Iterator<Item = String> + '_ {
    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(String::from)
}

/// Command-line sequences first, then the lines of `input` if given.
pub fn read_sequences(sequences: Vec<String>, input: Option<&Path>) -> io::Result<Vec<String>> {
    let mut all = sequences;
    if let Some(path) = input {
        let contents = fs::read_to_string(path)?;
        all.extend(sequences_from_lines(&contents));
    }
    Ok(all)
}
