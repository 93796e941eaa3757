use std::{
    error,
    fmt::Display,
    fs::{self, File},
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

pub mod logging;

/// Input file looked up inside a day directory given on the command line.
pub const DAY_INPUT_FILE: &str = "input1.txt";

#[derive(Debug, Parser)]
pub struct CLIArgs {
    /// Input file, or a day directory (e.g. `day-01`) holding `input1.txt`.
    pub input_path: PathBuf,
}

#[derive(Debug, PartialEq, Eq)]
pub enum MatrixError {
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl Display for MatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row #{} of given matrix has {} element(s), expect {}.",
                row, found, expected
            ),
        }
    }
}

impl error::Error for MatrixError {}

pub fn resolve_input_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if path.is_dir() {
        path.join(DAY_INPUT_FILE)
    } else {
        path.to_path_buf()
    }
}

pub fn read_input<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = resolve_input_path(path);
    tracing::debug!(path = %path.display(), "reading puzzle input");
    fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.display()))
}

pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = resolve_input_path(path);
    tracing::debug!(path = %path.display(), "reading puzzle input lines");
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.display()))?;
    BufReader::new(file)
        .lines()
        .enumerate()
        .map(|(ind, l)| {
            l.with_context(|| {
                format!(
                    "Failed to read line {} of given file({}).",
                    ind + 1,
                    path.display()
                )
            })
        })
        .collect()
}

pub fn format_matrix<T: Display>(matrix: &[Vec<T>]) -> String {
    let mut text = String::new();
    for row in matrix {
        for element in row {
            text.push_str(&format!("{:>2} ", element));
        }
        text.push('\n');
    }

    text
}

pub fn transpose_matrix<T: Copy>(matrix: &[Vec<T>]) -> Result<Vec<Vec<T>>, MatrixError> {
    let Some(first_row) = matrix.first() else {
        return Ok(Vec::new());
    };

    let col_n = first_row.len();
    if let Some((row, r)) = matrix
        .iter()
        .enumerate()
        .find(|(_, r)| r.len() != col_n)
    {
        return Err(MatrixError::Ragged {
            row,
            expected: col_n,
            found: r.len(),
        });
    }

    Ok((0..col_n)
        .map(|col_ind| matrix.iter().map(|row| row[col_ind]).collect())
        .collect())
}
