use std::{error, fmt::Display, path::Path};

use anyhow::{Context, Result};
use aoc_util::format_matrix;
use tracing::{debug, trace};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidLevel(String),
    NoLevels,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidLevel(s) => {
                write!(f, "Invalid level({}) found in given level list.", s)
            }
            Error::NoLevels => write!(f, "Given level list is empty."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    levels: Vec<u64>,
}

impl TryFrom<&str> for Report {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let levels = value
            .split_whitespace()
            .map(|s| {
                s.parse::<u64>()
                    .map_err(|_| Error::InvalidLevel(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::try_from(levels)
    }
}

impl TryFrom<Vec<u64>> for Report {
    type Error = Error;

    fn try_from(levels: Vec<u64>) -> std::result::Result<Self, Self::Error> {
        if levels.is_empty() {
            return Err(Error::NoLevels);
        }

        Ok(Self { levels })
    }
}

impl Report {
    pub fn levels(&self) -> &[u64] {
        &self.levels
    }

    pub fn is_safe(&self) -> bool {
        Self::levels_are_safe(&self.levels)
    }

    /// Safe, or safe once any single level is dropped.
    pub fn is_tolerantly_safe(&self) -> bool {
        if self.is_safe() {
            return true;
        }

        let level_n = self.levels.len();
        let removed_ind = (0..level_n).find(|&ind| {
            let left_levels = [&self.levels[..ind], &self.levels[(ind + 1)..]].concat();
            Self::levels_are_safe(&left_levels)
        });
        trace!(levels = ?self.levels, ?removed_ind, "tolerance check");

        removed_ind.is_some()
    }

    fn levels_are_safe(levels: &[u64]) -> bool {
        let mut is_inc_op = None;
        for (last_l, cur_l) in levels.iter().zip(levels.iter().skip(1)) {
            let (is_safe, cur_is_inc) = Self::is_safe_pair(*last_l, *cur_l, is_inc_op);
            if !is_safe {
                return false;
            }

            is_inc_op.get_or_insert(cur_is_inc);
        }

        true
    }

    fn is_safe_pair(l_level: u64, r_level: u64, is_inc_req: Option<bool>) -> (bool, bool) {
        let cur_is_inc = l_level < r_level;
        if is_inc_req.is_some_and(|is_inc| is_inc != cur_is_inc) {
            return (false, cur_is_inc);
        }

        let abs_diff = l_level.abs_diff(r_level);
        ((1..=3).contains(&abs_diff), cur_is_inc)
    }
}

/// Parses one report per line, skipping blank lines.
pub fn parse_reports(text: &str) -> Result<Vec<Report>> {
    let reports = text
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(ind, l)| {
            Report::try_from(l)
                .with_context(|| format!("Failed to read levels in line #{}({}).", ind + 1, l))
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(count = reports.len(), "parsed reports");
    trace!(
        "reports:\n{}",
        format_matrix(&reports.iter().map(|r| r.levels.clone()).collect::<Vec<_>>())
    );

    Ok(reports)
}

pub fn read_reps<P: AsRef<Path>>(path: P) -> Result<Vec<Report>> {
    let text = aoc_util::read_input(&path)?;
    parse_reports(&text).with_context(|| {
        format!(
            "Failed to parse reports in given file({}).",
            path.as_ref().display()
        )
    })
}
