use std::{collections::HashMap, error, fmt::Display, path::Path};

use anyhow::{Context, Result};
use aoc_util::{format_matrix, transpose_matrix};
use tracing::{debug, trace};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidFieldCount(String, usize),
    LengthMismatch(usize, usize),
    Overflow,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidFieldCount(s, n) => write!(
                f,
                "Given string({}) has {} location ID(s), expect exactly 2.",
                s, n
            ),
            Error::LengthMismatch(left_n, right_n) => write!(
                f,
                "Location ID lists have different lengths({} != {}).",
                left_n, right_n
            ),
            Error::Overflow => write!(f, "Result doesn't fit in a 64-bit unsigned integer."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationLists {
    left: Vec<u64>,
    right: Vec<u64>,
}

impl LocationLists {
    pub fn new(left: Vec<u64>, right: Vec<u64>) -> Self {
        Self { left, right }
    }

    pub fn parse(text: &str) -> Result<Self> {
        Self::from_lines(text.lines())
    }

    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rows = Vec::new();
        for (ind, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }

            let row = parse_line(line)
                .with_context(|| format!("Failed to read location IDs in line #{}.", ind + 1))?;
            rows.push(row.to_vec());
        }
        trace!("location ID rows:\n{}", format_matrix(&rows));

        let mut columns = transpose_matrix(&rows)
            .context("Failed to split location ID rows into two lists.")?
            .into_iter();
        let left = columns.next().unwrap_or_default();
        let right = columns.next().unwrap_or_default();
        debug!(count = left.len(), "parsed location ID lists");

        Ok(Self { left, right })
    }

    pub fn left(&self) -> &[u64] {
        &self.left
    }

    pub fn right(&self) -> &[u64] {
        &self.right
    }

    /// Sum of distances between the lists paired up in sorted order.
    pub fn total_distance(&self) -> Result<u64, Error> {
        self.check_len()?;

        let mut left = self.left.clone();
        let mut right = self.right.clone();
        left.sort_unstable();
        right.sort_unstable();

        left.iter()
            .zip(right.iter())
            .try_fold(0u64, |sum, (id0, id1)| sum.checked_add(id0.abs_diff(*id1)))
            .ok_or(Error::Overflow)
    }

    /// Each left ID weighted by how often it shows up in the right list.
    pub fn similarity_score(&self) -> Result<u64, Error> {
        self.check_len()?;

        let mut right_counts = HashMap::new();
        for id in &self.right {
            *right_counts.entry(*id).or_insert(0u64) += 1;
        }

        self.left
            .iter()
            .try_fold(0u64, |sum, id| {
                id.checked_mul(right_counts.get(id).copied().unwrap_or(0))
                    .and_then(|score| sum.checked_add(score))
            })
            .ok_or(Error::Overflow)
    }

    fn check_len(&self) -> Result<(), Error> {
        if self.left.len() != self.right.len() {
            return Err(Error::LengthMismatch(self.left.len(), self.right.len()));
        }

        Ok(())
    }
}

pub fn parse_line(line: &str) -> Result<[u64; 2]> {
    let fields = line.split_whitespace().collect::<Vec<_>>();
    let [id0, id1] = fields[..] else {
        return Err(Error::InvalidFieldCount(line.to_string(), fields.len()).into());
    };

    let id0 = id0
        .parse::<u64>()
        .with_context(|| format!("Failed to read the first location ID in string({}).", line))?;
    let id1 = id1
        .parse::<u64>()
        .with_context(|| format!("Failed to read the second location ID in string({}).", line))?;

    Ok([id0, id1])
}

pub fn read_lists<P: AsRef<Path>>(path: P) -> Result<LocationLists> {
    let lines = aoc_util::read_lines(&path)?;
    LocationLists::from_lines(&lines).with_context(|| {
        format!(
            "Failed to parse location ID lists in given file({}).",
            path.as_ref().display()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "3   4
4   3
2   5
1   3
3   9
3   3";

    #[test]
    fn parse_example_columns() {
        let lists = LocationLists::parse(EXAMPLE).unwrap();
        assert_eq!(lists.left(), &[3, 4, 2, 1, 3, 3]);
        assert_eq!(lists.right(), &[4, 3, 5, 3, 9, 3]);
    }

    #[test]
    fn example_total_distance() {
        let lists = LocationLists::parse(EXAMPLE).unwrap();
        assert_eq!(lists.total_distance(), Ok(11));
    }

    #[test]
    fn example_similarity_score() {
        let lists = LocationLists::parse(EXAMPLE).unwrap();
        assert_eq!(lists.similarity_score(), Ok(31));
    }

    #[test]
    fn line_order_does_not_matter() {
        let reversed = EXAMPLE.lines().rev().collect::<Vec<_>>();
        let lists = LocationLists::from_lines(&reversed).unwrap();
        assert_eq!(lists.total_distance(), Ok(11));
        assert_eq!(lists.similarity_score(), Ok(31));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let lists = LocationLists::parse("1   2\n\n3   4\n").unwrap();
        assert_eq!(lists.left(), &[1, 3]);
        assert_eq!(lists.right(), &[2, 4]);
    }

    #[test]
    fn empty_input_gives_zero() {
        let lists = LocationLists::parse("").unwrap();
        assert_eq!(lists.total_distance(), Ok(0));
        assert_eq!(lists.similarity_score(), Ok(0));
    }

    #[test]
    fn non_numeric_field_is_rejected() {
        assert!(LocationLists::parse("3   4\n4   x3\n").is_err());
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        let err = LocationLists::parse("3   4   5").unwrap_err();
        assert_eq!(
            err.root_cause().downcast_ref::<Error>(),
            Some(&Error::InvalidFieldCount("3   4   5".to_string(), 3))
        );
        assert!(LocationLists::parse("3").is_err());
    }

    #[test]
    fn oversized_distance_is_rejected() {
        let lists =
            LocationLists::parse("18446744073709551615   0\n18446744073709551615   0\n").unwrap();
        assert_eq!(lists.total_distance(), Err(Error::Overflow));
        assert_eq!(lists.similarity_score(), Ok(0));
    }

    #[test]
    fn oversized_similarity_score_is_rejected() {
        let lists = LocationLists::parse(
            "9223372036854775808   9223372036854775808\n1   9223372036854775808\n",
        )
        .unwrap();
        assert_eq!(lists.similarity_score(), Err(Error::Overflow));
        assert_eq!(lists.total_distance(), Ok(9223372036854775807));
    }

    #[test]
    fn largest_ids_still_sum() {
        let lists =
            LocationLists::parse("18446744073709551615   18446744073709551615\n").unwrap();
        assert_eq!(lists.total_distance(), Ok(0));
        assert_eq!(lists.similarity_score(), Ok(18446744073709551615));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let lists = LocationLists::new(vec![1, 2, 3], vec![1, 2]);
        assert_eq!(lists.total_distance(), Err(Error::LengthMismatch(3, 2)));
        assert_eq!(lists.similarity_score(), Err(Error::LengthMismatch(3, 2)));
    }
}
