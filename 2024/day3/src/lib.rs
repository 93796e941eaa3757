use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::{debug, trace};

static MUL_INST_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"mul\(([0-9]{1,3}),([0-9]{1,3})\)").unwrap());
static INST_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"mul\(([0-9]{1,3}),([0-9]{1,3})\)|do\(\)|don't\(\)").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Mul(u64, u64),
    Do,
    Dont,
}

impl Token {
    fn from_caps(caps: &Captures) -> Self {
        match (caps.get(1), caps.get(2)) {
            (Some(l_factor), Some(r_factor)) => {
                Token::Mul(operand(l_factor.as_str()), operand(r_factor.as_str()))
            }
            _ if &caps[0] == "do()" => Token::Do,
            _ => Token::Dont,
        }
    }
}

// Operands are at most three ASCII digits, guaranteed by the patterns.
fn operand(digits: &str) -> u64 {
    digits
        .bytes()
        .fold(0, |n, b| n * 10 + u64::from(b - b'0'))
}

/// Running state of the conditional multiply evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpreter {
    enabled: bool,
    sum: u64,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self {
            enabled: true,
            sum: 0,
        }
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&mut self, token: Token) {
        match token {
            Token::Mul(l_factor, r_factor) => {
                if self.enabled {
                    self.sum += l_factor * r_factor;
                }
            }
            Token::Do => self.enabled = true,
            Token::Dont => self.enabled = false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn sum(&self) -> u64 {
        self.sum
    }
}

/// Every well-formed `mul(A,B)` in `text`, left to right.
pub fn scan_muls(text: &str) -> Vec<Token> {
    MUL_INST_PATTERN
        .captures_iter(text)
        .map(|caps| Token::from_caps(&caps))
        .collect()
}

/// Every `mul(A,B)`, `do()` and `don't()` in `text`, left to right.
pub fn scan_tokens(text: &str) -> Vec<Token> {
    let tokens = INST_PATTERN
        .captures_iter(text)
        .map(|caps| Token::from_caps(&caps))
        .collect::<Vec<_>>();
    debug!(count = tokens.len(), "scanned instruction tokens");
    trace!(?tokens);

    tokens
}

pub fn mul_sum(text: &str) -> u64 {
    scan_muls(text)
        .into_iter()
        .map(|t| match t {
            Token::Mul(l_factor, r_factor) => l_factor * r_factor,
            Token::Do | Token::Dont => 0,
        })
        .sum()
}

pub fn enabled_mul_sum(text: &str) -> u64 {
    let mut interpreter = Interpreter::new();
    for token in scan_tokens(text) {
        interpreter.step(token);
    }

    interpreter.sum()
}

pub fn read_memory<P: AsRef<Path>>(path: P) -> Result<String> {
    aoc_util::read_input(&path).with_context(|| {
        format!(
            "Failed to read corrupted memory from given file({}).",
            path.as_ref().display()
        )
    })
}
