use anyhow::{Context, Result};
use aoc_util::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    aoc_util::logging::init();
    let args = CLIArgs::parse();
    let memory = day3::read_memory(&args.input_path).with_context(|| {
        format!(
            "Failed to read instructions from given file({}).",
            args.input_path.display()
        )
    })?;

    let sum = day3::mul_sum(&memory);
    println!("The total sum of correct multiply instructions is {}.", sum);

    Ok(())
}
