use anyhow::{Context, Result};
use aoc_util::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    aoc_util::logging::init();
    let args = CLIArgs::parse();
    let lists = day1::read_lists(&args.input_path).with_context(|| {
        format!(
            "Failed to read location ID lists from given input file({}).",
            args.input_path.display()
        )
    })?;

    let diff_sum = lists
        .total_distance()
        .context("Failed to compute the total distance of given lists.")?;
    println!(
        "The total sum of differences between two given lists after sorted is {}.",
        diff_sum
    );

    Ok(())
}
