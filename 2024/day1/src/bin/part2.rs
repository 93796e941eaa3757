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

    let sim_score = lists
        .similarity_score()
        .context("Failed to compute the similarity score of given lists.")?;
    println!(
        "The similarity score between two given list is {}.",
        sim_score
    );

    Ok(())
}
