use anyhow::{Context, Result};
use aoc_util::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    aoc_util::logging::init();
    let args = CLIArgs::parse();
    let reports = day2::read_reps(&args.input_path).with_context(|| {
        format!(
            "Failed to read reports from given file({}).",
            args.input_path.display()
        )
    })?;

    let safe_count = reports.iter().filter(|r| r.is_tolerantly_safe()).count();
    println!(
        "There is(are) {} safe report(s) in the whole reports list with the problem dampener.",
        safe_count
    );

    Ok(())
}
