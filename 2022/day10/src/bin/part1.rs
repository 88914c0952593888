use anyhow::{Context, Result};
use clap::Parser;
use day10::Part1CLIArgs;

fn main() -> Result<()> {
    env_logger::init();
    let args = Part1CLIArgs::parse();
    let program = day10::read_program(&args.input_path).with_context(|| {
        format!(
            "Failed to read program from given file({}).",
            args.input_path.display()
        )
    })?;

    let strength_sum = day10::signal_strength_sum(&program, &args.target_cycles)
        .with_context(|| {
            format!(
                "Failed to run program from given file({}).",
                args.input_path.display()
            )
        })?;
    println!("{}", day10::format_response(1, strength_sum));

    Ok(())
}
