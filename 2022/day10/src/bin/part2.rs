use anyhow::{Context, Result};
use clap::Parser;
use day10::{Part2CLIArgs, Screen};

fn main() -> Result<()> {
    env_logger::init();
    let args = Part2CLIArgs::parse();
    let program = day10::read_program(&args.input_path).with_context(|| {
        format!(
            "Failed to read program from given file({}).",
            args.input_path.display()
        )
    })?;

    let screen = Screen::render(&program).with_context(|| {
        format!(
            "Failed to draw screen with program from given file({}).",
            args.input_path.display()
        )
    })?;
    println!("{}", day10::format_response(2, format!("\n{}", screen)));

    Ok(())
}
