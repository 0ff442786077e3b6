//! Interactive conversion loop.
//!
//! Menu-driven REPL: pick a source format, pick a target format, enter a
//! value, get the converted color back. Parse errors are printed and the
//! loop continues; only an interrupt or end of input ends the session.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use tracing::debug;

use chroma_core::{parse, render, ColorFormat};

pub const FAREWELL: &str = "Bye!";

/// Run the conversion loop until stdin is exhausted.
pub fn run() -> Result<()> {
    println!(
        "{}",
        "Quick and easy color converter - press Ctrl+C to quit.".cyan().bold()
    );

    loop {
        let Some(source) = ask_format("What is the starting format?")? else {
            break;
        };
        let Some(target) = ask_format("What is the target format?")? else {
            break;
        };

        if source == target {
            println!(
                "\n{} Source and target formats are identical, nothing to convert.",
                "Warning:".yellow().bold()
            );
            continue;
        }

        println!(
            "Enter the color in {} format (e.g., {})",
            source.label().to_uppercase().bold(),
            source.example()
        );
        let Some(raw) = read_line()? else {
            break;
        };

        match parse(source, raw.trim()) {
            Ok(color) => {
                debug!(%source, %target, "converting parsed color");
                println!("\n{} {}\n", "Result:".green().bold(), render(color, target));
            }
            Err(e) => {
                eprintln!("\n{} {}\n", "Error:".red().bold(), e);
            }
        }
    }

    println!("\n{}", FAREWELL.cyan());
    Ok(())
}

// Numbered 1-indexed menu; loops in place until the selection is valid.
// `None` means stdin closed.
fn ask_format(label: &str) -> Result<Option<ColorFormat>> {
    println!("\n{}", label.bold());
    for (i, format) in ColorFormat::ALL.iter().enumerate() {
        println!("{}: {}", i + 1, format);
    }

    loop {
        let Some(line) = read_line()? else {
            return Ok(None);
        };
        if let Ok(choice) = line.trim().parse::<usize>() {
            if (1..=ColorFormat::ALL.len()).contains(&choice) {
                return Ok(Some(ColorFormat::ALL[choice - 1]));
            }
        }
        println!("{}", "Invalid choice, try again.".yellow());
    }
}

/// Prompt and read one line; `None` when stdin is closed.
fn read_line() -> Result<Option<String>> {
    print!("{} ", ">".green().bold());
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
