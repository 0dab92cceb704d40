use clap::Parser;
use coordmap::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    match commands::run(args) {
        Ok(Some(_stats)) => {
            // Success - the report has already been written by the command
            process::exit(0);
        }
        Ok(None) => {
            show_help_and_commands();
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("coordmap - Coordinate Text to Map Points");
    println!("========================================");
    println!();
    println!("Parse lines of 'longitude, latitude[, label]' text into point records,");
    println!("report malformed lines, and compute a default map-view center.");
    println!();
    println!("USAGE:");
    println!("    coordmap <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse       Parse coordinate text and report points and skipped lines");
    println!("    center      Print the default map-view center");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Parse a file of coordinates:");
    println!("    coordmap parse points.txt");
    println!();
    println!("    # Parse piped text and emit JSON:");
    println!("    cat points.txt | coordmap parse --output-format json");
    println!();
    println!("    # Fail if any line is malformed:");
    println!("    coordmap parse points.txt --strict");
    println!();
    println!("    # Center of the built-in sample:");
    println!("    coordmap center");
    println!();
    println!("For detailed help on any command, use:");
    println!("    coordmap <COMMAND> --help");
}
