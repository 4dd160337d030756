//! Group Extractor CLI - count group names found in spreadsheet comments
//!
//! ```bash
//! group-extractor                              # prompt for file and keyword
//! group-extractor incidents.xlsx               # keyword defaults to "Groups"
//! group-extractor export.csv --keyword Teams   # custom marker label
//! ```
//!
//! Reports are written to `group_counts.txt` and `group_counts.xlsx` in the
//! current directory.

use clap::Parser;
use group_extractor::{logging, logs, run_pipeline, with_default_extension, ExtractOptions};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "group-extractor")]
#[command(about = "Count group names embedded in spreadsheet comment columns", long_about = None)]
struct Cli {
    /// Input file (.xlsx or .csv); prompted for when omitted
    input: Option<PathBuf>,

    /// Label preceding the group marker (default: Groups)
    #[arg(short, long, env = "GROUP_EXTRACTOR_KEYWORD")]
    keyword: Option<String>,

    /// Only print the final outcome
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    logs::CONSOLE.set_quiet(cli.quiet);

    if let Err(e) = run(cli) {
        logs::log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Group Extractor Automation ===");

    let interactive = cli.input.is_none();
    let input = match cli.input {
        Some(path) => path,
        None => PathBuf::from(prompt("Enter input file path (.xlsx or .csv): ")?),
    };
    let input = with_default_extension(input);

    let keyword = match cli.keyword {
        Some(keyword) => keyword,
        None if interactive => prompt("Enter search keyword (default 'Groups'): ")?,
        None => String::new(),
    };
    let options = ExtractOptions::with_keyword(&keyword);

    let summary = run_pipeline(&input, &options)?;

    if !summary.has_matches() {
        println!("No matching groups found. Check your keyword or file.");
        return Ok(());
    }

    println!("\n✨ Task completed successfully!");
    println!("Results have been saved in both .txt and .xlsx formats.");
    Ok(())
}

/// Print a prompt and read one trimmed line from stdin.
fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
