// vslfront: VSL parser front-end with AST tree dumping

use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Parser;

use vslfront::repl::Driver;

#[derive(Parser)]
#[command(name = "vslfront")]
#[command(about = "Parse VSL source and print the AST")]
struct Cli {
    /// Source file to parse; with no file, an interactive session reads
    /// from standard input
    file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut driver = Driver::new(io::stdout(), io::stderr());

    match cli.file {
        Some(path) => {
            if !path.exists() {
                eprintln!("Error: File '{}' not found", path.display());
                std::process::exit(1);
            }
            let source = fs::read_to_string(&path)?;
            driver.run_source(&source)?;
        }
        None => {
            let stdin = io::stdin();
            driver.run_repl(stdin.lock())?;
        }
    }

    Ok(())
}
