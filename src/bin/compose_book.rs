//! Compose a Puzzle Book
//!
//! Reads a book request (configuration, front matter, puzzle sets, back
//! matter) from JSON, composes it onto a recording surface and writes the
//! recorded drawing operations as JSON for the rasterizer.
//!
//! Usage:
//!   cargo run --release --bin compose_book -- book.json
//!   cargo run --release --bin compose_book -- book.json --output out/book.ops.json --seed 7
//!   cargo run --release --bin compose_book -- book.json --report report.json

use puzzlebook::composer::{BookComposer, BookRequest, CompositionReport};
use puzzlebook::surface::RecordingSurface;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

struct ComposeArgs {
    request: PathBuf,
    output: PathBuf,
    report: Option<PathBuf>,
    seed: Option<u64>,
}

impl ComposeArgs {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        let mut request = None;
        let mut output = None;
        let mut report = None;
        let mut seed = None;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--output" | "-o" => {
                    i += 1;
                    output = args.get(i).map(PathBuf::from);
                },
                "--report" => {
                    i += 1;
                    report = args.get(i).map(PathBuf::from);
                },
                "--seed" => {
                    i += 1;
                    let value = args.get(i).ok_or("--seed needs a value")?;
                    seed = Some(value.parse().map_err(|_| format!("invalid seed '{}'", value))?);
                },
                "--help" | "-h" => return Err(usage()),
                other if request.is_none() && !other.starts_with('-') => {
                    request = Some(PathBuf::from(other));
                },
                other => return Err(format!("unexpected argument '{}'\n{}", other, usage())),
            }
            i += 1;
        }

        let request = request.ok_or_else(usage)?;
        let output = output.unwrap_or_else(|| request.with_extension("ops.json"));
        Ok(Self {
            request,
            output,
            report,
            seed,
        })
    }
}

fn usage() -> String {
    "Usage: compose_book <request.json> [--output <ops.json>] [--report <report.json>] [--seed <n>]".to_string()
}

fn write_json(path: &Path, json: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json)?;
    Ok(())
}

fn print_report(report: &CompositionReport) {
    println!("\n{}", "=".repeat(60));
    println!("BOOK COMPOSED");
    println!("{}", "=".repeat(60));
    println!("Pages:          {}", report.pages);
    println!("Book pages:     {}", report.book_pages);
    println!("Puzzles:        {}", report.puzzles);
    println!("Parity filler:  {}", if report.parity_filler { "yes" } else { "no" });
    println!("Skipped sets:   {}", report.skipped.len());
    for skipped in &report.skipped {
        println!("  - #{} '{}' ({:?}): {:?}", skipped.index + 1, skipped.title, skipped.difficulty, skipped.reason);
    }
    println!("Unplaced words: {}", report.unplaced_count());
    for unplaced in &report.unplaced {
        println!("  - #{} {}: {}", unplaced.puzzle, unplaced.title, unplaced.words.join(", "));
    }
    println!("{}", "=".repeat(60));
}

fn run(args: &ComposeArgs) -> Result<CompositionReport, Box<dyn std::error::Error>> {
    let mut request = BookRequest::from_path(&args.request)?;
    if let Some(seed) = args.seed {
        request.config.seed = Some(seed);
    }

    let mut surface = RecordingSurface::new();
    let report = BookComposer::new(request.config).compose(&request.content, &mut surface)?;

    write_json(&args.output, &surface.into_document().to_json()?)?;
    if let Some(path) = &args.report {
        write_json(path, &serde_json::to_string_pretty(&report)?)?;
    }
    Ok(report)
}

fn main() {
    env_logger::init();

    let args = match ComposeArgs::from_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(2);
        },
    };

    println!("Puzzle Book Composer");
    println!("Request: {}", args.request.display());
    println!("Output:  {}", args.output.display());

    let start_time = Instant::now();
    match run(&args) {
        Ok(report) => {
            print_report(&report);
            println!("Time: {:.2}s", start_time.elapsed().as_secs_f64());
        },
        Err(e) => {
            eprintln!("✗ Error: {}", e);
            std::process::exit(1);
        },
    }
}
