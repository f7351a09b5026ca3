use anyhow::Result;
use clap::Parser;

use extmask::cli::Args;
use extmask::stats::RunSummary;
use extmask::walker;

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        eprintln!(
            "Masking direction: {}, target: {}",
            args.direction().as_str(),
            args.path.display()
        );
    }

    match walker::process_path(&args.path, args.direction(), &args.walk_options()) {
        Ok(summary) => {
            if args.stats && !args.quiet {
                print_summary(&summary);
            }
            Ok(())
        }
        Err(error) if error.is_missing_path() => {
            // A missing input is reported on stdout and is not a failure
            println!("Error: {}", error);
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}

fn print_summary(summary: &RunSummary) {
    println!("\nRun summary:");
    println!("Files scanned: {}", summary.scanned);
    println!("Files renamed: {}", summary.renamed);
    println!("Files skipped: {}", summary.skipped);
    if summary.failed > 0 {
        println!("Failures: {}", summary.failed);
    }
    println!("Processing time: {}ms", summary.elapsed_ms);
    if summary.dry_run {
        println!("Dry run: no files were changed");
    }
}
