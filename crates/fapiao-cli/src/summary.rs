//! End-of-run summary.

use console::style;

use fapiao_core::BatchReport;

pub fn print(report: &BatchReport) {
    // The renamer already logged that the folder has no PDF files
    if report.is_empty() {
        return;
    }

    let renamed = report.renamed().count();
    let failed: Vec<_> = report.failed().collect();

    println!();
    println!(
        "{} Processed {} files: {} renamed, {} failed",
        style("✓").green(),
        report.outcomes.len(),
        style(renamed).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for error in failed {
            println!("  - {}", error);
        }
    }
}
