// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap, delegates to Layer 2, and prints the results.
//
// Commands:
//   `clean`   — clean one corpus, write output + report
//   `rerun`   — replay a saved clean config
//   `inspect` — audit one corpus, print only
//   `compare` — original vs. original+augmented arithmetic
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use commands::{CleanArgs, Commands, CompareArgs, InspectArgs, RerunArgs};

use crate::application::clean_use_case::CleanConfig;
use crate::application::inspect_use_case::InspectSummary;
use crate::domain::comparison::CorpusComparison;
use crate::domain::counts::CleaningCounts;

#[derive(Parser, Debug)]
#[command(
    name = "bangla-corpus-audit",
    version,
    about = "Count and remove empty and duplicate records in Bangla text corpora."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Clean(args)   => run_clean(args),
            Commands::Rerun(args)   => run_rerun(args),
            Commands::Inspect(args) => run_inspect(args),
            Commands::Compare(args) => run_compare(args),
        }
    }
}

fn run_clean(args: CleanArgs) -> Result<()> {
    execute_clean(args.into())
}

fn run_rerun(args: RerunArgs) -> Result<()> {
    use crate::infra::report_store::load_config;

    let config = load_config(Path::new(&args.config))?;
    tracing::info!("Replaying cleaning run from '{}'", args.config);
    execute_clean(config)
}

fn execute_clean(config: CleanConfig) -> Result<()> {
    use crate::application::clean_use_case::CleanUseCase;

    let summary = CleanUseCase::new(config).execute()?;

    println!("\n{} CLEANING {} {}", "=".repeat(20), summary.report.corpus, "=".repeat(20));
    print_counts(&summary.report.counts);
    println!("Cleaned corpus: {}", summary.output_path.display());
    println!("Report:         {}", summary.report_path.display());
    println!("Config:         {}", summary.config_path.display());
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    use crate::application::inspect_use_case::InspectUseCase;

    let summary = InspectUseCase::new(args.into()).execute()?;
    print_inspection(&summary);
    Ok(())
}

fn run_compare(args: CompareArgs) -> Result<()> {
    use crate::application::compare_use_case::CompareUseCase;

    let cmp = CompareUseCase::new(args.into()).execute()?;
    print_comparison(&cmp);
    Ok(())
}

// ─── Output formatting ────────────────────────────────────────────────────────

fn print_counts(c: &CleaningCounts) {
    println!("Total records:     {}", c.total);
    println!("Empty strings:     {} ({:.2}%)", c.empty, c.percent_of_total(c.empty));
    if c.missing > 0 {
        println!("  of which NA:     {}", c.missing);
    }
    println!("Duplicated texts:  {} ({:.2}%)", c.duplicates, c.percent_of_total(c.duplicates));
    println!("Removed:           {} ({:.2}%)", c.removed(), c.percent_of_total(c.removed()));
    println!("Cleaned size:      {}", c.cleaned);
}

fn print_inspection(s: &InspectSummary) {
    let q = &s.quality;
    println!("\n{} {} QUALITY REPORT {}", "=".repeat(20), q.corpus, "=".repeat(20));
    println!("Policy:            {}", q.policy);
    println!("Total records:     {}", q.total);
    println!("NA values:         {} ({:.2}%)", q.missing, q.percent(q.missing));
    println!("Empty strings:     {} ({:.2}%)", q.empty, q.percent(q.empty));
    println!(
        "Duplicate records: {} ({:.2}%), {} of them empty",
        q.duplicates,
        q.percent(q.duplicates),
        q.empty_duplicates,
    );

    if !q.top_repeated.is_empty() {
        println!("\nTop {} most common duplicated texts:", q.top_repeated.len());
        for r in &q.top_repeated {
            println!("'{}': {} occurrences", r.text, r.count);
        }
    }

    if let Some(l) = &s.lengths {
        println!("\nText length (characters):");
        println!("  count  {}", l.count);
        println!("  mean   {:.1}", l.mean);
        println!("  std    {:.1}", l.std);
        println!("  min    {}", l.min);
        println!("  25%    {:.1}", l.p25);
        println!("  50%    {:.1}", l.median);
        println!("  75%    {:.1}", l.p75);
        println!("  max    {}", l.max);
    }

    if !s.classes.is_empty() {
        println!("\nClass distribution:");
        for c in &s.classes {
            println!(
                "  {:<20} {:>7} ({:5.1}%)  avg length {:.1}",
                c.label, c.count, c.percent, c.avg_length
            );
        }
    }
}

fn print_comparison(cmp: &CorpusComparison) {
    let (o, c) = (&cmp.original, &cmp.combined);
    println!("\n{} ORIGINAL vs ORIGINAL+AUGMENTED {}", "=".repeat(20), "=".repeat(20));
    println!("{:<22} {:>10} {:>10}", "", "original", "combined");
    println!("{:<22} {:>10} {:>10}", "total", o.total, c.total);
    println!("{:<22} {:>10} {:>10}", "empty", o.empty, c.empty);
    println!("{:<22} {:>10} {:>10}", "duplicates", o.duplicates, c.duplicates);
    println!("{:<22} {:>10} {:>10}", "cleaned", o.cleaned, c.cleaned);
    println!();
    println!("Augmented-only before cleaning: {}", cmp.augmented_raw);
    println!("Augmented-only after cleaning:  {}", cmp.augmented_cleaned);
    println!("Size reduction:                 {}", cmp.size_reduction);
    println!(
        "Cross-check: {} extra duplicates + {} extra empty = {} ({})",
        cmp.extra_duplicates,
        cmp.extra_empty,
        cmp.removed_delta(),
        if cmp.is_consistent() { "matches" } else { "MISMATCH" },
    );
}
