// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the subcommands: `clean`, `rerun`, `inspect`, `compare`
// and all their configurable flags.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::clean_use_case::CleanConfig;
use crate::application::compare_use_case::CompareConfig;
use crate::application::inspect_use_case::InspectConfig;
use crate::domain::policy::NormalizationPolicy;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove empty and duplicate records, write the cleaned corpus and a report
    Clean(CleanArgs),

    /// Repeat a cleaning run from its saved `<corpus>_config.json`
    Rerun(RerunArgs),

    /// Audit a corpus without modifying it
    Inspect(InspectArgs),

    /// Compare the original corpus with the original+augmented corpus
    Compare(CompareArgs),
}

/// Flags shared by every command that reads a corpus file
#[derive(Args, Debug)]
pub struct FieldArgs {
    /// How texts are compared: exact, trim, or collapse
    #[arg(long, default_value = "collapse")]
    pub policy: NormalizationPolicy,

    /// JSON field holding the text (.jsonl input only)
    #[arg(long, default_value = "text")]
    pub text_field: String,

    /// JSON field holding the class label (.jsonl input only)
    #[arg(long, default_value = "label")]
    pub label_field: String,
}

#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Corpus file (.jsonl, or plain text with one record per line)
    #[arg(long)]
    pub input: String,

    /// Where to write the cleaned corpus
    /// (default: <report-dir>/<name>_cleaned.<ext>)
    #[arg(long)]
    pub output: Option<String>,

    /// Directory for the JSON report, saved config, and run log
    #[arg(long, default_value = "reports")]
    pub report_dir: String,

    /// Corpus name used in reports (default: input file stem)
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub fields: FieldArgs,
}

impl From<CleanArgs> for CleanConfig {
    fn from(a: CleanArgs) -> Self {
        CleanConfig {
            input:       a.input,
            output:      a.output,
            report_dir:  a.report_dir,
            name:        a.name,
            policy:      a.fields.policy,
            text_field:  a.fields.text_field,
            label_field: a.fields.label_field,
        }
    }
}

#[derive(Args, Debug)]
pub struct RerunArgs {
    /// Config file written by an earlier `clean` run
    #[arg(long)]
    pub config: String,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Corpus file to audit
    #[arg(long)]
    pub input: String,

    /// How many of the most repeated texts to list
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    #[command(flatten)]
    pub fields: FieldArgs,
}

impl From<InspectArgs> for InspectConfig {
    fn from(a: InspectArgs) -> Self {
        InspectConfig {
            input:       a.input,
            policy:      a.fields.policy,
            top_n:       a.top,
            text_field:  a.fields.text_field,
            label_field: a.fields.label_field,
        }
    }
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Original corpus (or its saved report with --from-reports)
    #[arg(long)]
    pub original: String,

    /// Original+augmented corpus (or its saved report with --from-reports)
    #[arg(long)]
    pub combined: String,

    /// Read both paths as `<corpus>_cleaning.json` reports
    #[arg(long)]
    pub from_reports: bool,

    #[command(flatten)]
    pub fields: FieldArgs,
}

impl From<CompareArgs> for CompareConfig {
    fn from(a: CompareArgs) -> Self {
        CompareConfig {
            original:     a.original,
            combined:     a.combined,
            from_reports: a.from_reports,
            policy:       a.fields.policy,
            text_field:   a.fields.text_field,
            label_field:  a.fields.label_field,
        }
    }
}
