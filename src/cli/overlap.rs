use clap::Args;

use crate::assembly::assembler::{candidate_overlap, fuse};
use crate::cli::OutputFormat;
use crate::core::contig::Contig;
use crate::core::fragment::Fragment;
use crate::core::sequence::{Sequence, DEFAULT_LINE_WIDTH};
use crate::matching::overlap::best_overlap;
use crate::utils::validation::parse_error_rate;

#[derive(Args)]
pub struct OverlapArgs {
    /// Contig sequence (its suffix is matched)
    #[arg(required = true)]
    pub contig: String,

    /// Read sequence (its prefix is matched)
    #[arg(required = true)]
    pub read: String,

    /// Fraction of mismatched symbols tolerated inside the overlap (0-1)
    #[arg(short, long, default_value = "0", value_parser = parse_error_rate)]
    pub error_rate: f64,

    /// Minimum overlap, in symbols, needed to fuse the read
    #[arg(long, default_value = "8", value_parser = clap::value_parser!(u32).range(1..))]
    pub min_overlap: u32,
}

/// Overlap between one contig and one read, as the assembler would see it
struct OverlapSummary {
    exact: usize,
    selection: usize,
    qualifies: bool,
    fused: Contig,
}

impl OverlapSummary {
    fn compute(args: &OverlapArgs) -> Self {
        let contig = Contig::new(args.contig.as_bytes(), 0);
        let read = Fragment::from(args.read.as_str());

        let exact = best_overlap(contig.sequence(), read.sequence());
        let selection = candidate_overlap(&contig, &read, args.error_rate);
        let fused = fuse(&contig, &read);

        Self {
            exact,
            selection,
            qualifies: selection >= args.min_overlap as usize,
            fused,
        }
    }
}

/// Execute overlap subcommand
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: OverlapArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let summary = OverlapSummary::compute(&args);

    if verbose {
        eprintln!(
            "Contig: {} symbols, read: {} symbols",
            args.contig.len(),
            args.read.len()
        );
    }

    match format {
        OutputFormat::Text => print_text_overlap(&args, &summary),
        OutputFormat::Json => print_json_overlap(&args, &summary)?,
        OutputFormat::Fasta => print_fasta_overlap(&summary),
    }

    Ok(())
}

fn print_text_overlap(args: &OverlapArgs, summary: &OverlapSummary) {
    println!("Overlap Results");
    println!("{}", "=".repeat(60));
    println!("  Exact overlap: {}", summary.exact);
    if args.error_rate > 0.0 {
        println!(
            "  Overlap at {:.1}% error: {}",
            args.error_rate * 100.0,
            summary.selection
        );
    }
    println!(
        "  Fuses (min overlap {}): {}",
        args.min_overlap,
        if summary.qualifies { "yes" } else { "no" }
    );
    println!("  Fused sequence: {}", summary.fused);
}

fn print_json_overlap(args: &OverlapArgs, summary: &OverlapSummary) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "contig_length": args.contig.len(),
        "read_length": args.read.len(),
        "error_rate": args.error_rate,
        "min_overlap": args.min_overlap,
        "exact_overlap": summary.exact,
        "selection_overlap": summary.selection,
        "qualifies": summary.qualifies,
        "fused": summary.fused.to_text(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_fasta_overlap(summary: &OverlapSummary) {
    println!(
        ">fused overlap={} length={}",
        summary.exact,
        summary.fused.length()
    );
    print!("{}", summary.fused.wrapped(DEFAULT_LINE_WIDTH));
}
