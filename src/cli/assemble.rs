use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use crate::assembly::{AssemblyConfig, AssemblyReport, GreedyAssembler};
use crate::cli::OutputFormat;
use crate::core::fragment::Fragment;
use crate::core::sequence::Sequence;
use crate::parsing::{fasta, reads};
use crate::utils::validation::parse_error_rate;

#[derive(Args)]
pub struct AssembleArgs {
    /// Reads file (one sequence per line, or FASTA)
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Input format (auto-detected from the extension by default)
    #[arg(long)]
    pub input_format: Option<InputFormat>,

    /// Fraction of mismatched symbols tolerated inside an overlap (0-1, default 0 = exact)
    #[arg(short, long, value_parser = parse_error_rate)]
    pub error_rate: Option<f64>,

    /// Minimum overlap, in symbols, needed to fuse a read (default 8)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub min_overlap: Option<u32>,

    /// Threads used to score reads at each step (0 = all cores, default 1)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Symbols per output line
    #[arg(long, default_value = "60", value_parser = clap::value_parser!(u32).range(1..))]
    pub line_width: u32,

    /// JSON file with assembly settings; command-line flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// One read per line
    Lines,
    /// FASTA records, optionally gzip compressed
    Fasta,
}

/// Execute assemble subcommand
///
/// # Errors
///
/// Returns an error if the input or configuration cannot be read, a setting
/// is out of range, or the input holds no reads.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AssembleArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = build_config(&args)?;
    let fragments = parse_input(&args)?;

    if verbose {
        eprintln!(
            "Parsed {} reads from {} (error rate {}, min overlap {})",
            fragments.len(),
            args.input.display(),
            config.error_rate,
            config.min_overlap,
        );
    }

    let assembler = GreedyAssembler::new(config)?;
    let report = assembler.assemble(fragments)?;

    if verbose {
        eprintln!(
            "{} fusions, {} reads left unassembled",
            report.steps.len(),
            report.unassembled.len()
        );
    }

    let width = args.line_width as usize;
    match format {
        OutputFormat::Text => print_text_report(&report, width),
        OutputFormat::Json => print_json_report(&args, assembler.config(), &report)?,
        OutputFormat::Fasta => print_fasta_report(&report, width),
    }

    Ok(())
}

/// Merge the optional config file with command-line overrides
fn build_config(args: &AssembleArgs) -> anyhow::Result<AssemblyConfig> {
    let mut config = match &args.config {
        Some(path) => AssemblyConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AssemblyConfig::default(),
    };

    if let Some(error_rate) = args.error_rate {
        config.error_rate = error_rate;
    }
    if let Some(min_overlap) = args.min_overlap {
        config.min_overlap = min_overlap as usize;
    }
    if let Some(threads) = args.threads {
        config.threads = threads;
    }

    config.validate()?;
    Ok(config)
}

fn detect_input_format(path: &Path) -> InputFormat {
    if fasta::is_fasta_file(path) {
        InputFormat::Fasta
    } else {
        InputFormat::Lines
    }
}

fn parse_input(args: &AssembleArgs) -> anyhow::Result<Vec<Fragment>> {
    let path = &args.input;
    let format = args
        .input_format
        .unwrap_or_else(|| detect_input_format(path));

    if path.as_os_str() == "-" {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            anyhow::bail!("Expected reads on stdin, but stdin is a terminal");
        }
        let fragments = match format {
            InputFormat::Lines => reads::parse_reads_reader(stdin.lock()),
            InputFormat::Fasta => fasta::parse_fasta_reader(stdin.lock()),
        };
        return fragments.context("Failed to parse reads from stdin");
    }

    let fragments = match format {
        InputFormat::Lines => reads::parse_reads_file(path),
        InputFormat::Fasta => fasta::parse_fasta_file(path),
    };
    fragments.with_context(|| format!("Failed to parse reads from {}", path.display()))
}

fn print_text_report(report: &AssemblyReport, width: usize) {
    println!(
        "Contig obtained with {} reads ({} fusions, {} symbols)",
        report.contig.read_count(),
        report.contig.fusions(),
        report.contig.length()
    );
    print!("{}", report.contig.wrapped(width));
}

fn print_fasta_report(report: &AssemblyReport, width: usize) {
    println!(
        ">contig fusions={} length={}",
        report.contig.fusions(),
        report.contig.length()
    );
    print!("{}", report.contig.wrapped(width));
}

fn print_json_report(
    args: &AssembleArgs,
    config: &AssemblyConfig,
    report: &AssemblyReport,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "input": args.input.display().to_string(),
        "config": config,
        "contig": {
            "sequence": report.contig.to_text(),
            "length": report.contig.length(),
            "fusions": report.contig.fusions(),
            "reads": report.contig.read_count(),
            "md5": report.contig.md5(),
        },
        "steps": report.steps,
        "unassembled": report.unassembled.len(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
