use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::assembly::config::AssemblyConfig;
use crate::core::contig::Contig;
use crate::core::fragment::Fragment;
use crate::core::sequence::Sequence;
use crate::matching::overlap::{best_overlap, best_overlap_with_error};
use crate::utils::validation::ValidationError;

#[derive(Error, Debug)]
pub enum AssemblyError {
    #[error("No reads to assemble")]
    EmptyPool,

    #[error(transparent)]
    InvalidConfig(#[from] ValidationError),

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}

/// The read chosen to extend the contig
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Position in the candidate pool
    pub index: usize,
    /// Overlap with the contig, as measured by the selection matcher
    pub overlap: usize,
}

/// One successful fusion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FusionStep {
    /// Pool position of the fused read at the time it was selected
    pub pool_index: usize,
    /// Overlap that won the selection (tolerant when an error rate is set)
    pub overlap: usize,
    /// Exact overlap used as the splice point
    pub splice: usize,
    /// Reads left in the pool after this fusion
    pub remaining: usize,
}

/// Outcome of a full assembly run
#[derive(Debug, Clone, Serialize)]
pub struct AssemblyReport {
    /// Final contig
    pub contig: Contig,
    /// Fusions in the order they happened
    pub steps: Vec<FusionStep>,
    /// Reads that never reached the overlap threshold, in input order
    pub unassembled: Vec<Fragment>,
}

/// Overlap of `fragment` against `contig`: exact when `error_rate` is zero,
/// error-tolerant otherwise
#[must_use]
pub fn candidate_overlap(contig: &Contig, fragment: &Fragment, error_rate: f64) -> usize {
    if error_rate == 0.0 {
        best_overlap(contig.sequence(), fragment.sequence())
    } else {
        best_overlap_with_error(contig.sequence(), fragment.sequence(), error_rate)
    }
}

/// Find the read that best extends `contig`.
///
/// Reads are scanned in pool order and only a strictly greater overlap
/// replaces the current best, so among equal overlaps the lowest index wins.
/// Returns `None` when the best overlap is below `min_overlap` or the pool
/// is empty.
#[must_use]
pub fn select_best_candidate(
    contig: &Contig,
    pool: &[Fragment],
    error_rate: f64,
    min_overlap: usize,
) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for (index, fragment) in pool.iter().enumerate() {
        let overlap = candidate_overlap(contig, fragment, error_rate);
        if best.map_or(true, |b| overlap > b.overlap) {
            best = Some(Candidate { index, overlap });
        }
    }
    best.filter(|c| c.overlap >= min_overlap)
}

/// Parallel form of [`select_best_candidate`].
///
/// The reduction orders candidates by overlap and then by reverse index, so
/// no two candidates compare equal and the winner is the same as the
/// sequential scan regardless of scheduling.
#[must_use]
pub fn par_select_best_candidate(
    contig: &Contig,
    pool: &[Fragment],
    error_rate: f64,
    min_overlap: usize,
) -> Option<Candidate> {
    pool.par_iter()
        .enumerate()
        .map(|(index, fragment)| Candidate {
            index,
            overlap: candidate_overlap(contig, fragment, error_rate),
        })
        .max_by(|a, b| {
            a.overlap
                .cmp(&b.overlap)
                .then_with(|| b.index.cmp(&a.index))
        })
        .filter(|c| c.overlap >= min_overlap)
}

/// Extend `contig` with `fragment` at their exact overlap.
///
/// The splice point is always the exact overlap, even when the read was
/// selected with a tolerant matcher; an imperfect overlap splices at zero.
#[must_use]
pub fn fuse(contig: &Contig, fragment: &Fragment) -> Contig {
    let splice = best_overlap(contig.sequence(), fragment.sequence());
    contig.extended(fragment, splice)
}

/// Greedy single-contig assembler
pub struct GreedyAssembler {
    config: AssemblyConfig,
    /// Dedicated pool when a fixed thread count above one is requested
    thread_pool: Option<rayon::ThreadPool>,
}

impl GreedyAssembler {
    /// Create an assembler, validating the configuration
    ///
    /// # Errors
    ///
    /// Returns `AssemblyError::InvalidConfig` if a parameter is out of range,
    /// or `AssemblyError::ThreadPool` if the worker pool cannot be created.
    pub fn new(config: AssemblyConfig) -> Result<Self, AssemblyError> {
        config.validate()?;

        let thread_pool = if config.threads > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(config.threads)
                .build()
                .map_err(|e| AssemblyError::ThreadPool(e.to_string()))?;
            Some(pool)
        } else {
            None
        };

        Ok(Self {
            config,
            thread_pool,
        })
    }

    #[must_use]
    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    /// Pick the next read for `contig` using the configured strategy
    #[must_use]
    pub fn select(&self, contig: &Contig, pool: &[Fragment]) -> Option<Candidate> {
        let AssemblyConfig {
            error_rate,
            min_overlap,
            threads,
        } = self.config;

        match (&self.thread_pool, threads) {
            (Some(workers), _) => {
                workers.install(|| par_select_best_candidate(contig, pool, error_rate, min_overlap))
            }
            (None, 0) => par_select_best_candidate(contig, pool, error_rate, min_overlap),
            (None, _) => select_best_candidate(contig, pool, error_rate, min_overlap),
        }
    }

    /// Assemble `fragments` into a single contig.
    ///
    /// The first read seeds the contig. Each step removes the best candidate
    /// from the pool and fuses it, until no remaining read overlaps the
    /// contig by at least the threshold. At most `fragments.len() - 1` steps
    /// are performed.
    ///
    /// # Errors
    ///
    /// Returns `AssemblyError::EmptyPool` if `fragments` is empty.
    pub fn assemble(&self, fragments: Vec<Fragment>) -> Result<AssemblyReport, AssemblyError> {
        let mut pool = fragments;
        if pool.is_empty() {
            return Err(AssemblyError::EmptyPool);
        }

        let mut contig = Contig::seed(pool.remove(0));
        let mut steps = Vec::new();

        debug!(
            reads = pool.len() + 1,
            error_rate = self.config.error_rate,
            min_overlap = self.config.min_overlap,
            "Starting assembly"
        );

        while let Some(candidate) = self.select(&contig, &pool) {
            // Vec::remove keeps the remaining reads in input order
            let fragment = pool.remove(candidate.index);
            let fused = fuse(&contig, &fragment);
            let splice = contig.length() + fragment.length() - fused.length();

            debug!(
                index = candidate.index,
                overlap = candidate.overlap,
                splice,
                remaining = pool.len(),
                "Fused read into contig"
            );

            steps.push(FusionStep {
                pool_index: candidate.index,
                overlap: candidate.overlap,
                splice,
                remaining: pool.len(),
            });
            contig = fused;
        }

        info!(
            reads = contig.read_count(),
            length = contig.length(),
            unassembled = pool.len(),
            "Assembly finished"
        );

        Ok(AssemblyReport {
            contig,
            steps,
            unassembled: pool,
        })
    }
}

/// Assemble `fragments` with `config`
///
/// # Errors
///
/// Returns the errors of [`GreedyAssembler::new`] and
/// [`GreedyAssembler::assemble`].
pub fn assemble(
    fragments: Vec<Fragment>,
    config: AssemblyConfig,
) -> Result<AssemblyReport, AssemblyError> {
    GreedyAssembler::new(config)?.assemble(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments(seqs: &[&str]) -> Vec<Fragment> {
        seqs.iter().map(|s| Fragment::from(*s)).collect()
    }

    fn exact() -> AssemblyConfig {
        AssemblyConfig::default()
    }

    #[test]
    fn test_overlap_below_threshold_leaves_seed() {
        let report = assemble(fragments(&["ABCDEFGH", "EFGHIJKL"]), exact()).unwrap();
        assert_eq!(report.contig.to_string(), "ABCDEFGH");
        assert_eq!(report.contig.fusions(), 0);
        assert!(report.steps.is_empty());
        assert_eq!(report.unassembled, fragments(&["EFGHIJKL"]));
    }

    #[test]
    fn test_overlap_of_six_does_not_fuse() {
        let report =
            assemble(fragments(&["AAAAAAAABCDEFGHI", "DEFGHIJKLMNOPQRS"]), exact()).unwrap();
        assert_eq!(report.contig.to_string(), "AAAAAAAABCDEFGHI");
        assert_eq!(report.contig.fusions(), 0);
    }

    #[test]
    fn test_overlap_of_eight_fuses() {
        let report =
            assemble(fragments(&["AAAAAAAAABCDEFGH", "ABCDEFGHJJJJJJJJJ"]), exact()).unwrap();
        assert_eq!(report.contig.to_string(), "AAAAAAAAABCDEFGHJJJJJJJJJ");
        assert_eq!(report.contig.fusions(), 1);
        assert_eq!(
            report.steps,
            vec![FusionStep {
                pool_index: 0,
                overlap: 8,
                splice: 8,
                remaining: 0,
            }]
        );
        assert!(report.unassembled.is_empty());
    }

    #[test]
    fn test_single_read() {
        let report = assemble(fragments(&["ACGTACGT"]), exact()).unwrap();
        assert_eq!(report.contig.to_string(), "ACGTACGT");
        assert_eq!(report.contig.fusions(), 0);
        assert!(report.steps.is_empty());
    }

    #[test]
    fn test_empty_pool_is_rejected() {
        assert!(matches!(
            assemble(Vec::new(), exact()),
            Err(AssemblyError::EmptyPool)
        ));
    }

    #[test]
    fn test_invalid_error_rate_is_rejected() {
        let result = GreedyAssembler::new(exact().with_error_rate(-0.5));
        assert!(matches!(result, Err(AssemblyError::InvalidConfig(_))));
    }

    #[test]
    fn test_chain_of_reads_out_of_order() {
        let report = assemble(
            fragments(&[
                "AAAAAAAAAACCCCCCCCCC",
                "GGGGGGGGGGTTTTTTTTTT",
                "CCCCCCCCCCGGGGGGGGGG",
            ]),
            exact(),
        )
        .unwrap();
        assert_eq!(
            report.contig.to_string(),
            "AAAAAAAAAACCCCCCCCCCGGGGGGGGGGTTTTTTTTTT"
        );
        assert_eq!(report.contig.fusions(), 2);
        assert_eq!(report.steps[0].pool_index, 1);
        assert_eq!(report.steps[1].pool_index, 0);
    }

    #[test]
    fn test_tie_break_prefers_lowest_index() {
        let contig = Contig::seed(Fragment::from("XXXXABCDEFGH"));
        let pool = fragments(&["QQQQQQQQ", "ABCDEFGHIIII", "ABCDEFGHJJJJ"]);
        let best = select_best_candidate(&contig, &pool, 0.0, 8).unwrap();
        assert_eq!(best, Candidate { index: 1, overlap: 8 });
    }

    #[test]
    fn test_longest_overlap_wins_over_order() {
        let contig = Contig::seed(Fragment::from("TTTTACGTACGTAC"));
        let pool = fragments(&["ACGTACGTCCCC", "TACGTACGTACAAA"]);
        let best = select_best_candidate(&contig, &pool, 0.0, 8).unwrap();
        assert_eq!(best, Candidate { index: 1, overlap: 11 });
    }

    #[test]
    fn test_selection_is_deterministic() {
        let contig = Contig::seed(Fragment::from("XXXXABCDEFGH"));
        let pool = fragments(&["ABCDEFGHIIII", "ABCDEFGHJJJJ", "EFGHKKKK"]);
        let first = select_best_candidate(&contig, &pool, 0.0, 8);
        let second = select_best_candidate(&contig, &pool, 0.0, 8);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_pool_selects_nothing() {
        let contig = Contig::seed(Fragment::from("ACGTACGTACGT"));
        assert_eq!(select_best_candidate(&contig, &[], 0.0, 8), None);
        assert_eq!(par_select_best_candidate(&contig, &[], 0.0, 8), None);
    }

    #[test]
    fn test_parallel_selection_matches_sequential() {
        let contig = Contig::seed(Fragment::from("GGGGABCDEFGHIJ"));
        let pool = fragments(&[
            "CDEFGHIJKK",
            "ABCDEFGHIJLL",
            "ZZZZ",
            "ABCDEFGHIJMM",
            "EFGHIJNN",
            "ABCDEFGHIJOO",
        ]);
        for error_rate in [0.0, 0.1, 0.5] {
            assert_eq!(
                par_select_best_candidate(&contig, &pool, error_rate, 8),
                select_best_candidate(&contig, &pool, error_rate, 8)
            );
        }
        assert_eq!(
            par_select_best_candidate(&contig, &pool, 0.0, 8),
            Some(Candidate { index: 1, overlap: 10 })
        );
    }

    #[test]
    fn test_threaded_assembler_matches_sequential() {
        let reads = fragments(&[
            "AAAAAAAAAACCCCCCCCCC",
            "GGGGGGGGGGTTTTTTTTTT",
            "CCCCCCCCCCGGGGGGGGGG",
            "CCCCCCCCCCGGGGGGGGGA",
        ]);
        let sequential = assemble(reads.clone(), exact()).unwrap();
        let threaded = assemble(reads.clone(), exact().with_threads(3)).unwrap();
        let global = assemble(reads, exact().with_threads(0)).unwrap();

        assert_eq!(threaded.contig, sequential.contig);
        assert_eq!(threaded.steps, sequential.steps);
        assert_eq!(global.contig, sequential.contig);
    }

    #[test]
    fn test_tolerant_selection_accepts_half_mismatches() {
        let contig = Contig::seed(Fragment::from("XXXXABCDEFGH"));
        // 4 of 8 positions differ
        let pool = fragments(&["ABCDWXYZQQQQ"]);
        let best = select_best_candidate(&contig, &pool, 0.5, 8);
        assert_eq!(best, Some(Candidate { index: 0, overlap: 8 }));

        // 5 of 8 positions differ
        let pool = fragments(&["ABCVWXYZQQQQ"]);
        assert_eq!(select_best_candidate(&contig, &pool, 0.5, 8), None);
    }

    #[test]
    fn test_tolerant_fusion_splices_at_exact_overlap() {
        let report = assemble(
            fragments(&["XXXXABCDEFGH", "ABCDWXYZQQQQ"]),
            exact().with_error_rate(0.5),
        )
        .unwrap();
        // Selected with an 8-symbol tolerant overlap, spliced at the exact overlap (0)
        assert_eq!(report.contig.to_string(), "XXXXABCDEFGHABCDWXYZQQQQ");
        assert_eq!(report.contig.fusions(), 1);
        assert_eq!(report.steps[0].overlap, 8);
        assert_eq!(report.steps[0].splice, 0);
    }

    #[test]
    fn test_fuse_length_and_count() {
        let contig = Contig::new("AAAAAAAAABCDEFGH", 3);
        let fragment = Fragment::from("ABCDEFGHJJJJJJJJJ");
        let fused = fuse(&contig, &fragment);
        assert_eq!(
            fused.length(),
            contig.length() + fragment.length()
                - best_overlap(contig.sequence(), fragment.sequence())
        );
        assert_eq!(fused.fusions(), 4);
    }

    #[test]
    fn test_fuse_without_overlap_concatenates() {
        let fused = fuse(&Contig::new("AAAA", 0), &Fragment::from("CCCC"));
        assert_eq!(fused.to_string(), "AAAACCCC");
    }

    #[test]
    fn test_custom_threshold() {
        let reads = fragments(&["ABCDEFGH", "EFGHIJKL"]);
        let report = assemble(reads, exact().with_min_overlap(4)).unwrap();
        assert_eq!(report.contig.to_string(), "ABCDEFGHIJKL");
        assert_eq!(report.contig.fusions(), 1);
    }
}
