//! Suffix/prefix overlap between a contig and a read.
//!
//! Both matchers return the length `k` of the longest suffix of the contig
//! that matches the first `k` symbols of the read. A zero-length overlap
//! always matches, so the result is `0` at worst.

/// Safely convert usize to f64 for ratio calculations
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Length of the longest exact suffix(`contig`) / prefix(`read`) match.
///
/// Runs the prefix function of the read's first `min(|contig|, |read|)`
/// symbols over the same number of trailing contig symbols, so the result is
/// the maximal `k` a top-down scan would find, in linear time.
///
/// # Examples
///
/// ```
/// use greedy_assembler::matching::overlap::best_overlap;
///
/// assert_eq!(best_overlap(b"ABCDEFGH", b"EFGHIJKL"), 4);
/// assert_eq!(best_overlap(b"ABCD", b"WXYZ"), 0);
/// ```
#[must_use]
pub fn best_overlap(contig: &[u8], read: &[u8]) -> usize {
    let max_k = contig.len().min(read.len());
    if max_k == 0 {
        return 0;
    }

    let pattern = &read[..max_k];
    let failure = prefix_function(pattern);

    let mut state = 0;
    for &symbol in &contig[contig.len() - max_k..] {
        while state > 0 && (state == pattern.len() || pattern[state] != symbol) {
            state = failure[state - 1];
        }
        if pattern[state] == symbol {
            state += 1;
        }
    }
    state
}

/// Length of the longest suffix(`contig`) / prefix(`read`) match where at
/// most `error_rate` of the aligned positions may differ.
///
/// Candidate lengths are tried from longest to shortest and the first one
/// whose mismatch ratio is `<= error_rate` wins. With `error_rate == 0.0`
/// this agrees with [`best_overlap`].
///
/// # Examples
///
/// ```
/// use greedy_assembler::matching::overlap::best_overlap_with_error;
///
/// // 4 of 8 positions differ: accepted at 50%
/// assert_eq!(best_overlap_with_error(b"ABCDEFGH", b"ABCDWXYZ", 0.5), 8);
/// assert_eq!(best_overlap_with_error(b"ABCDEFGH", b"ABCDWXYZ", 0.0), 0);
/// ```
#[must_use]
pub fn best_overlap_with_error(contig: &[u8], read: &[u8], error_rate: f64) -> usize {
    let max_k = contig.len().min(read.len());

    (1..=max_k)
        .rev()
        .find(|&k| within_error_rate(&contig[contig.len() - k..], &read[..k], error_rate))
        .unwrap_or(0)
}

/// Number of positions at which two spans differ, over their common length
#[must_use]
pub fn mismatches(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

/// True when the positional mismatch ratio of two equal-length spans is at
/// most `error_rate`. Empty spans always match.
fn within_error_rate(suffix: &[u8], prefix: &[u8], error_rate: f64) -> bool {
    debug_assert_eq!(suffix.len(), prefix.len());

    let k = suffix.len();
    if k == 0 {
        return true;
    }

    let mut diff = 0;
    for (a, b) in suffix.iter().zip(prefix) {
        if a != b {
            diff += 1;
            // The ratio only grows, so stop as soon as it is exceeded
            if count_to_f64(diff) / count_to_f64(k) > error_rate {
                return false;
            }
        }
    }
    true
}

/// True when two sequences differ by at most one symbol, counting each
/// position past the end of the shorter one as a difference.
///
/// Not used by the overlap search; the assembler only compares equal-length
/// spans.
#[must_use]
pub fn within_one_mismatch(a: &[u8], b: &[u8]) -> bool {
    let length_difference = a.len().abs_diff(b.len());
    mismatches(a, b) + length_difference <= 1
}

/// KMP failure table: `pi[i]` is the length of the longest proper prefix of
/// `pattern[..=i]` that is also a suffix of it
fn prefix_function(pattern: &[u8]) -> Vec<usize> {
    let mut pi = vec![0; pattern.len()];
    let mut k = 0;
    for i in 1..pattern.len() {
        while k > 0 && pattern[i] != pattern[k] {
            k = pi[k - 1];
        }
        if pattern[i] == pattern[k] {
            k += 1;
        }
        pi[i] = k;
    }
    pi
}
