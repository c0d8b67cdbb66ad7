/// Split `sequence` into consecutive newline-terminated lines of `width`
/// symbols. The last line may be shorter. An empty sequence yields an empty
/// string.
///
/// # Examples
///
/// ```
/// use greedy_assembler::utils::format::wrap_lines;
///
/// assert_eq!(wrap_lines(b"ACGTACGTAC", 4), "ACGT\nACGT\nAC\n");
/// ```
///
/// # Panics
///
/// Panics if `width` is zero.
#[must_use]
pub fn wrap_lines(sequence: &[u8], width: usize) -> String {
    assert!(width > 0, "line width must be positive");

    let mut out = String::with_capacity(sequence.len() + sequence.len() / width + 1);
    for chunk in sequence.chunks(width) {
        out.push_str(&String::from_utf8_lossy(chunk));
        out.push('\n');
    }
    out
}
