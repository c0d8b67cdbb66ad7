use crate::utils::format::wrap_lines;

/// Default number of symbols per line when displaying a sequence
pub const DEFAULT_LINE_WIDTH: usize = 60;

/// Anything that carries a raw symbol sequence
pub trait Sequence {
    /// The raw symbols
    fn sequence(&self) -> &[u8];

    /// Number of symbols
    fn length(&self) -> usize {
        self.sequence().len()
    }

    /// Sequence split into newline-terminated lines of at most `width` symbols
    fn wrapped(&self, width: usize) -> String {
        wrap_lines(self.sequence(), width)
    }

    /// Sequence as text, replacing non-UTF-8 bytes
    fn to_text(&self) -> String {
        String::from_utf8_lossy(self.sequence()).into_owned()
    }
}
