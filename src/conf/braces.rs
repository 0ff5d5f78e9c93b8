//! Brace balance tracking for object blocks and the `overrides` wrapper.

/// Net `{` minus `}` count of a single line.
pub fn brace_delta(line: &str) -> i32 {
    line.chars().fold(0, |delta, c| match c {
        '{' => delta + 1,
        '}' => delta - 1,
        _ => delta,
    })
}

/// Running brace balance of one open block.
///
/// List blocks never use a counter; object blocks and the wrapper each own one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BraceCounter {
    balance: i32,
}

impl BraceCounter {
    /// Counter for a block whose opening brace has already been consumed.
    pub fn opened() -> Self {
        Self { balance: 1 }
    }

    /// Counter seeded from the line that opened the block.
    ///
    /// A block opened and closed on the same line starts balanced.
    pub fn from_line(line: &str) -> Self {
        Self {
            balance: brace_delta(line),
        }
    }

    pub fn balance(&self) -> i32 {
        self.balance
    }

    /// Account for one more line inside the block.
    pub fn feed(&mut self, line: &str) -> i32 {
        self.balance += brace_delta(line);
        self.balance
    }

    /// True once the balance is back to zero on a line carrying a `}`.
    ///
    /// The `}` requirement keeps a counter that is already zero from closing
    /// on an unrelated line.
    pub fn closes_block(&self, line: &str) -> bool {
        self.balance == 0 && line.contains('}')
    }
}
