//! Vocabulary table storage and lookup.
//!
//! The table is append-only and doubles as the merge history: the first
//! 256 entries are the literal byte alphabet, every later entry records
//! the pair of symbols that was merged to create it, and a symbol's id
//! is its index into the table.

/// A symbol id: 0-255 are literal bytes, 256 and up are merged pairs.
pub type Symbol = u32;

/// An ordered pair of adjacent symbols.
pub type Pair = (Symbol, Symbol);

/// Number of literal byte entries every table starts with.
pub const BASE_VOCAB_SIZE: usize = 256;

/// One vocabulary entry.
///
/// Base entries are self-referential (`left == right == index`), which
/// is how consumers tell a literal byte apart from a merged pair.
/// Merged entries hold the two symbols that were merged, both strictly
/// smaller than the entry's own index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabEntry {
    /// Left symbol of the merged pair (or the byte value itself)
    pub left: Symbol,
    /// Right symbol of the merged pair (or the byte value itself)
    pub right: Symbol,
}

impl VocabEntry {
    /// Create an entry from a symbol pair.
    pub fn new(left: Symbol, right: Symbol) -> Self {
        Self { left, right }
    }

    /// Create the self-referential base entry for a literal byte.
    pub fn base(byte: u8) -> Self {
        let sym = byte as Symbol;
        Self {
            left: sym,
            right: sym,
        }
    }
}

/// Ordered vocabulary table, indexed by symbol id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabTable {
    entries: Vec<VocabEntry>,
}

impl VocabTable {
    /// Create a table holding exactly the 256 base entries.
    pub fn new() -> Self {
        let entries = (0..=u8::MAX).map(VocabEntry::base).collect();
        Self { entries }
    }

    /// Build a table directly from decoded entries.
    ///
    /// The codec uses this to reconstruct a previously trained table;
    /// no structural validation is performed beyond what the record
    /// format guarantees.
    pub(crate) fn from_entries(entries: Vec<VocabEntry>) -> Self {
        Self { entries }
    }

    /// Append a merged pair, returning the id assigned to it.
    pub fn push_merge(&mut self, left: Symbol, right: Symbol) -> Symbol {
        let id = self.entries.len() as Symbol;
        self.entries.push(VocabEntry::new(left, right));
        id
    }

    /// Get the entry for a symbol id.
    #[inline]
    pub fn get(&self, sym: Symbol) -> Option<VocabEntry> {
        self.entries.get(sym as usize).copied()
    }

    /// Number of entries in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of merged (non-base) entries.
    #[inline]
    pub fn merge_count(&self) -> usize {
        self.entries.len().saturating_sub(BASE_VOCAB_SIZE)
    }

    /// All entries in index order.
    #[inline]
    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    /// Check whether a symbol stands for a literal byte.
    ///
    /// Base entries point at themselves; a merged entry can never
    /// reference its own index.
    #[inline]
    pub fn is_literal(&self, sym: Symbol) -> bool {
        matches!(self.get(sym), Some(entry) if entry.left == sym)
    }

    /// Expand a symbol back into the byte string it stands for.
    ///
    /// Walks the merge tree iteratively; symbols missing from the
    /// table expand to nothing.
    pub fn expand(&self, sym: Symbol) -> Vec<u8> {
        let mut bytes = Vec::new();
        let mut stack = vec![sym];

        while let Some(sym) = stack.pop() {
            if self.is_literal(sym) {
                bytes.push(sym as u8);
            } else if let Some(entry) = self.get(sym) {
                // Right first so the left half is expanded first.
                stack.push(entry.right);
                stack.push(entry.left);
            }
        }

        bytes
    }

    /// Format a symbol for human display.
    ///
    /// Literal bytes render as themselves (escaped when not printable),
    /// merged symbols as `[id]`.
    pub fn render(&self, sym: Symbol) -> String {
        if self.is_literal(sym) {
            (sym as u8).escape_ascii().to_string()
        } else {
            format!("[{}]", sym)
        }
    }
}

impl Default for VocabTable {
    fn default() -> Self {
        Self::new()
    }
}
