//! Block-based sequence matching
//!
//! The matcher decomposes a pair of sequences into maximal contiguous
//! matching blocks and derives from them a canonical stream of edit
//! opcodes. Everything else in this crate (the renderers, the similarity
//! ratio, the nearest-match helpers) is defined over that stream.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;


/// The kind of edit needed to turn one segment into another.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// The segment is identical in both sequences
    Equal,
    /// The segment was inserted into `b`
    Insert,
    /// The segment was deleted from `a`
    Delete,
    /// The segment differs between `a` and `b`
    Replace,
}

impl Op {
    /// Returns the canonical lowercase name of the operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Op::Equal => "equal",
            Op::Insert => "insert",
            Op::Delete => "delete",
            Op::Replace => "replace",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single edit operation over contiguous index ranges of both sequences.
///
/// `[i1, i2)` is a half-open range in `a` and `[j1, j2)` a half-open range
/// in `b`. Consecutive opcodes chain: each one starts where the previous
/// one ended on both sides, so a full opcode list tiles `a` and `b` without
/// gaps or overlap.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OpCode {
    pub tag: Op,
    pub i1: usize,
    pub i2: usize,
    pub j1: usize,
    pub j2: usize,
}

/// A contiguous run where `a[a..a + size] == b[b..b + size]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SequenceMatch {
    /// Start index of the block in `a`
    pub a: usize,
    /// Start index of the block in `b`
    pub b: usize,
    /// Length of the block
    pub size: usize,
}

/// Compares a pair of sequences element by element.
///
/// The element type only needs `Eq + Hash`, so the same engine serves line
/// sequences (`&str`) and code-point sequences (`char`). A matcher borrows
/// both inputs and builds an occurrence index over `b` on construction;
/// all queries afterwards are read-only.
///
/// ```
/// use textdiff::SequenceMatcher;
///
/// let a = ["foo\n", "bar\n", "baz\n"];
/// let b = ["foo\n", "BAR\n", "baz\n"];
/// let matcher = SequenceMatcher::new(&a, &b);
/// assert_eq!(matcher.ratio(), 2.0 * 2.0 / 6.0);
/// ```
pub struct SequenceMatcher<'a, T> {
    a: &'a [T],
    b: &'a [T],
    b2j: HashMap<&'a T, Vec<usize>>,
}

impl<'a, T: Eq + Hash> SequenceMatcher<'a, T> {
    /// Construct a matcher over `a` and `b`.
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        let mut b2j: HashMap<&'a T, Vec<usize>> = HashMap::with_capacity(b.len());
        for (j, item) in b.iter().enumerate() {
            b2j.entry(item).or_default().push(j);
        }
        Self { a, b, b2j }
    }

    /// Find the leftmost longest matching block within
    /// `a[alo..ahi]` × `b[blo..bhi]`.
    ///
    /// Returns `SequenceMatch { a: alo, b: blo, size: 0 }` if the
    /// subranges share no elements. Of all maximal blocks, the one starting
    /// earliest in `a` wins, and of those, the one starting earliest in
    /// `b`: the running best is only ever replaced by a strictly longer
    /// match.
    pub fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> SequenceMatch {
        let mut best = SequenceMatch {
            a: alo,
            b: blo,
            size: 0,
        };

        // One row per position of `a`: j2len[j] is the length of the run
        // ending at b[j] against the previous row.
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut row = HashMap::new();
            let positions = self
                .b2j
                .get(&self.a[i])
                .map(Vec::as_slice)
                .unwrap_or_default();
            for &j in positions {
                // Occurrence lists are ascending
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let k = j
                    .checked_sub(1)
                    .and_then(|prev| j2len.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                row.insert(j, k);
                if k > best.size {
                    best = SequenceMatch {
                        a: i + 1 - k,
                        b: j + 1 - k,
                        size: k,
                    };
                }
            }
            j2len = row;
        }

        best
    }

    /// Decompose the full range into matching blocks.
    ///
    /// Blocks are returned in ascending order of both coordinates, merged
    /// so that no two consecutive blocks are adjacent on both sides, and
    /// terminated by a zero-size sentinel at `(a.len(), b.len())`.
    pub fn get_matching_blocks(&self) -> Vec<SequenceMatch> {
        // Recursion over subranges, made iterative with an explicit work
        // stack. Processing order does not matter: the raw list is sorted
        // before merging.
        let mut stack = vec![(0, self.a.len(), 0, self.b.len())];
        let mut raw = Vec::new();
        while let Some((alo, ahi, blo, bhi)) = stack.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.size == 0 {
                continue;
            }
            if alo < m.a && blo < m.b {
                stack.push((alo, m.a, blo, m.b));
            }
            if m.a + m.size < ahi && m.b + m.size < bhi {
                stack.push((m.a + m.size, ahi, m.b + m.size, bhi));
            }
            raw.push(m);
        }
        raw.sort_by_key(|m| (m.a, m.b));

        let mut blocks: Vec<SequenceMatch> = Vec::with_capacity(raw.len() + 1);
        for m in raw {
            match blocks.last_mut() {
                Some(last) if last.a + last.size == m.a && last.b + last.size == m.b => {
                    last.size += m.size;
                }
                _ => blocks.push(m),
            }
        }
        blocks.push(SequenceMatch {
            a: self.a.len(),
            b: self.b.len(),
            size: 0,
        });
        blocks
    }

    /// Derive the opcode stream from the matching blocks.
    ///
    /// The returned opcodes tile `a` and `b` completely: equal opcodes
    /// cover the matching blocks, and the gaps between them are classified
    /// as `Replace`, `Delete`, or `Insert` depending on which sides are
    /// non-empty.
    pub fn get_opcodes(&self) -> Vec<OpCode> {
        let mut codes = Vec::new();
        let (mut i, mut j) = (0, 0);
        for m in self.get_matching_blocks() {
            let tag = if i < m.a && j < m.b {
                Some(Op::Replace)
            } else if i < m.a {
                Some(Op::Delete)
            } else if j < m.b {
                Some(Op::Insert)
            } else {
                None
            };
            if let Some(tag) = tag {
                codes.push(OpCode {
                    tag,
                    i1: i,
                    i2: m.a,
                    j1: j,
                    j2: m.b,
                });
            }
            i = m.a + m.size;
            j = m.b + m.size;
            if m.size > 0 {
                codes.push(OpCode {
                    tag: Op::Equal,
                    i1: m.a,
                    i2: i,
                    j1: m.b,
                    j2: j,
                });
            }
        }
        codes
    }

    /// Similarity of the two sequences as `2·M / (len(a) + len(b))`,
    /// where `M` is the total size of the matching blocks.
    ///
    /// Returns a value in `[0.0, 1.0]`; two empty sequences are considered
    /// identical and score `1.0`.
    pub fn ratio(&self) -> f64 {
        let matched: usize = self.get_matching_blocks().iter().map(|m| m.size).sum();
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        2.0 * matched as f64 / total as f64
    }
}

/// Returns the matching blocks between two sequences.
///
/// Convenience wrapper over [`SequenceMatcher::get_matching_blocks`].
pub fn get_matching_blocks<T: Eq + Hash>(a: &[T], b: &[T]) -> Vec<SequenceMatch> {
    SequenceMatcher::new(a, b).get_matching_blocks()
}

/// Returns the opcodes describing how to transform `a` into `b`.
///
/// Convenience wrapper over [`SequenceMatcher::get_opcodes`].
///
/// ```
/// use textdiff::{get_opcodes, Op};
///
/// let a = ["foo\n", "bar\n"];
/// let b = ["foo\n", "baz\n"];
/// let codes = get_opcodes(&a, &b);
/// assert_eq!(codes[0].tag, Op::Equal);
/// assert_eq!(codes[1].tag, Op::Replace);
/// ```
pub fn get_opcodes<T: Eq + Hash>(a: &[T], b: &[T]) -> Vec<OpCode> {
    SequenceMatcher::new(a, b).get_opcodes()
}
