//! Diff generation and rendering
//!
//! Builds on the [matcher](crate::matcher) opcode stream: opcodes are
//! grouped into hunks separated by long stretches of equality, and the
//! groups are rendered as unified diffs, context diffs, or ndiff deltas.

use crate::format::DiffFormatter;
use crate::matcher::{Op, OpCode, SequenceMatcher};
use std::{cmp, fmt, mem};


/// Number of context lines shown around each change when the caller does
/// not ask for a specific amount.
const DEFAULT_CONTEXT: usize = 3;

/// Parameters for generating a unified or context diff.
///
/// `a` and `b` are the two line sequences, typically produced by
/// [`split_lines`](crate::split_lines). A `context` of `0` selects the
/// default of 3 lines.
#[derive(Debug, Copy, Clone, Default)]
pub struct DiffInput<'a> {
    /// The original sequence of lines
    pub a: &'a [&'a str],
    /// The modified sequence of lines
    pub b: &'a [&'a str],
    /// Label for the original content (e.g. `a/file.txt`)
    pub from_file: &'a str,
    /// Label for the modified content (e.g. `b/file.txt`)
    pub to_file: &'a str,
    /// Unchanged lines to include around each change; `0` means 3
    pub context: usize,
}

/// A group of changed lines together with its surrounding context.
///
/// `lines` holds the rendered diff body: each entry is an input line with
/// a one-character prefix (`' '`, `'-'`, or `'+'`) and its original
/// terminator carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    /// 1-based start line in the original file
    pub old_start: usize,
    /// Number of original-file lines covered by this hunk
    pub old_lines: usize,
    /// 1-based start line in the new file
    pub new_start: usize,
    /// Number of new-file lines covered by this hunk
    pub new_lines: usize,
    /// Rendered diff lines, prefixed with `' '`, `'-'`, or `'+'`
    pub lines: Vec<String>,
}

/// A complete unified diff between two line sequences.
///
/// Rendered with `Display` (or [`DiffFormatter`] for color). Equal inputs
/// produce no hunks, and a hunk-less result renders to the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffResult {
    /// Label for the original file
    pub from_file: String,
    /// Label for the modified file
    pub to_file: String,
    /// The diff hunks, in order
    pub hunks: Vec<Hunk>,
}

impl DiffResult {
    /// Returns `true` if the diff contains no changes.
    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }
}

impl fmt::Display for DiffResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", DiffFormatter::new().fmt_diff(self))
    }
}

/// Compute a unified diff between `input.a` and `input.b`.
///
/// ```
/// use textdiff::{split_lines, unified_diff, DiffInput};
///
/// let a = split_lines("one\ntwo\nthree\n");
/// let b = split_lines("one\nTWO\nthree\n");
/// let diff = unified_diff(DiffInput {
///     a: &a,
///     b: &b,
///     from_file: "original",
///     to_file: "modified",
///     ..Default::default()
/// });
///
/// let expected = "\
/// --- original
/// +++ modified
/// @@ -1,3 +1,3 @@
///  one
/// -two
/// +TWO
///  three
/// ";
/// assert_eq!(diff.to_string(), expected);
/// ```
pub fn unified_diff(input: DiffInput<'_>) -> DiffResult {
    let context = effective_context(input.context);
    let codes = SequenceMatcher::new(input.a, input.b).get_opcodes();

    let hunks = group_opcodes(&codes, context)
        .iter()
        .map(|group| build_hunk(input.a, input.b, group))
        .collect();

    DiffResult {
        from_file: input.from_file.to_owned(),
        to_file: input.to_file.to_owned(),
        hunks,
    }
}

/// Compute a context diff (in the style of `diff -c`) between `input.a`
/// and `input.b`.
///
/// Returns display-ready lines: a `*** from` / `--- to` header pair, then
/// per group a separator, the `a`-side lines (`"  "` for equal, `"! "` for
/// changed), and the `b`-side lines likewise. Equal inputs yield an empty
/// vector.
pub fn context_diff(input: DiffInput<'_>) -> Vec<String> {
    let context = effective_context(input.context);
    let codes = SequenceMatcher::new(input.a, input.b).get_opcodes();
    let groups = group_opcodes(&codes, context);

    if groups.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    out.push(format!("*** {}\n", input.from_file));
    out.push(format!("--- {}\n", input.to_file));

    for group in &groups {
        let first = &group[0];
        let last = &group[group.len() - 1];

        out.push("***************\n".to_owned());
        out.push(format!("*** {},{} ****\n", first.i1 + 1, last.i2));
        for op in group {
            let prefix = match op.tag {
                Op::Equal => "  ",
                Op::Delete | Op::Replace => "! ",
                Op::Insert => continue,
            };
            for line in &input.a[op.i1..op.i2] {
                out.push(format!("{}{}", prefix, line));
            }
        }

        out.push(format!("--- {},{} ----\n", first.j1 + 1, last.j2));
        for op in group {
            let prefix = match op.tag {
                Op::Equal => "  ",
                Op::Insert | Op::Replace => "! ",
                Op::Delete => continue,
            };
            for line in &input.b[op.j1..op.j2] {
                out.push(format!("{}{}", prefix, line));
            }
        }
    }
    out
}

/// Compute an ndiff-style delta between `a` and `b`.
///
/// Every line of both inputs appears in the output exactly once, behind a
/// two-character prefix: `"  "` for lines common to both, `"- "` for lines
/// only in `a`, `"+ "` for lines only in `b`. The delta is lossless; see
/// [`restore`].
///
/// ```
/// use textdiff::{ndiff, split_lines};
///
/// let a = split_lines("one\ntwo\nthree\n");
/// let b = split_lines("one\nTWO\nthree\n");
/// assert_eq!(
///     ndiff(&a, &b),
///     ["  one\n", "- two\n", "+ TWO\n", "  three\n"],
/// );
/// ```
pub fn ndiff(a: &[&str], b: &[&str]) -> Vec<String> {
    let codes = SequenceMatcher::new(a, b).get_opcodes();
    let mut out = Vec::new();
    for op in codes {
        match op.tag {
            Op::Equal => {
                for line in &a[op.i1..op.i2] {
                    out.push(format!("  {}", line));
                }
            }
            Op::Insert => {
                for line in &b[op.j1..op.j2] {
                    out.push(format!("+ {}", line));
                }
            }
            Op::Delete => {
                for line in &a[op.i1..op.i2] {
                    out.push(format!("- {}", line));
                }
            }
            Op::Replace => {
                for line in &a[op.i1..op.i2] {
                    out.push(format!("- {}", line));
                }
                for line in &b[op.j1..op.j2] {
                    out.push(format!("+ {}", line));
                }
            }
        }
    }
    out
}

/// Reconstruct one side of an [`ndiff`] delta.
///
/// `which` selects the sequence to recover: `1` for the original, `2` for
/// the modified. Any other value selects nothing and yields an empty
/// vector.
///
/// ```
/// use textdiff::{ndiff, restore, split_lines};
///
/// let a = split_lines("one\ntwo\n");
/// let b = split_lines("one\nTWO\n");
/// let delta = ndiff(&a, &b);
/// assert_eq!(restore(&delta, 1), a);
/// assert_eq!(restore(&delta, 2), b);
/// ```
pub fn restore<S: AsRef<str>>(delta: &[S], which: usize) -> Vec<String> {
    let tag = match which {
        1 => "- ",
        2 => "+ ",
        _ => return Vec::new(),
    };
    delta
        .iter()
        .filter_map(|line| {
            let line = line.as_ref();
            line.strip_prefix("  ")
                .or_else(|| line.strip_prefix(tag))
                .map(str::to_owned)
        })
        .collect()
}

fn effective_context(context: usize) -> usize {
    if context == 0 {
        DEFAULT_CONTEXT
    } else {
        context
    }
}

/// Collapse an opcode stream into hunk-sized groups.
///
/// Equal stretches longer than `2·context` separate groups; the leading
/// and trailing equal runs are clipped to at most `context` lines. A
/// stream with no changes produces no groups.
pub(crate) fn group_opcodes(codes: &[OpCode], context: usize) -> Vec<Vec<OpCode>> {
    let mut codes = codes.to_vec();
    if codes.is_empty() {
        return Vec::new();
    }

    // Clip the edges: the first equal run keeps only its last `context`
    // lines, the last only its first `context` lines.
    if let Some(first) = codes.first_mut() {
        if first.tag == Op::Equal {
            first.i1 = cmp::max(first.i1, first.i2.saturating_sub(context));
            first.j1 = cmp::max(first.j1, first.j2.saturating_sub(context));
        }
    }
    if let Some(last) = codes.last_mut() {
        if last.tag == Op::Equal {
            last.i2 = cmp::min(last.i2, last.i1 + context);
            last.j2 = cmp::min(last.j2, last.j1 + context);
        }
    }

    let mut groups = Vec::new();
    let mut group: Vec<OpCode> = Vec::new();
    for op in codes {
        if op.tag == Op::Equal && op.i2 - op.i1 > 2 * context {
            // Close the current group with a head of `context` equal lines
            // and start the next one with the matching tail.
            group.push(OpCode {
                tag: Op::Equal,
                i1: op.i1,
                i2: cmp::min(op.i2, op.i1 + context),
                j1: op.j1,
                j2: cmp::min(op.j2, op.j1 + context),
            });
            groups.push(mem::take(&mut group));
            group.push(OpCode {
                tag: Op::Equal,
                i1: cmp::max(op.i1, op.i2 - context),
                i2: op.i2,
                j1: cmp::max(op.j1, op.j2 - context),
                j2: op.j2,
            });
        } else {
            group.push(op);
        }
    }
    // A trailing group that is a lone equal run carries no changes; this
    // is what an equal-input stream reduces to.
    if !(group.is_empty() || (group.len() == 1 && group[0].tag == Op::Equal)) {
        groups.push(group);
    }
    groups
}

fn build_hunk(a: &[&str], b: &[&str], group: &[OpCode]) -> Hunk {
    let first = &group[0];
    let last = &group[group.len() - 1];

    let mut lines = Vec::new();
    for op in group {
        match op.tag {
            Op::Equal => {
                for line in &a[op.i1..op.i2] {
                    lines.push(format!(" {}", line));
                }
            }
            Op::Insert => {
                for line in &b[op.j1..op.j2] {
                    lines.push(format!("+{}", line));
                }
            }
            Op::Delete => {
                for line in &a[op.i1..op.i2] {
                    lines.push(format!("-{}", line));
                }
            }
            Op::Replace => {
                for line in &a[op.i1..op.i2] {
                    lines.push(format!("-{}", line));
                }
                for line in &b[op.j1..op.j2] {
                    lines.push(format!("+{}", line));
                }
            }
        }
    }

    Hunk {
        old_start: first.i1 + 1,
        old_lines: last.i2 - first.i1,
        new_start: first.j1 + 1,
        new_lines: last.j2 - first.j1,
        lines,
    }
}
