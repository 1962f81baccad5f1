//! Tools for computing, rendering, and applying differences between texts
//!
//! ## Overview
//!
//! This library compares two sequences of lines with a block-matching
//! engine in the tradition of Python's `difflib`: it finds the maximal
//! contiguous runs the sequences share, derives an edit script from them,
//! and renders that script in several standard forms: [unified
//! diff](unified_diff), [context diff](context_diff), and the line-per-line
//! [ndiff](ndiff) delta. The same engine powers a [similarity
//! ratio](sequence_ratio), [nearest-match selection](closest_match) from a
//! candidate list, [reconstruction](restore) of either input from an ndiff
//! delta, and [positional application](apply_patch) of a unified-diff
//! patch.
//!
//! All operations are pure functions over in-memory sequences: the caller
//! owns reading files and writing output. For the same inputs the output
//! is bit-identical, with no dependence on hash iteration order.
//!
//! ## Creating a diff
//!
//! Inputs are sequences of lines that keep their terminators, as produced
//! by [`split_lines`]:
//!
//! ```
//! use textdiff::{split_lines, unified_diff, DiffInput};
//!
//! let original = "The Way of Kings\nWords of Radiance\n";
//! let modified = "The Way of Kings\nWords of Radiance\nOathbringer\n";
//!
//! let a = split_lines(original);
//! let b = split_lines(modified);
//! let diff = unified_diff(DiffInput {
//!     a: &a,
//!     b: &b,
//!     from_file: "original",
//!     to_file: "modified",
//!     ..Default::default()
//! });
//!
//! let expected = "\
//! --- original
//! +++ modified
//! @@ -1,2 +1,3 @@
//!  The Way of Kings
//!  Words of Radiance
//! +Oathbringer
//! ";
//! assert_eq!(diff.to_string(), expected);
//! ```
//!
//! Equal inputs produce a result with no hunks, which renders to the
//! empty string. A [`DiffFormatter`] can render the same result with
//! color for terminal display.
//!
//! ## Applying a patch
//!
//! A unified-diff string produced by this library can be applied back to
//! the sequence it was generated from:
//!
//! ```
//! use textdiff::{apply_patch, split_lines, unified_diff, DiffInput};
//!
//! let a = split_lines("one\ntwo\nthree\n");
//! let b = split_lines("one\nTWO\nthree\n");
//! let patch = unified_diff(DiffInput {
//!     a: &a,
//!     b: &b,
//!     ..Default::default()
//! })
//! .to_string();
//!
//! assert_eq!(apply_patch(&a, &patch).unwrap(), b);
//! ```
//!
//! Application is positional: hunks land at the line numbers their
//! headers name (adjusted as earlier hunks grow or shrink the text), and
//! every context or removal line must match the base exactly. Unlike GNU
//! `patch`, nothing searches for a hunk's context elsewhere in the file.
//!
//! ## Similarity
//!
//! ```
//! use textdiff::{closest_match, string_ratio};
//!
//! assert_eq!(string_ratio("kitten", "sitting"), 2.0 * 4.0 / 13.0);
//!
//! let (best, ratio) = closest_match("appel", &["apple", "mango", "apply"]);
//! assert_eq!(best, "apple");
//! assert_eq!(ratio, 0.8);
//! ```
//!
//! ## Deltas
//!
//! [`ndiff`] renders every line of both inputs behind a two-character
//! prefix, and [`restore`] recovers either input from the delta:
//!
//! ```
//! use textdiff::{ndiff, restore, split_lines};
//!
//! let a = split_lines("one\ntwo\nthree\n");
//! let b = split_lines("one\nTWO\nthree\n");
//! let delta = ndiff(&a, &b);
//!
//! assert_eq!(delta, ["  one\n", "- two\n", "+ TWO\n", "  three\n"]);
//! assert_eq!(restore(&delta, 1), a);
//! assert_eq!(restore(&delta, 2), b);
//! ```

mod apply;
mod diff;
mod format;
mod matcher;
mod ratio;
mod utils;

pub use apply::{apply_patch, ApplyError};
pub use diff::{context_diff, ndiff, restore, unified_diff, DiffInput, DiffResult, Hunk};
pub use format::DiffFormatter;
pub use matcher::{get_matching_blocks, get_opcodes, Op, OpCode, SequenceMatch, SequenceMatcher};
pub use ratio::{closest_match, closest_matches, sequence_ratio, string_ratio};
pub use utils::{join_lines, split_lines, LineIter};
