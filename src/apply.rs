//! Positional application of unified-diff patches

use crate::utils::LineIter;
use std::cmp;
use thiserror::Error;

/// An error returned when [`apply_patch`] fails
///
/// Errors surface only at the return boundary: the base sequence is never
/// modified, and no partially patched result is produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplyError {
    /// A `@@` line was found but matches neither the counted
    /// (`@@ -1,3 +1,3 @@`) nor the count-less (`@@ -1 +1 @@`) form
    #[error("malformed hunk header: {0:?}")]
    MalformedHunkHeader(String),

    /// A removal or context line in the patch disagrees with the base
    /// sequence
    #[error("patch mismatch at line {line}: expected {expected:?}, got {actual:?}")]
    PatchMismatch {
        /// 1-based line index into the patched sequence
        line: usize,
        /// The text the patch expected to find
        expected: String,
        /// The text actually present
        actual: String,
    },
}

/// Apply a unified-diff patch to a base sequence of lines.
///
/// Hunks are applied positionally at the line numbers given in their
/// headers, adjusted by a running offset as earlier hunks grow or shrink
/// the result; there is no searching for context. Each hunk is treated as
/// a block replacement: its pre-image (context and removal lines, in
/// order) is checked against the base text by exact equality, terminators
/// included, and replaced by its post-image (context and insertion
/// lines). The patch must therefore have been generated against exactly
/// this sequence.
///
/// Header lines (`---` / `+++`) and unrecognized preamble are skipped.
///
/// ```
/// use textdiff::{apply_patch, split_lines, unified_diff, DiffInput};
///
/// let a = split_lines("foo\nbar\nbaz\n");
/// let b = split_lines("foo\nBAR\nbaz\n");
/// let patch = unified_diff(DiffInput {
///     a: &a,
///     b: &b,
///     from_file: "a",
///     to_file: "b",
///     ..Default::default()
/// })
/// .to_string();
///
/// assert_eq!(apply_patch(&a, &patch).unwrap(), b);
/// ```
pub fn apply_patch(a: &[&str], patch: &str) -> Result<Vec<String>, ApplyError> {
    let lines: Vec<&str> = LineIter::new(patch).collect();

    let mut i = 0;
    while i < lines.len() && (lines[i].starts_with("---") || lines[i].starts_with("+++")) {
        i += 1;
    }

    let mut result: Vec<String> = a.iter().map(|line| (*line).to_owned()).collect();
    let mut offset: isize = 0;

    while i < lines.len() {
        if !lines[i].starts_with("@@") {
            i += 1;
            continue;
        }
        let (old_start, _, _, _) = parse_hunk_header(lines[i])?;
        i += 1;

        let pos = cmp::max(old_start as isize - 1 + offset, 0) as usize;
        let pos = cmp::min(pos, result.len());

        // Pre-image: the lines the hunk expects at `pos` (context +
        // removals). Post-image: what replaces them (context + inserts).
        let mut pre = Vec::new();
        let mut post = Vec::new();
        while i < lines.len() {
            let line = lines[i];
            if line.starts_with("@@") || line.starts_with("---") {
                break;
            }
            if let Some(rest) = line.strip_prefix('-') {
                pre.push(rest);
            } else if let Some(rest) = line.strip_prefix('+') {
                post.push(rest);
            } else if let Some(rest) = line.strip_prefix(' ') {
                pre.push(rest);
                post.push(rest);
            } else if line == "\n" {
                // An empty context line may omit its leading space
                pre.push(line);
                post.push(line);
            }
            // Anything else is skipped
            i += 1;
        }

        for (k, expected) in pre.iter().enumerate() {
            let actual = result.get(pos + k).map(String::as_str).unwrap_or("");
            if actual != *expected {
                return Err(ApplyError::PatchMismatch {
                    line: pos + k + 1,
                    expected: (*expected).to_owned(),
                    actual: actual.to_owned(),
                });
            }
        }

        let end = cmp::min(pos + pre.len(), result.len());
        result.splice(pos..end, post.iter().map(|line| (*line).to_owned()));
        offset += post.len() as isize - pre.len() as isize;
    }

    Ok(result)
}

/// Parse `@@ -{start},{count} +{start},{count} @@`, falling back to the
/// count-less `@@ -{start} +{start} @@` form with counts of 1.
fn parse_hunk_header(line: &str) -> Result<(usize, usize, usize, usize), ApplyError> {
    parse_hunk_header_inner(line)
        .ok_or_else(|| ApplyError::MalformedHunkHeader(line.trim_end_matches('\n').to_owned()))
}

fn parse_hunk_header_inner(line: &str) -> Option<(usize, usize, usize, usize)> {
    let rest = line.strip_prefix("@@ -")?;
    let (ranges, _) = split_at_exclusive(rest, " @@")?;
    let (old, new) = split_at_exclusive(ranges, " +")?;
    let (old_start, old_count) = range(old)?;
    let (new_start, new_count) = range(new)?;
    Some((old_start, old_count, new_start, new_count))
}

fn split_at_exclusive<'a>(s: &'a str, needle: &str) -> Option<(&'a str, &'a str)> {
    let idx = s.find(needle)?;
    Some((&s[..idx], &s[idx + needle.len()..]))
}

fn range(s: &str) -> Option<(usize, usize)> {
    match s.split_once(',') {
        Some((start, count)) => Some((start.parse().ok()?, count.parse().ok()?)),
        None => Some((s.parse().ok()?, 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_counted_hunk_header() {
        let a = ["one\n", "two\n", "three\n"];
        let patch = "--- a\n+++ b\n@@ -1,3 +1,3 @@\n one\n-two\n+TWO\n three\n";
        let patched = apply_patch(&a, patch).unwrap();
        assert_eq!(patched, ["one\n", "TWO\n", "three\n"]);
    }

    #[test]
    fn applies_countless_hunk_header() {
        let a = ["one\n"];
        let patch = "@@ -1 +1 @@\n-one\n+ONE\n";
        let patched = apply_patch(&a, patch).unwrap();
        assert_eq!(patched, ["ONE\n"]);
    }

    #[test]
    fn inserts_after_leading_context() {
        let a = ["one\n", "three\n"];
        let patch = "@@ -1,2 +1,3 @@\n one\n+two\n three\n";
        let patched = apply_patch(&a, patch).unwrap();
        assert_eq!(patched, ["one\n", "two\n", "three\n"]);
    }

    #[test]
    fn skips_unrecognized_preamble() {
        let a = ["one\n", "two\n"];
        let patch = "diff --git a/f b/f\nindex 123..456\n--- a/f\n+++ b/f\n@@ -1,2 +1,2 @@\n one\n-two\n+TWO\n";
        let patched = apply_patch(&a, patch).unwrap();
        assert_eq!(patched, ["one\n", "TWO\n"]);
    }

    #[test]
    fn empty_patch_is_identity() {
        let a = ["one\n", "two\n"];
        assert_eq!(apply_patch(&a, "").unwrap(), ["one\n", "two\n"]);
    }

    #[test]
    fn rejects_malformed_hunk_header() {
        let a = ["one\n"];
        let err = apply_patch(&a, "@@ nonsense @@\n-one\n").unwrap_err();
        assert_eq!(
            err,
            ApplyError::MalformedHunkHeader("@@ nonsense @@".to_owned())
        );
    }

    #[test]
    fn rejects_mismatched_removal() {
        let a = ["one\n", "two\n"];
        let patch = "@@ -1,1 +1,1 @@\n-uno\n+ONE\n";
        let err = apply_patch(&a, patch).unwrap_err();
        assert_eq!(
            err,
            ApplyError::PatchMismatch {
                line: 1,
                expected: "uno\n".to_owned(),
                actual: "one\n".to_owned(),
            }
        );
    }

    #[test]
    fn base_is_untouched_on_failure() {
        let a = ["one\n", "two\n"];
        let patch = "@@ -2,1 +2,1 @@\n-mismatch\n+X\n";
        assert!(apply_patch(&a, patch).is_err());
        assert_eq!(a, ["one\n", "two\n"]);
    }

    #[test]
    fn offset_carries_across_hunks() {
        let a = ["a\n", "b\n", "c\n", "d\n", "e\n", "f\n", "g\n", "h\n", "i\n", "j\n"];
        // The first hunk grows the result by two lines, shifting the
        // second hunk's target position.
        let patch = "\
--- a
+++ b
@@ -1,1 +1,3 @@
 a
+x
+y
@@ -9,1 +11,1 @@
-i
+I
";
        let patched = apply_patch(&a, patch).unwrap();
        assert_eq!(
            patched,
            ["a\n", "x\n", "y\n", "b\n", "c\n", "d\n", "e\n", "f\n", "g\n", "h\n", "I\n", "j\n"]
        );
    }
}
