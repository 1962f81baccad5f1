//! Line splitting utilities

/// Iterator over the lines of a string, including the `\n` character.
///
/// Unlike [`str::lines`], the terminator is kept attached to its line, so
/// concatenating the yielded items reproduces the input exactly. The final
/// line is yielded without a `\n` if the input does not end with one.
pub struct LineIter<'a>(&'a str);

impl<'a> LineIter<'a> {
    pub fn new(text: &'a str) -> Self {
        Self(text)
    }
}

impl<'a> Iterator for LineIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            return None;
        }

        let end = if let Some(idx) = self.0.find('\n') {
            idx + 1
        } else {
            self.0.len()
        };

        let (line, remaining) = self.0.split_at(end);
        self.0 = remaining;
        Some(line)
    }
}

/// Split a string into lines, preserving line endings.
///
/// Each line retains its trailing `\n` if present; a trailing `\n` in the
/// input does not produce an empty final entry. This is the splitting used
/// by [`unified_diff`] and friends, and it makes round-tripping safe:
/// [`join_lines`] reproduces the input exactly.
///
/// ```
/// use textdiff::split_lines;
///
/// assert_eq!(split_lines("foo\nbar\n"), ["foo\n", "bar\n"]);
/// assert_eq!(split_lines("foo\nbar"), ["foo\n", "bar"]);
/// assert_eq!(split_lines(""), Vec::<&str>::new());
/// ```
///
/// [`unified_diff`]: crate::unified_diff
pub fn split_lines(s: &str) -> Vec<&str> {
    LineIter::new(s).collect()
}

/// Join lines produced by [`split_lines`] back into a single string.
///
/// Lines already carry their terminators, so this is plain concatenation.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    lines.iter().map(AsRef::as_ref).collect()
}
