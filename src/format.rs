use crate::diff::{DiffResult, Hunk};
use ansi_term::{Color, Style};
use std::fmt::{Display, Formatter, Result};

/// Struct used to adjust the formatting of a [`DiffResult`]
///
/// By default the output is the plain unified format; [`with_color`]
/// wraps each line in ANSI styles without altering its text, so a
/// colorless formatter renders byte-identically to `Display`.
///
/// [`with_color`]: DiffFormatter::with_color
#[derive(Debug)]
pub struct DiffFormatter {
    with_color: bool,

    context: Style,
    delete: Style,
    insert: Style,
    hunk_header: Style,
    file_header: Style,
}

impl DiffFormatter {
    /// Construct a new formatter
    pub fn new() -> Self {
        Self {
            with_color: false,

            context: Style::new(),
            delete: Color::Red.normal(),
            insert: Color::Green.normal(),
            hunk_header: Color::Cyan.normal(),
            file_header: Style::new().bold(),
        }
    }

    /// Enable formatting the diff with color
    pub fn with_color(mut self) -> Self {
        self.with_color = true;
        self
    }

    /// Returns a `Display` impl which can be used to print a diff
    pub fn fmt_diff<'a>(&'a self, diff: &'a DiffResult) -> impl Display + 'a {
        DiffDisplay { f: self, diff }
    }

    fn fmt_hunk<'a>(&'a self, hunk: &'a Hunk) -> impl Display + 'a {
        HunkDisplay { f: self, hunk }
    }

    fn fmt_line<'a>(&'a self, line: &'a str) -> impl Display + 'a {
        LineDisplay { f: self, line }
    }
}

impl Default for DiffFormatter {
    fn default() -> Self {
        Self::new()
    }
}

struct DiffDisplay<'a> {
    f: &'a DiffFormatter,
    diff: &'a DiffResult,
}

impl Display for DiffDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        // No changes renders to nothing, header included
        if self.diff.hunks.is_empty() {
            return Ok(());
        }

        if self.f.with_color {
            write!(f, "{}", self.f.file_header.prefix())?;
        }
        writeln!(f, "--- {}", self.diff.from_file)?;
        writeln!(f, "+++ {}", self.diff.to_file)?;
        if self.f.with_color {
            write!(f, "{}", self.f.file_header.suffix())?;
        }

        for hunk in &self.diff.hunks {
            write!(f, "{}", self.f.fmt_hunk(hunk))?;
        }

        Ok(())
    }
}

struct HunkDisplay<'a> {
    f: &'a DiffFormatter,
    hunk: &'a Hunk,
}

impl Display for HunkDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.f.with_color {
            write!(f, "{}", self.f.hunk_header.prefix())?;
        }
        write!(
            f,
            "@@ -{},{} +{},{} @@",
            self.hunk.old_start, self.hunk.old_lines, self.hunk.new_start, self.hunk.new_lines
        )?;
        if self.f.with_color {
            write!(f, "{}", self.f.hunk_header.suffix())?;
        }
        writeln!(f)?;

        for line in &self.hunk.lines {
            write!(f, "{}", self.f.fmt_line(line))?;
        }

        Ok(())
    }
}

struct LineDisplay<'a> {
    f: &'a DiffFormatter,
    line: &'a str,
}

impl Display for LineDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let style = match self.line.as_bytes().first() {
            Some(b'-') => self.f.delete,
            Some(b'+') => self.f.insert,
            _ => self.f.context,
        };

        if self.f.with_color {
            write!(f, "{}", style.prefix())?;
        }
        write!(f, "{}", self.line)?;
        if self.f.with_color {
            write!(f, "{}", style.suffix())?;
        }

        Ok(())
    }
}
