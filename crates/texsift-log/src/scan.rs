use crate::record::{Message, Report};
use crate::rules::{classify_line, Classification};
use crate::window::LineWindow;

/// Default number of trailing context lines kept per message.
pub const DEFAULT_CONTEXT_LINES: usize = 2;

/// Scan engine.
///
/// Holds only configuration: every [`scan`](Scanner::scan) call builds its
/// collections locally and returns an immutable [`Report`], so one value can
/// be reused or shared across any number of logs.
#[derive(Debug, Clone)]
pub struct Scanner {
    context_lines: usize,
}

impl Default for Scanner {
    fn default() -> Self {
        Self {
            context_lines: DEFAULT_CONTEXT_LINES,
        }
    }
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many lines after the triggering line are kept as context.
    pub fn context_lines(mut self, n: usize) -> Self {
        self.context_lines = n;
        self
    }

    /// Classifies a whole log, splitting it on line boundaries.
    pub fn scan(&self, log: &str) -> Report {
        self.scan_lines(log.lines())
    }

    /// Classifies an already-split sequence of lines.
    ///
    /// Blank lines are skipped before classification; for every other line
    /// the first matching rule produces a record, which is stored together
    /// with a context window of the triggering line plus up to
    /// `context_lines` following lines.
    pub fn scan_lines<'a, I>(&self, lines: I) -> Report
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut badboxes = Vec::new();
        let mut missing_refs = Vec::new();

        let mut reader = LineWindow::new(lines.into_iter());
        while let Some(line) = reader.advance() {
            if line.is_empty() {
                continue;
            }
            match classify_line(line) {
                Some(Classification::MissingRef(fields)) => missing_refs.push(Message {
                    fields,
                    context: owned_context(&mut reader, self.context_lines),
                }),
                Some(Classification::Badbox(fields)) => badboxes.push(Message {
                    fields,
                    context: owned_context(&mut reader, self.context_lines),
                }),
                Some(Classification::Warning(fields)) => warnings.push(Message {
                    fields,
                    context: owned_context(&mut reader, self.context_lines),
                }),
                Some(Classification::Error(fields)) => errors.push(Message {
                    fields,
                    context: owned_context(&mut reader, self.context_lines),
                }),
                Some(Classification::Info) => log::trace!("informational line skipped: {line}"),
                None => {}
            }
        }

        log::debug!(
            "scan done: {} errors, {} warnings, {} badboxes, {} missing refs",
            errors.len(),
            warnings.len(),
            badboxes.len(),
            missing_refs.len()
        );
        Report::new(errors, warnings, badboxes, missing_refs)
    }
}

fn owned_context<'a, I>(reader: &mut LineWindow<'a, I>, extra: usize) -> Vec<String>
where
    I: Iterator<Item = &'a str>,
{
    reader
        .capture_context(extra)
        .into_iter()
        .map(str::to_string)
        .collect()
}
