use std::collections::VecDeque;

/// Forward-only line reader with bounded lookahead.
///
/// Wraps any iterator of lines and lets a consumer grab a window of
/// "current line + next `k` lines" while the main pass keeps moving strictly
/// forward. Lines pulled ahead for a window are parked in an internal queue
/// and replayed by later [`advance`](LineWindow::advance) calls, so every
/// input line is yielded exactly once no matter how many windows are taken.
pub struct LineWindow<'a, I>
where
    I: Iterator<Item = &'a str>,
{
    source: I,
    pending: VecDeque<&'a str>,
    current: Option<&'a str>,
}

impl<'a, I> LineWindow<'a, I>
where
    I: Iterator<Item = &'a str>,
{
    pub fn new(source: I) -> Self {
        Self {
            source,
            pending: VecDeque::new(),
            current: None,
        }
    }

    /// Consumes and returns the next line, or `None` at end of input.
    ///
    /// Lines already fetched for a context window are replayed before new
    /// lines are pulled from the source.
    pub fn advance(&mut self) -> Option<&'a str> {
        self.current = self.pending.pop_front().or_else(|| self.source.next());
        self.current
    }

    /// Returns the current line plus up to `extra` following lines.
    ///
    /// Lookahead lines are fetched from the source on demand and kept in the
    /// pending queue, so a later [`advance`](LineWindow::advance) still yields
    /// them. If the source ends early the window is simply shorter. Calling
    /// this again for the same current line re-derives the same window,
    /// extending the lookahead only if `extra` grew.
    ///
    /// Before the first `advance` there is no anchor line and the window is
    /// empty.
    pub fn capture_context(&mut self, extra: usize) -> Vec<&'a str> {
        let mut window = Vec::with_capacity(extra + 1);
        let Some(current) = self.current else {
            return window;
        };
        window.push(current);
        for i in 0..self.pending.len().min(extra) {
            window.push(self.pending[i]);
        }
        while window.len() < extra + 1 {
            match self.source.next() {
                Some(line) => {
                    self.pending.push_back(line);
                    window.push(line);
                }
                None => break,
            }
        }
        window
    }
}
