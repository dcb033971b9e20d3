//! The [`ErrorKind`] trait implemented by every user-facing error, and the span-carrying
//! [`Error`] that pairs a kind with the source regions it points at.

use ariadne::{Color, Report, Source};
use std::{fmt::Debug, io, ops::Range};

/// The color used to highlight expressions in reports.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// A kind of error that can be rendered as a report over some source text.
///
/// Most implementations are derived with `canon_attrs::ErrorKind`.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error. `spans` are the regions of the source that the error's
    /// labels point at, in order.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Builds a report from this error's kind and spans.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Renders the report for this error over `input` into `writer`.
    pub fn write_report(
        &self,
        src_id: &str,
        input: &str,
        writer: impl io::Write,
    ) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(input)), writer)
    }

    /// Renders the report for this error over `input` to stderr.
    ///
    /// [`Report`] has no `Display` implementation, so this is the way to show it to a user.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }
}
