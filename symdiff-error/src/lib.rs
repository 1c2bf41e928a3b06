//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.

// lets `#[derive(ErrorKind)]` refer to `symdiff_error` from inside this crate's own tests
extern crate self as symdiff_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::Debug, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send + Sync {
    /// Returns `self` as [`Any`], so that callers can recover the concrete error kind.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source text that can be highlighted.
///
/// Errors raised on values that never had source text (such as a floating-point literal passed
/// directly to a constructor) have no spans; their reports only carry the message and help.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source text that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns the kind of this error if it is of type `T`.
    pub fn downcast_ref<T: ErrorKind + 'static>(&self) -> Option<&T> {
        self.kind.as_any().downcast_ref()
    }

    /// Returns true if the kind of this error is of type `T`.
    pub fn is<T: ErrorKind + 'static>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Writes the report for this error to the given writer, using `src` as the source text the
    /// spans point into.
    pub fn write_report(&self, src: &str, w: impl io::Write) -> io::Result<()> {
        self.build_report("input").write(("input", Source::from(src)), w)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src: &str) {
        // nothing sensible to do if stderr itself is gone
        let _ = self.build_report("input").eprint(("input", Source::from(src)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symdiff_attrs::ErrorKind;

    /// A literal that could not be understood.
    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        message = format!("`{}` is not a number", self.literal),
        labels = ["this literal"],
        help = "try an integer, a fraction, or a decimal number",
    )]
    struct BadLiteral {
        literal: String,
    }

    /// No source text at all.
    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(message = "the value is not finite", labels = ["unused label"])]
    struct NotFinite;

    fn render(err: &Error, src: &str) -> String {
        let mut buf = Vec::new();
        err.write_report(src, &mut buf).unwrap();
        String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
    }

    #[test]
    fn report_with_span() {
        let err = Error::new(vec![0..3], BadLiteral { literal: "abc".to_string() });
        let report = render(&err, "abc");
        assert!(report.contains("`abc` is not a number"), "{report}");
        assert!(report.contains("this literal"), "{report}");
        assert!(report.contains("try an integer"), "{report}");
    }

    #[test]
    fn report_without_span() {
        let err = Error::new(Vec::new(), NotFinite);
        let report = render(&err, "");
        assert!(report.contains("the value is not finite"), "{report}");
        assert!(!report.contains("unused label"), "{report}");
    }

    #[test]
    fn downcast() {
        let err = Error::new(vec![0..3], BadLiteral { literal: "abc".to_string() });
        assert!(err.is::<BadLiteral>());
        assert!(!err.is::<NotFinite>());
        assert_eq!(
            err.downcast_ref::<BadLiteral>(),
            Some(&BadLiteral { literal: "abc".to_string() }),
        );
    }
}
