//! Rendering of error source chains.

use std::backtrace::BacktraceStatus;
use std::error::Error;
use std::fmt::Write as _;

use crate::ErrorContext;

/// Iterates over `error` and every `source()` below it.
pub fn chain<'a>(error: &'a (dyn Error + 'static)) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    std::iter::successors(Some(error), |&e| e.source())
}

/// Renders `error` and its causes, one numbered entry per link.
///
/// Each entry is `#<n>: <message>`; entries are separated by a blank line.
/// An [`ErrorContext`] link with data is followed by a `    Data:` line and
/// one tab-indented `key: value` line per entry.
///
/// ```text
/// #1: could not import customers
///     Data:
///     	file: customers.csv
///
/// #2: line 3 is malformed
/// ```
pub fn render_chain(error: &(dyn Error + 'static)) -> String {
    let mut out = String::new();

    for (index, link) in chain(error).enumerate() {
        if index > 0 {
            out.push_str("\n\n");
        }
        let _ = write!(out, "#{}: {link}", index + 1);

        if let Some(context) = link.downcast_ref::<ErrorContext>()
            && context.has_data()
        {
            out.push_str("\n    Data:");
            for (key, value) in context.data_entries() {
                let _ = write!(out, "\n\t{key}: {value}");
            }
        }
    }

    out
}

/// Renders an [`anyhow::Error`] chain, followed by its backtrace when one
/// was captured.
pub fn render_report(error: &anyhow::Error) -> String {
    let root: &(dyn Error + 'static) = error.as_ref();
    let mut out = render_chain(root);

    let backtrace = error.backtrace();
    if backtrace.status() == BacktraceStatus::Captured {
        let _ = write!(out, "\n\nBacktrace:\n{backtrace}");
    }

    out
}
