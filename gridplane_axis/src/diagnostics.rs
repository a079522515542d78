// Copyright 2025 the Gridplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Developer-facing diagnostics.
//!
//! Nothing in Gridplane fails: malformed configuration, degenerate geometry
//! and out-of-range requests are all recovered from locally (clamped, padded,
//! dropped) so that an interactive render loop is never interrupted. This
//! module lets embedders find out when that happened.
//!
//! Recoveries are reported to a [`DiagnosticSink`]. The default sink,
//! [`NoDiagnostics`], discards them. [`DiagnosticLog`] keeps them for tests
//! and inspectors, and with the `tracing` feature [`TracingDiagnostics`]
//! forwards them to `tracing`.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::Orientation;

/// Which per-line sequence a diagnostic refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineSequence {
    /// Grid line colors.
    LineColors,
    /// Tick lengths.
    Ticks,
    /// Label text.
    Labels,
}

/// A locally recovered problem.
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// A keyed tick or label entry whose key is not a number was dropped.
    UnparsableKey {
        /// Axis the entry belonged to.
        orientation: Orientation,
        /// Which keyed map held the entry.
        sequence: LineSequence,
        /// The offending key.
        key: String,
    },
    /// A per-line sequence had the wrong length and was padded or truncated.
    LengthMismatch {
        /// Axis the sequence belonged to.
        orientation: Orientation,
        /// Which sequence was adjusted.
        sequence: LineSequence,
        /// Number of resolved lines.
        expected: usize,
        /// Length that was supplied.
        found: usize,
    },
    /// Padding contained a negative or non-finite side and was replaced by zero.
    InvalidPadding {
        /// Axis the padding belonged to.
        orientation: Orientation,
    },
    /// A non-finite line value was dropped.
    NonFiniteLine {
        /// Axis the value belonged to.
        orientation: Orientation,
        /// Index of the value in the configured sequence.
        index: usize,
    },
    /// A line's tick and label were skipped because its geometry degenerated.
    DegenerateLine {
        /// Axis the line belonged to.
        orientation: Orientation,
        /// Index of the line in the resolved sequence.
        index: usize,
    },
    /// A requested zoom was outside the allowed range and was clamped.
    ZoomClamped {
        /// The requested zoom.
        requested: f64,
        /// The zoom actually applied.
        applied: f64,
    },
    /// A non-finite input was ignored.
    NonFiniteInput {
        /// What the input was for.
        what: &'static str,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnparsableKey {
                orientation,
                sequence,
                key,
            } => write!(
                f,
                "{orientation:?} axis: dropped {sequence:?} entry with non-numeric key {key:?}"
            ),
            Self::LengthMismatch {
                orientation,
                sequence,
                expected,
                found,
            } => write!(
                f,
                "{orientation:?} axis: {sequence:?} has {found} entries for {expected} lines"
            ),
            Self::InvalidPadding { orientation } => {
                write!(f, "{orientation:?} axis: invalid padding replaced by zero")
            }
            Self::NonFiniteLine { orientation, index } => {
                write!(f, "{orientation:?} axis: dropped non-finite line value #{index}")
            }
            Self::DegenerateLine { orientation, index } => write!(
                f,
                "{orientation:?} axis: skipped tick and label of degenerate line #{index}"
            ),
            Self::ZoomClamped { requested, applied } => {
                write!(f, "zoom {requested} clamped to {applied}")
            }
            Self::NonFiniteInput { what } => write!(f, "ignored non-finite {what}"),
        }
    }
}

/// Receives diagnostics.
///
/// This is a callback sink in the spirit of a trace hook: implementors decide
/// whether to log, count, or store what they receive.
pub trait DiagnosticSink {
    /// Called once per recovered problem.
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Discards every diagnostic.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDiagnostics;

impl DiagnosticSink for NoDiagnostics {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

/// Stores diagnostics in arrival order.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticLog {
    entries: Vec<Diagnostic>,
}

impl DiagnosticLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded diagnostics.
    #[must_use]
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes and returns all recorded diagnostics.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        core::mem::take(&mut self.entries)
    }
}

impl DiagnosticSink for DiagnosticLog {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Forwards diagnostics to `tracing` at `WARN` level.
#[cfg(feature = "tracing")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

#[cfg(feature = "tracing")]
impl DiagnosticSink for TracingDiagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(target: "gridplane", %diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn log_records_in_order() {
        let mut log = DiagnosticLog::new();
        log.report(Diagnostic::InvalidPadding {
            orientation: Orientation::Horizontal,
        });
        log.report(Diagnostic::ZoomClamped {
            requested: 20.0,
            applied: 10.0,
        });
        assert_eq!(log.entries().len(), 2);
        assert!(matches!(log.entries()[1], Diagnostic::ZoomClamped { .. }));

        let taken = log.take();
        assert_eq!(taken.len(), 2);
        assert!(log.is_empty());
    }

    #[test]
    fn sinks_compose_through_mut_references() {
        fn report_into(mut sink: impl DiagnosticSink) {
            sink.report(Diagnostic::NonFiniteInput { what: "zoom" });
        }
        let mut log = DiagnosticLog::new();
        report_into(&mut log);
        report_into(NoDiagnostics);
        assert_eq!(log.entries().len(), 1);
    }

    #[test]
    fn display_names_the_axis() {
        let text = Diagnostic::LengthMismatch {
            orientation: Orientation::Vertical,
            sequence: LineSequence::Labels,
            expected: 3,
            found: 1,
        }
        .to_string();
        assert!(text.contains("Vertical"));
        assert!(text.contains("Labels"));
    }
}
